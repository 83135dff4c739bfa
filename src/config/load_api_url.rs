use crate::error::GoldError;
use reqwest::Url;

/// Parses the NBP API base URL.
///
/// Only plain `http`/`https` bases without query or fragment are accepted,
/// since endpoint paths are appended to it.
pub(crate) fn load_api_url(input: &str) -> Result<Url, GoldError> {
    let s = input.trim();
    let invalid = |reason: &str| GoldError::InvalidUrl {
        url: input.to_string(),
        reason: reason.to_string(),
    };

    if s.is_empty() {
        return Err(invalid("API URL cannot be empty"));
    }

    let url = Url::parse(s).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("no query or fragment allowed, e.g. http://api.nbp.pl"));
    }

    Ok(url)
}
