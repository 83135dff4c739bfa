use crate::error::GoldError;
use crate::source::GoldSource;
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::debug;

const PRICE_PATH: &[&str] = &["api", "cenyzlota"];
const RATE_PATH: &[&str] = &["api", "exchangerates", "rates", "a"];

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// National Bank of Poland public API client.
#[derive(Debug, Clone)]
pub(crate) struct NbpClient {
    client: Client,
    base: Url,
}

impl NbpClient {
    pub(crate) fn new(base: Url, timeout: Option<Duration>) -> Result<Self, GoldError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|source| GoldError::Transport {
            url: base.to_string(),
            source,
        })?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GoldError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GoldError::InvalidUrl {
                url: self.base.to_string(),
                reason: "cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn price_url(&self) -> Result<Url, GoldError> {
        self.endpoint(PRICE_PATH)
    }

    pub(crate) fn rate_url(&self, code: &str) -> Result<Url, GoldError> {
        let mut segments = RATE_PATH.to_vec();
        segments.push(code);
        self.endpoint(&segments)
    }

    async fn get(&self, url: &Url) -> Result<Response, GoldError> {
        debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|source| GoldError::Transport {
                url: url.to_string(),
                source,
            })?;

        debug!("{} from {url}", resp.status());
        Ok(resp)
    }

    async fn read_body(resp: Response, url: &Url) -> Result<Vec<u8>, GoldError> {
        let body = resp.bytes().await.map_err(|source| GoldError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl GoldSource for NbpClient {
    async fn fetch_price(&self) -> Result<Vec<u8>, GoldError> {
        let url = self.price_url()?;
        let resp = self.get(&url).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GoldError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Self::read_body(resp, &url).await
    }

    async fn fetch_rate(&self, code: &str) -> Result<Vec<u8>, GoldError> {
        let url = self.rate_url(code)?;
        let resp = self.get(&url).await?;

        // NBP answers 404 for codes outside table A
        let status = resp.status();
        if !status.is_success() {
            return Err(GoldError::InvalidCurrency {
                code: code.to_string(),
                status: status.as_u16(),
            });
        }

        Self::read_body(resp, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::DEFAULT_API_URL;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn client(base: &str) -> NbpClient {
        NbpClient::new(Url::parse(base).unwrap(), None).unwrap()
    }

    fn response(status: &str, content_length: usize, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {content_length}\r\nconnection: close\r\n\r\n{body}"
        )
    }

    /// Answers a single request with `reply` and hands back the request head.
    async fn serve_once(reply: String) -> (NbpClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(reply.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            String::from_utf8_lossy(&head).into_owned()
        });

        (client(&base), handle)
    }

    #[test]
    fn price_url_on_default_host() {
        let url = client(DEFAULT_API_URL).price_url().unwrap();
        assert_eq!(url.as_str(), "http://api.nbp.pl/api/cenyzlota");
    }

    #[test]
    fn rate_url_appends_code() {
        let url = client(DEFAULT_API_URL).rate_url("usd").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.nbp.pl/api/exchangerates/rates/a/usd"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let nbp = client("http://localhost:8080/mirror/");
        assert_eq!(
            nbp.price_url().unwrap().as_str(),
            "http://localhost:8080/mirror/api/cenyzlota"
        );
    }

    #[test]
    fn code_cannot_escape_its_segment() {
        let url = client(DEFAULT_API_URL).rate_url("../eur").unwrap();
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 5);
        assert_eq!(&segments[..4], RATE_PATH);
        assert!(segments[4].contains("%2F"));
    }

    #[tokio::test]
    async fn price_body_is_returned_on_success() {
        let body = r#"[{"data":"2024-01-02","cena":1.5}]"#;
        let (nbp, server) = serve_once(response("200 OK", body.len(), body)).await;

        let raw = nbp.fetch_price().await.unwrap();
        assert_eq!(raw, body.as_bytes());

        let head = server.await.unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /api/cenyzlota http/1.1"), "{head}");
        assert!(head.contains("accept: application/json"), "{head}");
        assert!(head.contains("user-agent: koko/"), "{head}");
    }

    #[tokio::test]
    async fn rate_404_is_invalid_currency() {
        let (nbp, server) = serve_once(response("404 Not Found", 9, "NotFound!")).await;

        let err = nbp.fetch_rate("xyz").await.unwrap_err();
        assert!(
            matches!(&err, GoldError::InvalidCurrency { code, status: 404 } if code == "xyz"),
            "got {err:?}"
        );

        let head = server.await.unwrap();
        assert!(
            head.starts_with("GET /api/exchangerates/rates/a/xyz HTTP/1.1"),
            "{head}"
        );
    }

    #[tokio::test]
    async fn rejected_rate_body_is_never_read() {
        // A truncated body would surface as Transport if it were read.
        let (nbp, server) = serve_once(response("404 Not Found", 100, "short")).await;

        let err = nbp.fetch_rate("xyz").await.unwrap_err();
        assert!(matches!(err, GoldError::InvalidCurrency { .. }), "got {err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn price_503_is_unexpected_status() {
        let (nbp, server) = serve_once(response("503 Service Unavailable", 0, "")).await;

        let err = nbp.fetch_price().await.unwrap_err();
        assert!(
            matches!(&err, GoldError::UnexpectedStatus { url, status: 503 } if url.ends_with("/api/cenyzlota")),
            "got {err:?}"
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn truncated_body_is_transport_error() {
        let (nbp, server) = serve_once(response("200 OK", 100, "[]")).await;

        let err = nbp.fetch_price().await.unwrap_err();
        assert!(matches!(err, GoldError::Transport { .. }), "got {err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let nbp = client(&base);
        let url = nbp.price_url().unwrap();
        let err = nbp.fetch_price().await.unwrap_err();

        assert!(matches!(err, GoldError::Transport { .. }), "got {err:?}");
        assert_eq!(err.to_string(), format!("request to {url} failed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
