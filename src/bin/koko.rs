use anyhow::{anyhow, Context, Result};
use koko::Application;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging().context("initializing logging")?;

    let application = Application::init()?;
    application.run().await
}

fn init_logging() -> Result<()> {
    // RUST_LOG wins; otherwise only warnings, so stdout keeps just the quote
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("{e}"))
}
