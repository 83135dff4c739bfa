use crate::args::{Cli, Command, ENV_FILE_ENV_VAR};
use crate::config::GoldConfig;
use crate::gold::run_gold;
use anyhow::Context;
use clap::Parser;

pub enum Application {
    Gold(GoldConfig),
}

impl Application {
    pub fn init() -> anyhow::Result<Application> {
        // Preload environment variables from the .env file (if any) before parsing CLI args
        match std::env::var(ENV_FILE_ENV_VAR) {
            Ok(path) => dotenvy::from_filename(path).ok(),
            Err(_) => dotenvy::dotenv().ok(),
        };

        Self::from_cli(Cli::parse())
    }

    pub(crate) fn from_cli(cli: Cli) -> anyhow::Result<Application> {
        let application = match cli.cmd {
            Command::Gold(gold_args) => Application::Gold(
                GoldConfig::setup(gold_args).context("Invalid gold arguments")?,
            ),
        };

        Ok(application)
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Gold(gold_conf) => run_gold(gold_conf).await,
        }
    }
}
