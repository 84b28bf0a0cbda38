use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use config::{Cli, Config};
use dictionary::Dictionary;

mod app;
mod config;
mod render;
mod style;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match try_main(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env(cli)?;
    log::debug!("using dictionary at {} with a {:?} timeout", config.api_url, config.timeout);
    let dict = Dictionary::with_config(config.dictionary_config())
        .context("failed to set up the dictionary client")?;
    app::run(&dict, &config.word, render::render, &mut io::stdout()).await
}
