//! taskboard binary: argument parsing, logging setup, and dispatch.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use taskboard::api::ApiClient;
use taskboard::app::App;
use taskboard::cli::{Cli, Command};
use taskboard::config::Config;
use taskboard::format::format_report;
use taskboard::ui;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log. The interactive board owns the
    // terminal, so it defaults to no logging unless a destination is given;
    // `show` defaults to stderr.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let log_dest = cli.log.as_deref().unwrap_or(match &cli.command {
        Some(Command::Show) => "2",
        _ => "0",
    });
    match log_dest {
        "0" | "off" => {}
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;
    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.clone();
    }

    let client = ApiClient::new(config.api.base_url.clone());
    info!(base_url = %client.base_url(), "starting");

    match cli.command {
        Some(Command::Show) => run_show(&client).await,
        Some(Command::Board) | None => {
            let (app, rx) = App::new(client, &config.ui);
            ui::run(app, rx).await
        }
    }
}

/// Fetch everything once and print the three panels.
async fn run_show(client: &ApiClient) -> Result<()> {
    let (tasks, analytics) = tokio::try_join!(client.fetch_tasks(), client.fetch_analytics())?;
    print!("{}", format_report(&tasks, &analytics));
    Ok(())
}
