#![forbid(unsafe_code)]

mod actions;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::Command;
use crate::error::CliResult;

#[derive(Debug, Parser)]
#[command(
    name = "monuments",
    version,
    about = "Low-poly monument models and the monument catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if env_bool("MONUMENTS_LOG_JSON", false) {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

async fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Generate {
            out,
            only,
            sequential,
        } => actions::generate(out, &only, sequential),
        Command::Inspect { file } => actions::inspect(&file),
        Command::Import {
            request,
            store,
            http,
        } => actions::import(&request, store.as_deref(), &http).await,
        Command::List { store } => actions::list(store.as_deref()).await,
        Command::Seed { store } => actions::seed(&store).await,
        Command::FetchOriginals {
            out,
            store,
            token,
            sketchfab_api,
            http,
        } => actions::fetch(&out, store.as_deref(), token, &sketchfab_api, &http).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}
