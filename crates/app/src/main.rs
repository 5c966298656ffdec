//! Relay - Main Entry Point
//!
//! Loads the settings, wires the HTTP and WebSocket adapters into the
//! workbench and runs one subcommand.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use relay_cli::{Cli, CliError, Command, Headless};
use relay_domain::ClientSettings;
use relay_infrastructure::{
    ReqwestFragmentSource, SettingsRepository, SystemClock, WsChannelConnector, to_json_stable,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries command output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let repository = SettingsRepository::new();
    let mut settings = repository.load().await?;
    if let Some(server) = cli.server {
        settings.server_url = server;
    }
    tracing::info!(
        server = %settings.server_url,
        "Starting Relay v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Settings => {
            if let Some(path) = repository.path() {
                writeln!(stdout, "# {}", path.display())?;
            }
            write!(stdout, "{}", to_json_stable(&settings)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Collections => {
            let mut headless = headless(&settings)?;
            let html = headless.collections().await?;
            writeln!(stdout, "{html}")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { collection } => {
            let mut headless = headless(&settings)?;
            let report = headless.run_collection(&collection, &mut stdout).await?;
            headless.shutdown();
            writeln!(stdout, "{} passed, {} failed", report.passed, report.failed)?;
            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}

fn headless(
    settings: &ClientSettings,
) -> Result<Headless<ReqwestFragmentSource, WsChannelConnector>, CliError> {
    Ok(Headless::new(
        Arc::new(ReqwestFragmentSource::new(settings)?),
        Arc::new(WsChannelConnector::new(settings)?),
        Arc::new(SystemClock::new()),
    ))
}
