//! Entry point for the `facility` command line console.

use clap::Parser;
use tracing::debug;

use facility_cli::cli::Cli;
use facility_cli::commands::App;
use facility_cli::config::Configuration;
use facility_cli::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let configuration = Configuration::load(&cli)?;

    let _logging_guard = logging::init_logging(&configuration.logging_config())?;
    debug!(base_url = %configuration.base_url(), "Configuration loaded");

    let app = App::connect(configuration)?;
    app.run(cli.command).await
}
