//! SceneSense CLI binary.
//!
//! This binary provides command-line access to SceneSense:
//! - Analyze a screenplay scene in director or writer mode
//! - Assess production risk for a scene
//! - Check that a model backend answers

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_analyze, run_ping, run_risk};

    // Parse command-line arguments
    let cli = Cli::parse();

    scenesense::init_console_telemetry(cli.verbose)?;

    let config = scenesense::SceneSenseConfig::load()?;
    let credentials = scenesense::Credentials::from_env();

    // Execute the requested command
    match cli.command {
        Commands::Analyze(args) => run_analyze(&config, &credentials, args).await?,
        Commands::Risk(args) => run_risk(&config, &credentials, args).await?,
        Commands::Ping { model } => run_ping(&config, &credentials, &model).await?,
    }

    Ok(())
}
