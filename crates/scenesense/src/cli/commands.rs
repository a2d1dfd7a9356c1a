//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Model used when `--model` is not given.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// SceneSense - screenplay scene analysis with chat models
#[derive(Parser, Debug)]
#[command(name = "scenesense")]
#[command(about = "Screenplay scene analysis with chat models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a scene and print the JSON result
    Analyze(AnalyzeArgs),

    /// Assess production risk for a scene
    Risk(RiskArgs),

    /// Check that the backend serving a model answers
    Ping {
        /// Model identifier
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
    },
}

/// Where the scene text comes from. Stdin when neither flag is given.
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct SceneSource {
    /// Scene text
    #[arg(long)]
    pub scene: Option<String>,

    /// File containing the scene text
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Scene input
    #[command(flatten)]
    pub source: SceneSource,

    /// Analysis mode: `writer`, or anything else for director
    #[arg(long, default_value = "director")]
    pub mode: String,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature (defaults to the configured value)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate (defaults to the configured value)
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

/// Arguments for `risk`
#[derive(Args, Debug)]
pub struct RiskArgs {
    /// Scene input
    #[command(flatten)]
    pub source: SceneSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use scenesense::Mode;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "scenesense",
            "-v",
            "analyze",
            "--scene",
            "INT. ROOM - DAY",
            "--mode",
            "writer",
            "--temperature",
            "0.7",
        ]);
        assert!(cli.verbose);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.source.scene.as_deref(), Some("INT. ROOM - DAY"));
        assert_eq!(Mode::from_str_lenient(&args.mode), Mode::Writer);
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.temperature, Some(0.7));
        assert_eq!(args.max_tokens, None);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_director() {
        let cli = Cli::parse_from([
            "scenesense",
            "analyze",
            "--scene",
            "x",
            "--mode",
            "cinematographer",
        ]);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(Mode::from_str_lenient(&args.mode), Mode::Director);
    }

    #[test]
    fn test_scene_and_file_conflict() {
        let parsed = Cli::try_parse_from([
            "scenesense",
            "risk",
            "--scene",
            "x",
            "--file",
            "scene.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_ping_default_model() {
        let cli = Cli::parse_from(["scenesense", "ping"]);
        let Commands::Ping { model } = cli.command else {
            panic!("expected ping");
        };
        assert_eq!(model, DEFAULT_MODEL);
    }
}
