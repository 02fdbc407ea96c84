//! Command-line interface definitions.
//!
//! Defines the CLI structure for the po-classifier application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Configuration file read when `--config` is not given. Its absence is not
/// an error.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Classify purchase order descriptions into L1/L2/L3 categories
#[derive(Parser, Debug)]
#[command(name = "po-classifier")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file (a missing file is an error when given)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Path of the configuration file in effect.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the po-classifier CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single PO description
    Classify(ClassifyArgs),

    /// Classify descriptions in an interactive prompt loop
    Interactive,

    /// List built-in example descriptions
    Examples,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `po-classifier config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file and provider credentials.
    Validate,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// PO description to classify
    #[arg(
        short,
        long,
        required_unless_present = "example",
        conflicts_with = "example"
    )]
    pub description: Option<String>,

    /// Supplier name (optional)
    #[arg(short, long)]
    pub supplier: Option<String>,

    /// Use a built-in example description (1-based, see `examples`)
    #[arg(short, long)]
    pub example: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "po-classifier");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_color_choice_default_is_auto() {
        assert!(matches!(ColorChoice::default(), ColorChoice::Auto));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "po-classifier",
            "--json",
            "-q",
            "-vv",
            "--color",
            "never",
            "examples",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(matches!(cli.command, Commands::Examples));
        assert!(cli.config.is_none());
        assert_eq!(cli.config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_parse_classify_with_supplier() {
        let cli = Cli::try_parse_from([
            "po-classifier",
            "classify",
            "-d",
            "Office chairs",
            "--supplier",
            "Acme Industrial Co.",
            "-c",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
        assert_eq!(cli.config_path(), PathBuf::from("custom.toml"));
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.description.as_deref(), Some("Office chairs"));
        assert_eq!(args.supplier.as_deref(), Some("Acme Industrial Co."));
        assert!(args.example.is_none());
    }

    #[test]
    fn test_parse_classify_example() {
        let cli = Cli::try_parse_from(["po-classifier", "classify", "--example", "2"]).unwrap();
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.example, Some(2));
        assert!(args.description.is_none());
    }

    #[test]
    fn test_classify_requires_description_or_example() {
        assert!(Cli::try_parse_from(["po-classifier", "classify"]).is_err());
        assert!(Cli::try_parse_from([
            "po-classifier",
            "classify",
            "-d",
            "x",
            "--example",
            "1"
        ])
        .is_err());
    }

    #[test]
    fn test_blank_description_parses() {
        let cli = Cli::try_parse_from(["po-classifier", "classify", "-d", "   "]).unwrap();
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.description.as_deref(), Some("   "));
    }

    #[test]
    fn test_parse_config_subcommands() {
        let cli = Cli::try_parse_from(["po-classifier", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
        let cli = Cli::try_parse_from(["po-classifier", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Validate)
        ));
    }
}
