use clap::Parser;
use tracing::debug;

use po_classifier::adapter::inbound::cli::command::Cli;
use po_classifier::adapter::inbound::cli::output::{self, OutputConfig};
use po_classifier::adapter::inbound::cli::run::run;
use po_classifier::adapter::inbound::cli::{diagnostic, operator};
use po_classifier::infrastructure::config::settings::Config;
use po_classifier::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose), &cli.color);

    let config_path = cli.config_path();
    let loaded = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(&config_path),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:?}", diagnostic::report(e, &config_path));
            std::process::exit(1);
        }
    };

    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    config.init_logging();
    debug!(config = %config_path.display(), "po-classifier starting");

    let source = config_path.display().to_string();
    let source_found = config_path.exists();
    let _ = operator::install(Box::new(Operator::new(config, source, source_found)));

    match run(&cli).await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{:?}", diagnostic::report(e, &config_path));
            std::process::exit(1);
        }
    }
}
