//! Command dispatch.

use super::command::{Cli, Commands, ConfigCommand};
use super::outcome::CommandOutcome;
use super::{classify, config, examples, interactive};
use crate::error::Result;

/// Dispatch a parsed command.
pub async fn run(cli: &Cli) -> Result<CommandOutcome> {
    match &cli.command {
        Commands::Classify(args) => classify::execute(args).await,
        Commands::Interactive => interactive::execute().await,
        Commands::Examples => {
            examples::list()?;
            Ok(CommandOutcome::Success)
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(),
    }
}
