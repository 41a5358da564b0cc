//! Command dispatch logic for spoor
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use spoor_core::error::{Result, SpoorError};

pub fn run(cli: &Cli, started: Instant) -> Result<()> {
    match &cli.command {
        None => Err(SpoorError::UsageError(
            "no command given (try `spoor --help`)".to_string(),
        )),

        Some(Commands::Find {
            start,
            target,
            strategy,
        }) => commands::find::execute(cli, start, target, *strategy, started),

        Some(Commands::Compare { start, target }) => {
            commands::compare::execute(cli, start, target, started)
        }

        Some(Commands::Info) => commands::info::execute(cli, started),
    }
}
