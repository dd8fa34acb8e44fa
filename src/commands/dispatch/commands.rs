//! Command implementations for all interviewer commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{export, init, plan, run, summary, tracks, verdict};
use interviewer_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => init::execute(ctx),
            Commands::Tracks => tracks::execute(ctx),
            Commands::Plan(args) => plan::execute(ctx, args),
            Commands::Run(args) => run::execute(ctx, args),
            Commands::Summary(args) => summary::execute(ctx, args),
            Commands::Export(args) => export::execute(ctx, args),
            Commands::Verdict(args) => verdict::execute(ctx, args),
        }
    }
}
