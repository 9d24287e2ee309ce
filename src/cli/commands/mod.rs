//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod record;
pub mod should_offer;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::ShouldOffer(args) => should_offer::run(ctx, args),
        Commands::Record(args) => record::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide if offer should be shown
    ShouldOffer(should_offer::ShouldOfferArgs),

    /// Record funnel event
    Record(record::RecordArgs),
}
