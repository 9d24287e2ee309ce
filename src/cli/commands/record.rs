//! share-offer record - Record a funnel event for one user

use clap::{Args, ValueEnum};

use crate::app::AppContext;
use crate::cli::output::{RecordOutput, emit_json};
use crate::error::Result;
use crate::offer::{OfferEvent, get_or_create_slot, load_state, record, save_state};

/// Funnel event accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventArg {
    /// The offer was displayed
    Shown,
    /// The user took the offer
    Accepted,
    /// The user turned the offer down
    Declined,
}

impl From<EventArg> for OfferEvent {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::Shown => Self::Shown,
            EventArg::Accepted => Self::Accepted,
            EventArg::Declined => Self::Declined,
        }
    }
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Stable user/chat key
    #[arg(long)]
    pub user: String,

    /// Event to record
    #[arg(long, value_enum)]
    pub event: EventArg,
}

pub fn run(ctx: &AppContext, args: &RecordArgs) -> Result<()> {
    emit_json(&apply(ctx, args)?)
}

/// Record the event and persist the state file, returning the result line.
pub fn apply(ctx: &AppContext, args: &RecordArgs) -> Result<RecordOutput> {
    let event = OfferEvent::from(args.event);
    let mut state = load_state(ctx.state_path());
    let slot = get_or_create_slot(&mut state, &args.user);
    record(slot, event, ctx.now);
    let stats = slot.stats;

    save_state(ctx.state_path(), &state)?;

    tracing::info!(
        user = %args.user,
        event = %event,
        shown = stats.shown,
        accepted = stats.accepted,
        declined = stats.declined,
        "recorded offer event"
    );

    Ok(RecordOutput {
        ok: true,
        event,
        user: args.user.clone(),
        stats,
        state_file: ctx.state_file_display(),
    })
}
