//! share-offer should-offer - Check the cooldown for one user
//!
//! Read-only: the state file is loaded but never written, even when the
//! user is seen for the first time.

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{ShouldOfferOutput, emit_json};
use crate::error::Result;
use crate::offer::{DEFAULT_COOLDOWN_HOURS, decide, get_or_create_slot, load_state};

#[derive(Args, Debug)]
pub struct ShouldOfferArgs {
    /// Stable user/chat key
    #[arg(long)]
    pub user: String,

    /// Cooldown after the last shown offer
    #[arg(long, default_value_t = DEFAULT_COOLDOWN_HOURS, allow_negative_numbers = true)]
    pub cooldown_hours: i64,
}

pub fn run(ctx: &AppContext, args: &ShouldOfferArgs) -> Result<()> {
    emit_json(&evaluate(ctx, args))
}

/// Compute the `should-offer` result without printing it.
#[must_use]
pub fn evaluate(ctx: &AppContext, args: &ShouldOfferArgs) -> ShouldOfferOutput {
    let mut state = load_state(ctx.state_path());
    let slot = get_or_create_slot(&mut state, &args.user);
    let decision = decide(slot, args.cooldown_hours, ctx.now);

    tracing::info!(
        user = %args.user,
        cooldown_hours = args.cooldown_hours,
        should_offer = decision.should_offer,
        reason = decision.reason.as_str(),
        "offer decision"
    );

    ShouldOfferOutput {
        should_offer: decision.should_offer,
        reason: decision.reason,
        cooldown_hours: args.cooldown_hours,
        user: args.user.clone(),
        state_file: ctx.state_file_display(),
    }
}
