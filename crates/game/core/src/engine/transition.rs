//! Two-phase action pipeline.

use crate::action::{ActionError, ActionTransition};
use crate::env::{Dice, Env};
use crate::events::TurnReport;
use crate::state::GameState;

/// Runs `pre_validate` against the untouched state, then `apply`.
///
/// A rejected action leaves both the state and the report as they were.
pub(super) fn drive_transition<'e, T>(
    transition: &T,
    state: &mut GameState,
    env: Env<'e>,
    dice: &mut Dice<'e>,
    report: &mut TurnReport,
) -> Result<(), ActionError>
where
    T: ActionTransition + ?Sized,
{
    transition.pre_validate(state, &env)?;
    transition.apply(state, env, dice, report)
}
