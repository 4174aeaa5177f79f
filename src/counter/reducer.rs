//! Reducer for the counter.

use crate::store::Reducer;

use super::action::CounterAction;
use super::state::Count;

/// Increments on `ADD`, decrements on `MINUS`, saturating at the `i64` bounds.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = Count;
    type Action = CounterAction;

    fn reduce(&self, state: &Count, action: CounterAction) -> Count {
        match action {
            CounterAction::Add => state.saturating_add(1),
            CounterAction::Minus => state.saturating_sub(1),
            CounterAction::Unrecognized => *state,
        }
    }
}
