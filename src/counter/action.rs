use serde::{Deserialize, Serialize};

use crate::store::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    Add,
    Minus,
    /// Any `type` tag the counter does not handle. Also the bootstrap action.
    #[serde(other)]
    Unrecognized,
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            CounterAction::Add => "ADD",
            CounterAction::Minus => "MINUS",
            CounterAction::Unrecognized => "UNRECOGNIZED",
        }
    }

    fn init() -> Self {
        CounterAction::Unrecognized
    }
}
