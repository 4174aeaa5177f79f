mod action;
mod reducer;
mod state;

pub use action::CounterAction;
pub use reducer::CounterReducer;
pub use state::Count;
