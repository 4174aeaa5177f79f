mod action;
mod reducer;
mod state;

pub use action::TodoAction;
pub use reducer::TodoReducer;
pub use state::{ParseTodoIdError, Todo, TodoId, TodoList};
