use serde::{Deserialize, Serialize};

use crate::store::Action;

use super::state::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Prepend a new todo. The id is assigned by the list.
    AddTodo { text: String },
    /// Remove the todo with this id, if present.
    DeleteTodo { id: TodoId },
    /// Any `type` tag the todo list does not handle. Also the bootstrap action.
    #[serde(other)]
    Unrecognized,
}

impl TodoAction {
    pub fn add_todo(text: impl Into<String>) -> Self {
        TodoAction::AddTodo { text: text.into() }
    }

    pub fn delete_todo(id: TodoId) -> Self {
        TodoAction::DeleteTodo { id }
    }
}

impl Action for TodoAction {
    fn kind(&self) -> &'static str {
        match self {
            TodoAction::AddTodo { .. } => "ADD_TODO",
            TodoAction::DeleteTodo { .. } => "DELETE_TODO",
            TodoAction::Unrecognized => "UNRECOGNIZED",
        }
    }

    fn init() -> Self {
        TodoAction::Unrecognized
    }
}
