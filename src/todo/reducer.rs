//! Reducer for the todo list.

use crate::store::Reducer;

use super::action::TodoAction;
use super::state::TodoList;

/// Pure reducer; all ids come from the list's own counter.
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoList;
    type Action = TodoAction;

    fn reduce(&self, state: &TodoList, action: TodoAction) -> TodoList {
        match action {
            TodoAction::AddTodo { text } => state.with_added(text),
            TodoAction::DeleteTodo { id } => state.without(id),
            TodoAction::Unrecognized => state.clone(),
        }
    }
}
