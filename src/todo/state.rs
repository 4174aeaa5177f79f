//! Todo list state.
//!
//! A [`TodoList`] is the ordered sequence of todos plus the counter that
//! hands out the next id. Ids are never reused within one list.

use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::State;

/// Identifier of a todo, unique within its list.
///
/// Decodes from a JSON number or a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdRepr", into = "u64")]
pub struct TodoId(u64);

impl TodoId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    fn following(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TodoId> for u64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid todo id '{input}': {source}")]
pub struct ParseTodoIdError {
    input: String,
    #[source]
    source: ParseIntError,
}

impl FromStr for TodoId {
    type Err = ParseTodoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(TodoId)
            .map_err(|source| ParseTodoIdError {
                input: s.to_string(),
                source,
            })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(u64),
    Text(String),
}

impl TryFrom<IdRepr> for TodoId {
    type Error = ParseTodoIdError;

    fn try_from(repr: IdRepr) -> Result<Self, Self::Error> {
        match repr {
            IdRepr::Number(value) => Ok(TodoId(value)),
            IdRepr::Text(text) => text.parse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
}

/// Ordered todos, newest first.
///
/// Encodes as `{"todos": [...], "next_id": n}` so the id counter survives a
/// round trip. A plain array of todos is also accepted when decoding; the
/// counter then starts past the largest id present. Decoding (or converting
/// from a `Vec<Todo>`) drops any todo whose id repeats an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TodoListRepr", into = "TodoListDoc")]
pub struct TodoList {
    items: Vec<Todo>,
    /// `TodoId(u64::MAX)` once every id has been handed out.
    next_id: TodoId,
}

const EXHAUSTED: TodoId = TodoId(u64::MAX);

impl State for TodoList {}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: TodoId(1),
        }
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Id the next added todo will receive, or `None` if the list has run
    /// out of ids.
    pub fn next_id(&self) -> Option<TodoId> {
        (self.next_id != EXHAUSTED).then_some(self.next_id)
    }

    /// Prepend a todo. With no id left the list comes back unchanged.
    pub(crate) fn with_added(&self, text: String) -> Self {
        let Some(id) = self.next_id() else {
            tracing::warn!(len = self.items.len(), "No todo ids left, ignoring add");
            return self.clone();
        };

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(Todo { id, text });
        items.extend(self.items.iter().cloned());
        Self {
            items,
            next_id: id.following(),
        }
    }

    pub(crate) fn without(&self, id: TodoId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|todo| todo.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        let mut seen = HashSet::with_capacity(todos.len());
        let mut items = Vec::with_capacity(todos.len());
        for todo in todos {
            if seen.insert(todo.id) {
                items.push(todo);
            } else {
                tracing::warn!(id = %todo.id, "Dropping todo with duplicate id");
            }
        }

        // Saturates to EXHAUSTED when u64::MAX is already live.
        let next_id = items
            .iter()
            .map(|todo| todo.id.following())
            .max()
            .unwrap_or(TodoId(1));

        Self { items, next_id }
    }
}

#[derive(Serialize, Deserialize)]
struct TodoListDoc {
    todos: Vec<Todo>,
    next_id: TodoId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TodoListRepr {
    Doc(TodoListDoc),
    Bare(Vec<Todo>),
}

impl From<TodoListRepr> for TodoList {
    fn from(repr: TodoListRepr) -> Self {
        match repr {
            TodoListRepr::Bare(todos) => TodoList::from(todos),
            TodoListRepr::Doc(doc) => {
                let mut list = TodoList::from(doc.todos);
                // A stored counter below a live id would hand that id out again.
                list.next_id = list.next_id.max(doc.next_id);
                list
            }
        }
    }
}

impl From<TodoList> for TodoListDoc {
    fn from(list: TodoList) -> Self {
        TodoListDoc {
            todos: list.items,
            next_id: list.next_id,
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
