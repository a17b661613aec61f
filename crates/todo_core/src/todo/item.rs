//! TodoItem - A named unit of work inside a list

use serde::{Deserialize, Serialize};

/// A single todo. Names may repeat within a list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Text shown to the user (1-50 characters once validated)
    pub name: String,

    /// Whether the todo has been checked off
    #[serde(default)]
    pub complete: bool,
}

impl TodoItem {
    /// Create an incomplete todo. Does not validate `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            complete: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Set the completion flag directly
    pub fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }
}

/// Set the completion flag on a todo. Any bool is valid.
pub fn set_todo_complete(todo: &mut TodoItem, complete: bool) {
    todo.set_complete(complete);
}
