//! TodoList - Named container for TodoItems
//!
//! A list is addressed by its position in the session's list sequence and
//! owns its todos outright. Mutators here never validate; callers run the
//! checks in `crate::validation` first.

use serde::{Deserialize, Serialize};

use super::item::TodoItem;

/// Marker returned by `status_class` for a fully completed list
pub const COMPLETE_CLASS: &str = "complete";

/// A named, ordered collection of todos
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoList {
    /// Unique (case-sensitive) within the session
    pub name: String,

    /// Todos in insertion order
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list. Does not validate `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Replace the list's name in place
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append an incomplete todo
    pub fn add_todo(&mut self, name: impl Into<String>) {
        self.todos.push(TodoItem::new(name));
    }

    /// Get todo by position
    pub fn todo(&self, index: usize) -> Option<&TodoItem> {
        self.todos.get(index)
    }

    /// Get mutable todo by position
    pub fn todo_mut(&mut self, index: usize) -> Option<&mut TodoItem> {
        self.todos.get_mut(index)
    }

    /// Remove the todo at `index`. Returns false if nothing was there.
    pub fn delete_todo(&mut self, index: usize) -> bool {
        if index < self.todos.len() {
            self.todos.remove(index);
            true
        } else {
            false
        }
    }

    /// Mark every todo complete, including ones already complete
    pub fn complete_all(&mut self) {
        for todo in &mut self.todos {
            todo.complete = true;
        }
    }

    /// True iff the list has at least one todo and all of them are complete.
    ///
    /// An empty list is not complete.
    pub fn is_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.complete)
    }

    /// Count of todos not yet complete
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.complete).count()
    }

    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    /// "{remaining} / {total}"
    pub fn display_label(&self) -> String {
        format!("{} / {}", self.remaining_count(), self.total_count())
    }

    /// `Some(COMPLETE_CLASS)` when the list is complete, otherwise `None`
    pub fn status_class(&self) -> Option<&'static str> {
        self.is_complete().then_some(COMPLETE_CLASS)
    }
}

pub fn rename_list(list: &mut TodoList, name: impl Into<String>) {
    list.rename(name);
}

pub fn add_todo(list: &mut TodoList, name: impl Into<String>) {
    list.add_todo(name);
}

pub fn delete_todo(list: &mut TodoList, index: usize) -> bool {
    list.delete_todo(index)
}

pub fn complete_all(list: &mut TodoList) {
    list.complete_all();
}

pub fn is_list_complete(list: &TodoList) -> bool {
    list.is_complete()
}

pub fn remaining_count(list: &TodoList) -> usize {
    list.remaining_count()
}

pub fn total_count(list: &TodoList) -> usize {
    list.total_count()
}

pub fn display_label(list: &TodoList) -> String {
    list.display_label()
}

pub fn status_class(list: &TodoList) -> Option<&'static str> {
    list.status_class()
}
