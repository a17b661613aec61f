//! View models returned to the browser
//!
//! These stand in for the rendered pages: each carries exactly what a page
//! would show, already ordered for display.

use serde::{Deserialize, Serialize};
use todo_core::{sort_lists, sort_todos, TodoList};

use crate::flash::Flash;

/// `list_name` form field used by create and rename
#[derive(Deserialize, Debug, Default)]
pub struct ListNameForm {
    #[serde(default)]
    pub list_name: String,
}

/// `todo` form field used when adding a todo
#[derive(Deserialize, Debug, Default)]
pub struct TodoForm {
    #[serde(default)]
    pub todo: String,
}

/// `complete` form field; only the literal "true" marks a todo complete
#[derive(Deserialize, Debug, Default)]
pub struct CompleteForm {
    #[serde(default)]
    pub complete: Option<String>,
}

impl CompleteForm {
    pub fn is_complete(&self) -> bool {
        self.complete.as_deref() == Some("true")
    }
}

#[derive(Serialize, Debug)]
pub struct ListSummary {
    pub index: usize,
    pub name: String,
    pub label: String,
    pub remaining: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
}

impl ListSummary {
    fn new(index: usize, list: &TodoList) -> Self {
        Self {
            index,
            name: list.name.clone(),
            label: list.display_label(),
            remaining: list.remaining_count(),
            total: list.total_count(),
            class: list.status_class(),
        }
    }
}

/// All lists, incomplete first
#[derive(Serialize, Debug)]
pub struct ListsView {
    pub lists: Vec<ListSummary>,
    pub flash: Option<Flash>,
}

impl ListsView {
    pub fn new(lists: &[TodoList], flash: Option<Flash>) -> Self {
        Self {
            lists: sort_lists(lists)
                .into_iter()
                .map(|i| ListSummary::new(i.index, i.entry))
                .collect(),
            flash,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct TodoView {
    pub index: usize,
    pub name: String,
    pub complete: bool,
}

/// One list with its todos, incomplete first
#[derive(Serialize, Debug)]
pub struct ListView {
    #[serde(flatten)]
    pub summary: ListSummary,
    pub todos: Vec<TodoView>,
    /// Input that failed validation, handed back so the form keeps it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_input: Option<String>,
    pub flash: Option<Flash>,
}

impl ListView {
    pub fn new(index: usize, list: &TodoList, flash: Option<Flash>) -> Self {
        Self {
            summary: ListSummary::new(index, list),
            todos: sort_todos(&list.todos)
                .into_iter()
                .map(|i| TodoView {
                    index: i.index,
                    name: i.entry.name.clone(),
                    complete: i.entry.complete,
                })
                .collect(),
            rejected_input: None,
            flash,
        }
    }

    pub fn with_rejected_input(mut self, input: impl Into<String>) -> Self {
        self.rejected_input = Some(input.into());
        self
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    NewList,
    EditList,
}

/// A form page: new list, or rename of an existing one
#[derive(Serialize, Debug)]
pub struct FormView {
    pub form: FormKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_index: Option<usize>,
    /// Current value of the name field
    pub list_name: String,
    pub flash: Option<Flash>,
}

impl FormView {
    pub fn new_list(list_name: impl Into<String>, flash: Option<Flash>) -> Self {
        Self {
            form: FormKind::NewList,
            list_index: None,
            list_name: list_name.into(),
            flash,
        }
    }

    pub fn edit_list(index: usize, list: &TodoList, flash: Option<Flash>) -> Self {
        Self {
            form: FormKind::EditList,
            list_index: Some(index),
            list_name: list.name.clone(),
            flash,
        }
    }
}

/// Body for outcomes that have no page of their own (e.g. a missed delete)
#[derive(Serialize, Debug)]
pub struct FlashView {
    pub flash: Flash,
}
