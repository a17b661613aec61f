//! Flash messages shown once after an action

use serde::{Deserialize, Serialize};
use todo_core::ValidationError;

pub const LIST_CREATED: &str = "The list has been created";
pub const LIST_RENAMED: &str = "The list name has been updated";
pub const LIST_DELETED: &str = "The list has been deleted";
pub const LIST_DELETE_FAILED: &str = "Could not delete list";
pub const TODO_ADDED: &str = "The todo was added";
pub const TODO_DELETED: &str = "The todo has been deleted";
pub const TODO_DELETE_FAILED: &str = "Could not delete todo";
pub const TODOS_COMPLETED: &str = "The todos have been completed";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Message for a single todo's new completion state
    pub fn todo_toggled(complete: bool) -> Self {
        let state = if complete { "complete" } else { "incomplete" };
        Self::success(format!("The todo is {}", state))
    }
}

impl From<ValidationError> for Flash {
    fn from(error: ValidationError) -> Self {
        Self::error(error.to_string())
    }
}
