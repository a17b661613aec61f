//! todo_core - Core types and rules for session-scoped todo lists
//!
//! This crate holds everything the server needs to decide what a valid list is:
//! - `todo` - TodoList, TodoItem and the per-list aggregates
//! - `store` - positional create/delete over a session's list sequence
//! - `validation` - name rules for lists and todos
//! - `ordering` - display ordering (incomplete first) with original indices
//!
//! Nothing here does I/O or keeps state of its own. Callers hand in the
//! session's `Vec<TodoList>`, validate, then mutate.

pub mod error;
pub mod ordering;
pub mod store;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use error::{NameKind, ValidationError};
pub use ordering::{sort_lists, sort_todos, Indexed};
pub use store::{create_list, delete_list, get_list, get_list_mut};
pub use todo::{
    add_todo, complete_all, delete_todo, display_label, is_list_complete, remaining_count,
    rename_list, set_todo_complete, status_class, total_count, TodoItem, TodoList,
    COMPLETE_CLASS,
};
pub use validation::{
    validate_list_name, validate_list_rename, validate_todo_name, MAX_NAME_LEN, MIN_NAME_LEN,
};
