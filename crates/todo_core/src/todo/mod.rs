//! Todo module - List and item types
//!
//! Provides TodoList and TodoItem plus the free-function contract the
//! server drives (mutators and completion aggregates).

mod item;
mod list;

pub use item::{set_todo_complete, TodoItem};
pub use list::{
    add_todo, complete_all, delete_todo, display_label, is_list_complete, remaining_count,
    rename_list, status_class, total_count, TodoList, COMPLETE_CLASS,
};
