//! Positional operations over a session's list sequence
//!
//! Indices are only meaningful for the request that produced them: deleting
//! a list shifts every later list down by one.

use crate::todo::TodoList;

/// Append a new empty list. Callers validate the name first.
pub fn create_list(lists: &mut Vec<TodoList>, name: impl Into<String>) {
    let list = TodoList::new(name);
    log::debug!("Creating list '{}' at index {}", list.name, lists.len());
    lists.push(list);
}

/// Remove the list at `index`. Returns false and leaves `lists` untouched
/// when `index` is out of range.
pub fn delete_list(lists: &mut Vec<TodoList>, index: usize) -> bool {
    if index >= lists.len() {
        log::debug!(
            "No list at index {} (session holds {})",
            index,
            lists.len()
        );
        return false;
    }
    let removed = lists.remove(index);
    log::debug!("Deleted list '{}' from index {}", removed.name, index);
    true
}

pub fn get_list(lists: &[TodoList], index: usize) -> Option<&TodoList> {
    lists.get(index)
}

pub fn get_list_mut(lists: &mut [TodoList], index: usize) -> Option<&mut TodoList> {
    lists.get_mut(index)
}
