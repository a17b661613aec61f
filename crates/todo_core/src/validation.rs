//! Name rules for lists and todos
//!
//! Length is counted in characters, not bytes, so "Café" is four long.

use crate::error::{NameKind, ValidationError};
use crate::todo::TodoList;

pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 50;

fn has_valid_length(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.chars().count())
}

/// Check a name for a new list against the session's existing lists.
///
/// Uniqueness is checked before length, so a duplicate that is also too
/// long reports `DuplicateName`.
pub fn validate_list_name(lists: &[TodoList], name: &str) -> Result<(), ValidationError> {
    if lists.iter().any(|list| list.name == name) {
        return Err(ValidationError::DuplicateName);
    }
    if !has_valid_length(name) {
        return Err(ValidationError::InvalidLength(NameKind::List));
    }
    Ok(())
}

/// Check a new name for the list at `index`.
///
/// Same rules as `validate_list_name` except the list being renamed is left
/// out of the uniqueness check, so keeping the current name is accepted.
pub fn validate_list_rename(
    lists: &[TodoList],
    index: usize,
    name: &str,
) -> Result<(), ValidationError> {
    let collides = lists
        .iter()
        .enumerate()
        .any(|(i, list)| i != index && list.name == name);
    if collides {
        return Err(ValidationError::DuplicateName);
    }
    if !has_valid_length(name) {
        return Err(ValidationError::InvalidLength(NameKind::List));
    }
    Ok(())
}

/// Check a todo name. Todos may repeat, so only length matters.
pub fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    if has_valid_length(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength(NameKind::Todo))
    }
}
