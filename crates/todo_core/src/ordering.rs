//! Display ordering
//!
//! Lists and todos are shown incomplete-first. Each entry keeps its original
//! index because the mutation routes address entries by source position,
//! not by where they appear on screen.

use crate::todo::{TodoItem, TodoList};

/// An entry paired with its position in the unsorted sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexed<T> {
    pub index: usize,
    pub entry: T,
}

/// Single-pass stable partition: entries failing `is_done` first, then the
/// rest, both in source order.
fn partition_indexed<'a, T>(
    entries: &'a [T],
    is_done: impl Fn(&T) -> bool,
) -> Vec<Indexed<&'a T>> {
    let mut open = Vec::with_capacity(entries.len());
    let mut done = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let indexed = Indexed { index, entry };
        if is_done(entry) {
            done.push(indexed);
        } else {
            open.push(indexed);
        }
    }
    open.extend(done);
    open
}

/// Incomplete lists first, then complete ones (see `TodoList::is_complete`)
pub fn sort_lists(lists: &[TodoList]) -> Vec<Indexed<&TodoList>> {
    partition_indexed(lists, TodoList::is_complete)
}

/// Incomplete todos first, then complete ones
pub fn sort_todos(todos: &[TodoItem]) -> Vec<Indexed<&TodoItem>> {
    partition_indexed(todos, TodoItem::is_complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(name: &str, complete: bool) -> TodoItem {
        TodoItem {
            name: name.to_string(),
            complete,
        }
    }

    fn order<T>(sorted: &[Indexed<&T>], name: impl Fn(&T) -> &str) -> Vec<(String, usize)> {
        sorted
            .iter()
            .map(|i| (name(i.entry).to_string(), i.index))
            .collect()
    }

    #[test]
    fn test_sort_todos_partitions_with_original_indices() {
        let todos = vec![todo("A", false), todo("B", true), todo("C", false)];
        let sorted = sort_todos(&todos);

        assert_eq!(
            order(&sorted, |t: &TodoItem| t.name.as_str()),
            vec![("A".to_string(), 0), ("C".to_string(), 2), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn test_sort_todos_keeps_duplicates_apart() {
        // Equal todos must still map back to their own positions
        let todos = vec![todo("Milk", true), todo("Milk", false), todo("Milk", true)];
        let indices: Vec<usize> = sort_todos(&todos).iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![1, 0, 2]);
    }

    #[test]
    fn test_sort_lists_puts_complete_lists_last() {
        let mut done = TodoList::new("Done");
        done.add_todo("x");
        done.complete_all();
        let empty = TodoList::new("Empty");
        let mut open = TodoList::new("Open");
        open.add_todo("y");

        let lists = vec![done, empty, open];
        let sorted = sort_lists(&lists);

        assert_eq!(
            order(&sorted, |l: &TodoList| l.name.as_str()),
            vec![("Empty".to_string(), 1), ("Open".to_string(), 2), ("Done".to_string(), 0)]
        );
    }

    #[test]
    fn test_sort_empty_input() {
        assert!(sort_lists(&[]).is_empty());
        assert!(sort_todos(&[]).is_empty());
    }
}
