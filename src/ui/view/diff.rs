//! Keyed row diffing for the imperative list view.

use std::collections::HashSet;

use crate::data::Item;

/// One imperative edit on a list of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowChange {
    Remove { index: usize },
    Insert { index: usize, item: Item },
    Update { index: usize, item: Item },
}

/// Compute the edits turning `old` into `new`, keyed by item id.
///
/// Removals come first, from the highest index down, followed by moves,
/// inserts and in-place updates in ascending target order. Applying the
/// result to `old` with [`apply`] yields `new`.
pub fn diff(old: &[Item], new: &[Item]) -> Vec<RowChange> {
    let mut changes = Vec::new();
    let kept: HashSet<&str> = new.iter().map(|item| item.id.as_str()).collect();

    let mut working: Vec<Item> = old.to_vec();
    for index in (0..working.len()).rev() {
        if !kept.contains(working[index].id.as_str()) {
            working.remove(index);
            changes.push(RowChange::Remove { index });
        }
    }

    for (index, item) in new.iter().enumerate() {
        match working.get(index) {
            Some(current) if current.id == item.id => {
                if current != item {
                    working[index] = item.clone();
                    changes.push(RowChange::Update {
                        index,
                        item: item.clone(),
                    });
                }
            }
            _ => {
                if let Some(offset) = working[index.min(working.len())..]
                    .iter()
                    .position(|row| row.id == item.id)
                {
                    let from = index + offset;
                    working.remove(from);
                    changes.push(RowChange::Remove { index: from });
                }
                working.insert(index, item.clone());
                changes.push(RowChange::Insert {
                    index,
                    item: item.clone(),
                });
            }
        }
    }

    while working.len() > new.len() {
        let index = working.len() - 1;
        working.pop();
        changes.push(RowChange::Remove { index });
    }

    changes
}

/// Apply edits produced by [`diff`] in order.
pub fn apply(rows: &mut Vec<Item>, changes: &[RowChange]) {
    for change in changes {
        match change {
            RowChange::Remove { index } => {
                rows.remove(*index);
            }
            RowChange::Insert { index, item } => rows.insert(*index, item.clone()),
            RowChange::Update { index, item } => rows[*index] = item.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|id| Item::new(*id, format!("title {id}"))).collect()
    }

    fn check(old: &[Item], new: &[Item]) -> Vec<RowChange> {
        let changes = diff(old, new);
        let mut rows = old.to_vec();
        apply(&mut rows, &changes);
        assert_eq!(rows, new);
        changes
    }

    #[test]
    fn identical_lists_need_no_changes() {
        let list = items(&["a", "b"]);
        assert!(check(&list, &list).is_empty());
    }

    #[test]
    fn first_load_inserts_everything() {
        let changes = check(&[], &items(&["a", "b"]));
        assert_eq!(changes.len(), 2);
        assert!(changes
            .iter()
            .all(|c| matches!(c, RowChange::Insert { .. })));
    }

    #[test]
    fn missing_rows_are_removed_from_the_end_first() {
        let changes = check(&items(&["a", "b", "c"]), &items(&["b"]));
        assert_eq!(
            changes,
            vec![RowChange::Remove { index: 2 }, RowChange::Remove { index: 0 }]
        );
    }

    #[test]
    fn changed_title_is_an_update() {
        let old = items(&["a", "b"]);
        let mut new = old.clone();
        new[1].title = "renamed".to_string();
        assert_eq!(
            check(&old, &new),
            vec![RowChange::Update {
                index: 1,
                item: new[1].clone()
            }]
        );
    }

    #[test]
    fn reordering_moves_rows() {
        check(&items(&["a", "b", "c"]), &items(&["c", "a", "b"]));
        check(&items(&["a", "b", "c", "d"]), &items(&["d", "x", "b"]));
    }

    #[test]
    fn duplicate_ids_still_converge() {
        check(&items(&["a", "a", "b"]), &items(&["a"]));
        check(&items(&["a"]), &items(&["a", "a"]));
    }
}
