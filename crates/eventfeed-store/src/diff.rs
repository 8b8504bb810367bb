//! Minimal edit script between two keyed ordered lists.
//!
//! Used by the presentation layer to update a displayed list incrementally
//! instead of rebinding every row. Identity is by key (the event id);
//! content equality is full structural equality. The script is correct and
//! stable, not guaranteed minimal: applying the ops to `old`, strictly in
//! order, reproduces `new` exactly, and unmoved items keep their relative
//! order.

use std::collections::HashSet;

use eventfeed_core::EventSummary;

/// Identity key for diffing. Items with equal keys are the same logical
/// row; their content may still differ.
pub trait Keyed {
    /// The item's identity key.
    fn key(&self) -> u64;
}

impl Keyed for EventSummary {
    fn key(&self) -> u64 {
        self.id
    }
}

/// One step of a list edit script. Indices refer to the list as it stands
/// after all preceding ops have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffOp<T> {
    /// Insert `item` at `index`.
    Insert {
        /// Position of the new row.
        index: usize,
        /// The row to insert.
        item: T,
    },
    /// Remove the row at `index`.
    Remove {
        /// Position of the removed row.
        index: usize,
    },
    /// Move the row at `from` to `to`.
    Move {
        /// Current position.
        from: usize,
        /// Target position.
        to: usize,
    },
    /// Replace the content of the row at `index`.
    Update {
        /// Position of the changed row.
        index: usize,
        /// The new content.
        item: T,
    },
}

/// Compute an edit script turning `old` into `new`.
///
/// Keys must be unique within each input. Neither input is mutated.
/// Expected O(n+m) when few rows move; a move costs a linear scan.
pub fn diff<T>(old: &[T], new: &[T]) -> Vec<DiffOp<T>>
where
    T: Keyed + PartialEq + Clone,
{
    let new_keys: HashSet<u64> = new.iter().map(Keyed::key).collect();
    let mut work: Vec<T> = old.to_vec();
    let mut ops = Vec::new();

    // Drop rows with no counterpart in the new list, back to front so the
    // recorded indices stay valid as the list shrinks.
    for i in (0..work.len()).rev() {
        if !new_keys.contains(&work[i].key()) {
            ops.push(DiffOp::Remove { index: i });
            let _ = work.remove(i);
        }
    }

    // Walk target positions; every surviving key is somewhere at or after
    // the cursor, so each position needs at most one move or insert.
    for (i, target) in new.iter().enumerate() {
        if i < work.len() && work[i].key() == target.key() {
            if work[i] != *target {
                ops.push(DiffOp::Update {
                    index: i,
                    item: target.clone(),
                });
                work[i] = target.clone();
            }
            continue;
        }

        let found = work[i..].iter().position(|row| row.key() == target.key());
        match found {
            Some(offset) => {
                let from = i + offset;
                ops.push(DiffOp::Move { from, to: i });
                let row = work.remove(from);
                work.insert(i, row);
                if work[i] != *target {
                    ops.push(DiffOp::Update {
                        index: i,
                        item: target.clone(),
                    });
                    work[i] = target.clone();
                }
            }
            None => {
                ops.push(DiffOp::Insert {
                    index: i,
                    item: target.clone(),
                });
                work.insert(i, target.clone());
            }
        }
    }

    ops
}

/// Apply an edit script produced by [`diff`], strictly in order.
pub fn apply<T>(old: &[T], ops: &[DiffOp<T>]) -> Vec<T>
where
    T: Clone,
{
    let mut list = old.to_vec();
    for op in ops {
        match op {
            DiffOp::Insert { index, item } => list.insert(*index, item.clone()),
            DiffOp::Remove { index } => {
                let _ = list.remove(*index);
            }
            DiffOp::Move { from, to } => {
                let row = list.remove(*from);
                list.insert(*to, row);
            }
            DiffOp::Update { index, item } => list[*index] = item.clone(),
        }
    }
    list
}
