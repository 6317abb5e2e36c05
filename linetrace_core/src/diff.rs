//! Bundled line diff engine producing edit scripts.

use linetrace_api::{Change, EditScript};
use similar::{capture_diff_slices, Algorithm, DiffOp};

/// Line-level diff engine backed by a Myers diff.
///
/// The engine gives [`Block::previous`](crate::Block::previous) a default
/// collaborator; any differ producing the [`EditScript`] shape can stand in
/// for it, with [`project`](crate::project) invoked directly.
#[derive(Debug, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Construct a new diff engine instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the edit script transforming `previous` into `current`.
    ///
    /// Changes come out sorted by ascending `line1` and non-overlapping;
    /// identical inputs produce an empty script.
    #[must_use]
    pub fn diff(&self, previous: &[String], current: &[String]) -> EditScript {
        capture_diff_slices(Algorithm::Myers, previous, current)
            .into_iter()
            .filter_map(|op| match op {
                DiffOp::Equal { .. } => None,
                DiffOp::Delete {
                    old_index,
                    old_len,
                    new_index,
                } => Some(Change::new(old_index, new_index, old_len, 0)),
                DiffOp::Insert {
                    old_index,
                    new_index,
                    new_len,
                } => Some(Change::new(old_index, new_index, 0, new_len)),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => Some(Change::new(old_index, new_index, old_len, new_len)),
            })
            .collect()
    }
}
