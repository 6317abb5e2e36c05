//! Back-projection of block bounds through an edit script.

use std::sync::Arc;

use linetrace_api::EditScript;

use crate::block::Block;
use crate::diff::DiffEngine;
use crate::lines;

/// Map `block`'s range from the current revision back into `previous`.
///
/// `script` must describe how `previous` becomes the block's source, in the
/// shape produced by [`DiffEngine::diff`]. Every change carries the
/// cumulative signed offset between the two revisions at its start and end
/// (`line1 - line0` and the same over the delta's far edge), so each bound is
/// rewritten from the original bounds using the offsets of the last change
/// that reaches it. A change wholly before the block fires both start rules;
/// the later, end-anchored write wins. A change beginning inside the block
/// moves only the end, and a change starting at or past the end leaves the
/// end untouched. The final clamp restores `0 <= start <= end <= |previous|`
/// whatever the script contained.
#[must_use]
pub fn project(block: &Block, previous: Arc<[String]>, script: &EditScript) -> Block {
    let start = to_signed(block.start());
    let end = to_signed(block.end());

    let mut projected_start = start;
    let mut projected_end = end;

    for change in script {
        let delta_start = to_signed(change.line1) - to_signed(change.line0);
        let delta_end = to_signed(change.current_end()) - to_signed(change.previous_end());

        if to_signed(change.line1) <= start {
            projected_start = start - delta_start;
        }

        if to_signed(change.current_end()) <= start {
            projected_start = start - delta_end;
        }

        // Strict: a change beginning exactly at the end does not shift it.
        if to_signed(change.line1) < end {
            projected_end = end - delta_end;
        }
    }

    let limit = to_signed(previous.len());
    if projected_end > limit {
        projected_end = limit;
    }
    if projected_start < 0 {
        projected_start = 0;
    }
    if projected_end < projected_start {
        projected_end = projected_start;
    }

    Block::from_lines(previous, to_index(projected_start), to_index(projected_end))
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

impl Block {
    /// Locate this block in an older revision given the revision's full text.
    ///
    /// Tokenizes `previous_text`, diffs it against this block's source with
    /// the bundled engine, and back-projects the bounds. Total: pathological
    /// bounds come back clamped rather than failing.
    #[must_use]
    pub fn previous(&self, previous_text: &str) -> Self {
        self.previous_from_lines(Arc::from(lines::tokenize(previous_text)))
    }

    /// Locate this block in an older revision already split into lines.
    ///
    /// Skips re-tokenization for callers walking many revisions.
    #[must_use]
    pub fn previous_from_lines(&self, previous_lines: Arc<[String]>) -> Self {
        let script = DiffEngine::new().diff(&previous_lines, self.source());
        project(self, previous_lines, &script)
    }
}
