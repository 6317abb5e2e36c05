use serde::{Deserialize, Serialize};

/// A single atomic edit reported by a diff engine.
///
/// Starting at line `line0` of the previous revision and line `line1` of the
/// current revision, `deleted` lines of the previous revision are removed and
/// `inserted` lines of the current revision take their place. Pure
/// insertions have `deleted == 0`, pure deletions have `inserted == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Zero-based line where the delta starts in the previous revision.
    pub line0: usize,
    /// Zero-based line where the delta starts in the current revision.
    pub line1: usize,
    /// Number of previous-revision lines removed by this change.
    #[serde(default)]
    pub deleted: usize,
    /// Number of current-revision lines added by this change.
    #[serde(default)]
    pub inserted: usize,
}

impl Change {
    /// Convenience constructor for explicit values.
    #[must_use]
    pub const fn new(line0: usize, line1: usize, deleted: usize, inserted: usize) -> Self {
        Self {
            line0,
            line1,
            deleted,
            inserted,
        }
    }

    /// Line just past the delta in the previous revision.
    #[must_use]
    pub const fn previous_end(&self) -> usize {
        self.line0 + self.deleted
    }

    /// Line just past the delta in the current revision.
    #[must_use]
    pub const fn current_end(&self) -> usize {
        self.line1 + self.inserted
    }
}

/// An ordered edit script describing how one line sequence becomes another.
///
/// Changes are non-overlapping and sorted by ascending `line1`; an empty
/// script means the two revisions tokenize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    changes: Vec<Change>,
}

impl EditScript {
    /// An edit script with no changes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Whether the script contains no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes in the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Append a change to the end of the script.
    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Visit the changes in script order.
    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }
}

impl From<Vec<Change>> for EditScript {
    fn from(changes: Vec<Change>) -> Self {
        Self { changes }
    }
}

impl FromIterator<Change> for EditScript {
    fn from_iter<I: IntoIterator<Item = Change>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl IntoIterator for EditScript {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
