//! Walking a block backward across many revisions.

use tracing::debug;

use crate::block::Block;
use crate::{Error, Result, SourceError};

/// Supplies the full text of successively older revisions of one file.
pub trait RevisionSource {
    /// Produce the next older revision's text, or `None` when history is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Implementors surface any failure to load revision content (I/O, VCS
    /// transport).
    fn next_older(&mut self) -> std::result::Result<Option<String>, SourceError>;
}

/// Any in-memory sequence of revision texts is a source that cannot fail.
impl<I> RevisionSource for I
where
    I: Iterator<Item = String>,
{
    fn next_older(&mut self) -> std::result::Result<Option<String>, SourceError> {
        Ok(self.next())
    }
}

/// Project `block` through every revision `source` yields, newest first.
///
/// Returns one block per yielded revision, newest first; the input block is
/// not included. Each step diffs the newer line sequence against the older
/// one and back-projects the bounds, so a block can be followed to the
/// oldest revision the source reaches.
///
/// # Errors
///
/// Returns [`Error::RevisionLoad`] when the source fails, naming how many
/// revisions were projected before the failure.
pub fn trace<S: RevisionSource>(block: &Block, mut source: S) -> Result<Vec<Block>> {
    let mut trail: Vec<Block> = Vec::new();
    let mut current = block.clone();

    loop {
        let text = source.next_older().map_err(|source| Error::RevisionLoad {
            index: trail.len(),
            source,
        })?;
        let Some(text) = text else {
            return Ok(trail);
        };

        let previous = current.previous(&text);
        debug!(
            revision = trail.len(),
            start = previous.start(),
            end = previous.end(),
            "projected block into older revision"
        );
        trail.push(previous.clone());
        current = previous;
    }
}
