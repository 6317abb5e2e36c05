//! Core library for tracing a contiguous block of lines backward through the
//! revision history of a file.
//!
//! The crate is layered around three primary responsibilities:
//! - splitting revision snapshots into line sequences
//! - back-projecting a block's bounds through an edit script
//! - walking successive revisions to build the block's trail
//!
//! The edit-script shape lives in `linetrace_api` so external diff engines
//! can feed the projector directly; a Myers-based engine is bundled for the
//! common case.

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    missing_docs
)]
#![cfg_attr(
    not(test),
    deny(
        clippy::dbg_macro,
        clippy::expect_used,
        clippy::panic,
        clippy::print_stderr,
        clippy::print_stdout,
        clippy::todo,
        clippy::unwrap_used
    )
)]

/// Immutable line-range values over a revision snapshot.
pub mod block;
/// Bundled line diff engine producing edit scripts.
pub mod diff;
/// Walking a block backward across many revisions.
pub mod history;
/// Line splitting for revision snapshots.
pub mod lines;
/// Back-projection of block bounds through an edit script.
pub mod project;

pub use block::Block;
pub use diff::DiffEngine;
pub use history::{trace, RevisionSource};
pub use linetrace_api::{Change, EditScript};
pub use project::project;

/// Common result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error reported by a [`RevisionSource`] implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the core library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A revision source failed while loading an older revision.
    #[error("failed to load revision {index}: {source}")]
    RevisionLoad {
        /// Zero-based index of the revision that failed, counting from the
        /// newest revision the source yielded.
        index: usize,
        /// Underlying error reported by the revision source.
        #[source]
        source: SourceError,
    },
}
