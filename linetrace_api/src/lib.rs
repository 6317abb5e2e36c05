//! Shared linetrace data models consumed by the core library and external
//! diff engines.

pub mod change;

pub use change::*;
