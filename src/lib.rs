//! Core library for the readme-sync command line application.
//!
//! The crate keeps a source file's leading documentation comments identical
//! to the project README. [`transform`] turns README lines into doc-comment
//! lines, [`splice`] swaps them into the region between the marker lines of
//! the target file, [`io`] holds the filesystem adapters, and [`sync`] ties
//! the steps together into a single run.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod splice;
pub mod sync;
pub mod transform;

pub use error::{Result, SyncError};
pub use sync::{SyncConfig, SyncOutcome};
