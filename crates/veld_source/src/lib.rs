//! Source buffer management and location tracking for the Veld front-end.
//!
//! This crate provides [`SourceBuffer`] for holding the text of a source file
//! with precomputed line-start offsets, [`SourceLocation`] for tracking where
//! in that text a diagnostic points, and [`ContextLine`] for recovering the
//! line of source surrounding a diagnostic together with its caret alignment.

#![warn(missing_docs)]

pub mod buffer;
pub mod location;

pub use buffer::{ContextLine, SourceBuffer};
pub use location::SourceLocation;
