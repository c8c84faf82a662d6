//! Content records for the lobby display
//!
//! This crate provides the record types shown in the display sections and
//! the roster source that loads them from disk.

pub mod roster;
pub mod source;

use thiserror::Error;

// Re-exports
pub use roster::{Availability, Doctor, Roster, Testimonial};

/// Errors that can occur while loading content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}
