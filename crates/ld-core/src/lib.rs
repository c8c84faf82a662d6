//! Core controllers for the lobby display
//!
//! This crate provides the carousel state machines that drive the rotating
//! sections of the display, plus the timer plumbing for automatic
//! advancement.

pub mod autoplay;
pub mod carousel;
pub mod error;

// Re-export commonly used types
pub use autoplay::AutoAdvance;
pub use carousel::{
    CarouselContext, CarouselSubscriber, PagedCarousel, Playback, RotatingSlideshow,
};
pub use error::SelectError;
