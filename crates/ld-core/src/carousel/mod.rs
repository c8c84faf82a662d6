use serde::{Deserialize, Serialize};

mod paged;
mod rotating;
mod subscriber;

pub use paged::PagedCarousel;
pub use rotating::RotatingSlideshow;
pub use subscriber::CarouselSubscriber;

pub(crate) use subscriber::SubscriberList;

/// Playback state of an auto-advancing carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Advancing on a timer
    Playing,
    /// Manual navigation only
    Paused,
}

/// Snapshot passed to subscribers when a carousel changes
#[derive(Debug, Clone)]
pub struct CarouselContext {
    /// Current page or item index
    pub cursor: usize,
    /// Exclusive upper bound of the cursor (page count or item count)
    pub bound: usize,
    /// Playback state, for carousels that auto-advance
    pub playback: Option<Playback>,
}
