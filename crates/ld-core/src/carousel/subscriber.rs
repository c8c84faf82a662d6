//! Carousel change-subscriber trait

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::CarouselContext;

/// Trait for components that need to respond to carousel changes
pub trait CarouselSubscriber: Send + Sync {
    /// Called after the cursor or playback state changes
    fn on_carousel_change(&self, context: &CarouselContext);
}

/// Weak subscriber list shared by the carousel engines
pub(crate) struct SubscriberList {
    inner: RwLock<Vec<Weak<dyn CarouselSubscriber>>>,
}

impl SubscriberList {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Add a subscriber
    pub fn add(&self, subscriber: Arc<dyn CarouselSubscriber>) {
        let mut subscribers = self.inner.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all live subscribers, dropping dead weak references
    pub fn notify(&self, context: &CarouselContext) {
        let mut subscribers = self.inner.write();
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_carousel_change(context);
            }
        }
    }
}
