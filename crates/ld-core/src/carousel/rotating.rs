//! Auto-advancing slideshow engine

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::{CarouselContext, CarouselSubscriber, Playback, SubscriberList};
use crate::error::SelectError;

/// Cursor and playback state stored internally
#[derive(Debug, Clone)]
struct RotatingState {
    cursor: usize,
    playback: Playback,
}

/// Cyclic slideshow over a fixed list, one item at a time
///
/// The cursor wraps modulo the item count. While `Playing`, a timer tick
/// advances the cursor; any manual navigation switches to `Paused` and the
/// explicit toggle flips the state without moving the cursor. An empty
/// slideshow starts `Paused` and every operation is a no-op.
pub struct RotatingSlideshow<T> {
    items: Vec<T>,
    state: RwLock<RotatingState>,
    subscribers: SubscriberList,
}

impl<T> RotatingSlideshow<T> {
    /// Create a slideshow over `items`, starting at the first item
    pub fn new(items: Vec<T>) -> Self {
        let playback = if items.is_empty() {
            Playback::Paused
        } else {
            Playback::Playing
        };

        Self {
            items,
            state: RwLock::new(RotatingState { cursor: 0, playback }),
            subscribers: SubscriberList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current item index
    pub fn cursor(&self) -> usize {
        self.state.read().cursor
    }

    /// Current playback state
    pub fn playback(&self) -> Playback {
        self.state.read().playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback() == Playback::Playing
    }

    /// All items, in order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The item under the cursor, if any
    pub fn current(&self) -> Option<&T> {
        let cursor = self.state.read().cursor;
        self.items.get(cursor)
    }

    /// Timer tick: advance while `Playing`
    ///
    /// Has no effect while `Paused` or with fewer than two items.
    pub fn tick(&self) {
        let mut state = self.state.write();
        if state.playback != Playback::Playing || self.items.len() <= 1 {
            return;
        }

        state.cursor = (state.cursor + 1) % self.items.len();
        let cursor = state.cursor;
        drop(state);

        debug!(cursor, "slideshow advanced on tick");
        self.notify();
    }

    /// Manually advance to the next item, pausing autoplay
    pub fn next(&self) {
        if self.items.is_empty() {
            return;
        }

        let mut state = self.state.write();
        state.cursor = (state.cursor + 1) % self.items.len();
        state.playback = Playback::Paused;
        let cursor = state.cursor;
        drop(state);

        debug!(cursor, "slideshow advanced manually");
        self.notify();
    }

    /// Manually step back to the previous item, pausing autoplay
    pub fn prev(&self) {
        if self.items.is_empty() {
            return;
        }

        let mut state = self.state.write();
        state.cursor = (state.cursor + self.items.len() - 1) % self.items.len();
        state.playback = Playback::Paused;
        let cursor = state.cursor;
        drop(state);

        debug!(cursor, "slideshow stepped back manually");
        self.notify();
    }

    /// Jump to a specific item, pausing autoplay
    pub fn select(&self, index: usize) -> Result<(), SelectError> {
        let bound = self.items.len();
        if index >= bound {
            return Err(SelectError::OutOfRange { index, bound });
        }

        let mut state = self.state.write();
        state.cursor = index;
        state.playback = Playback::Paused;
        drop(state);

        debug!(index, "slideshow item selected");
        self.notify();
        Ok(())
    }

    /// Flip between `Playing` and `Paused` without moving the cursor
    pub fn toggle_autoplay(&self) {
        if self.items.is_empty() {
            return;
        }

        let mut state = self.state.write();
        state.playback = match state.playback {
            Playback::Playing => Playback::Paused,
            Playback::Paused => Playback::Playing,
        };
        let playback = state.playback;
        drop(state);

        debug!(?playback, "slideshow autoplay toggled");
        self.notify();
    }

    /// Add a subscriber
    pub fn subscribe(&self, subscriber: Arc<dyn CarouselSubscriber>) {
        self.subscribers.add(subscriber);
    }

    /// Get the current context snapshot
    pub fn context(&self) -> CarouselContext {
        let state = self.state.read();
        CarouselContext {
            cursor: state.cursor,
            bound: self.items.len(),
            playback: Some(state.playback),
        }
    }

    fn notify(&self) {
        let context = self.context();
        self.subscribers.notify(&context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slideshow(n: usize) -> RotatingSlideshow<usize> {
        RotatingSlideshow::new((0..n).collect())
    }

    #[test]
    fn test_starts_playing_when_nonempty() {
        assert_eq!(slideshow(3).playback(), Playback::Playing);
        assert_eq!(slideshow(0).playback(), Playback::Paused);
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let show = slideshow(3);
        show.tick();
        assert_eq!(show.cursor(), 1);
        assert_eq!(show.playback(), Playback::Playing);
        show.tick();
        show.tick();
        assert_eq!(show.cursor(), 0);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let show = slideshow(3);
        show.toggle_autoplay();
        show.tick();
        assert_eq!(show.cursor(), 0);
    }

    #[test]
    fn test_tick_on_single_item_has_no_effect() {
        let show = slideshow(1);
        show.tick();
        assert_eq!(show.cursor(), 0);
        assert_eq!(show.playback(), Playback::Playing);
    }

    #[test]
    fn test_manual_navigation_pauses() {
        let show = slideshow(5);
        show.next();
        assert_eq!(show.cursor(), 1);
        assert_eq!(show.playback(), Playback::Paused);

        let show = slideshow(5);
        show.prev();
        assert_eq!(show.cursor(), 4);
        assert_eq!(show.playback(), Playback::Paused);

        let show = slideshow(5);
        show.select(2).unwrap();
        assert_eq!(show.cursor(), 2);
        assert_eq!(show.playback(), Playback::Paused);
    }

    #[test]
    fn test_toggle_twice_restores_playing_without_moving_cursor() {
        let show = slideshow(5);
        show.next();
        assert_eq!(show.playback(), Playback::Paused);
        let cursor = show.cursor();

        show.toggle_autoplay();
        assert_eq!(show.playback(), Playback::Playing);
        assert_eq!(show.cursor(), cursor);

        show.toggle_autoplay();
        assert_eq!(show.playback(), Playback::Paused);
        assert_eq!(show.cursor(), cursor);
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let show = slideshow(5);
        assert_eq!(
            show.select(5),
            Err(SelectError::OutOfRange { index: 5, bound: 5 })
        );
        assert_eq!(show.cursor(), 0);
        assert_eq!(show.playback(), Playback::Playing);
    }

    #[test]
    fn test_empty_slideshow_is_inert() {
        let show = slideshow(0);
        show.tick();
        show.next();
        show.prev();
        show.toggle_autoplay();
        assert_eq!(show.cursor(), 0);
        assert_eq!(show.playback(), Playback::Paused);
        assert!(show.current().is_none());
    }

    #[test]
    fn test_tick_then_manual_then_select_scenario() {
        let show = slideshow(5);

        show.tick();
        assert_eq!(show.cursor(), 1);
        assert_eq!(show.playback(), Playback::Playing);

        show.prev();
        assert_eq!(show.cursor(), 0);
        assert_eq!(show.playback(), Playback::Paused);

        show.select(3).unwrap();
        assert_eq!(show.cursor(), 3);
        assert_eq!(show.playback(), Playback::Paused);
    }
}
