//! Page-wise carousel engine

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::{CarouselContext, CarouselSubscriber, SubscriberList};
use crate::error::SelectError;

/// Cursor state stored internally
#[derive(Debug, Clone)]
struct PagedState {
    cursor: usize,
}

/// Page-wise carousel over a fixed list
///
/// Partitions its items into pages of `page_size` and exposes one page at a
/// time. The cursor is a page index and wraps modulo the page count, so
/// advancing past the last page returns to the first. An empty list has
/// zero pages and every navigation call is a no-op.
pub struct PagedCarousel<T> {
    items: Vec<T>,
    page_size: usize,
    state: RwLock<PagedState>,
    subscribers: SubscriberList,
}

impl<T> PagedCarousel<T> {
    /// Create a carousel over `items`, `page_size` items per page
    ///
    /// `page_size` must be at least 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be at least 1");

        Self {
            items,
            page_size,
            state: RwLock::new(PagedState { cursor: 0 }),
            subscribers: SubscriberList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; zero for an empty list
    pub fn page_count(&self) -> usize {
        (self.items.len() + self.page_size - 1) / self.page_size
    }

    /// Current page index
    pub fn cursor(&self) -> usize {
        self.state.read().cursor
    }

    /// All items, in order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items on the current page
    ///
    /// The last page may be shorter than `page_size`; the slice never
    /// reaches past the end of the list.
    pub fn visible(&self) -> &[T] {
        let cursor = self.state.read().cursor;
        let start = cursor * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Advance to the next page, wrapping to the first
    pub fn next(&self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }

        let mut state = self.state.write();
        state.cursor = (state.cursor + 1) % pages;
        let cursor = state.cursor;
        drop(state);

        debug!(cursor, pages, "carousel page advanced");
        self.notify();
    }

    /// Step back to the previous page, wrapping to the last
    pub fn prev(&self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }

        let mut state = self.state.write();
        state.cursor = (state.cursor + pages - 1) % pages;
        let cursor = state.cursor;
        drop(state);

        debug!(cursor, pages, "carousel page stepped back");
        self.notify();
    }

    /// Jump to a specific page
    pub fn select(&self, page: usize) -> Result<(), SelectError> {
        let bound = self.page_count();
        if page >= bound {
            return Err(SelectError::OutOfRange { index: page, bound });
        }

        let mut state = self.state.write();
        state.cursor = page;
        drop(state);

        debug!(page, "carousel page selected");
        self.notify();
        Ok(())
    }

    /// Add a subscriber
    pub fn subscribe(&self, subscriber: Arc<dyn CarouselSubscriber>) {
        self.subscribers.add(subscriber);
    }

    /// Get the current context snapshot
    pub fn context(&self) -> CarouselContext {
        CarouselContext {
            cursor: self.state.read().cursor,
            bound: self.page_count(),
            playback: None,
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

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(PagedCarousel::new(vec![1, 2, 3, 4], 3).page_count(), 2);
        assert_eq!(PagedCarousel::new(vec![1, 2, 3], 3).page_count(), 1);
        assert_eq!(PagedCarousel::new(vec![1], 3).page_count(), 1);
        assert_eq!(PagedCarousel::new(Vec::<i32>::new(), 3).page_count(), 0);
    }

    #[test]
    fn test_next_wraps_to_first_page() {
        let carousel = PagedCarousel::new(vec![1, 2, 3, 4], 3);
        carousel.next();
        assert_eq!(carousel.cursor(), 1);
        carousel.next();
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last_page() {
        let carousel = PagedCarousel::new(vec![1, 2, 3, 4, 5, 6, 7], 3);
        assert_eq!(carousel.page_count(), 3);
        carousel.prev();
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        let carousel = PagedCarousel::new(vec![1, 2, 3, 4, 5], 2);
        carousel.select(1).unwrap();
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.cursor(), 1);
        carousel.prev();
        carousel.next();
        assert_eq!(carousel.cursor(), 1);
    }

    #[test]
    fn test_visible_stays_in_bounds() {
        let carousel = PagedCarousel::new(vec![10, 20, 30, 40], 3);
        assert_eq!(carousel.visible(), &[10, 20, 30]);
        carousel.next();
        assert_eq!(carousel.visible(), &[40]);
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let carousel = PagedCarousel::new(vec![1, 2, 3, 4], 3);
        assert_eq!(
            carousel.select(2),
            Err(SelectError::OutOfRange { index: 2, bound: 2 })
        );
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let carousel = PagedCarousel::new(Vec::<i32>::new(), 3);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.cursor(), 0);
        assert!(carousel.visible().is_empty());
        assert!(carousel.select(0).is_err());
    }

    #[test]
    fn test_single_page_navigation_is_safe() {
        let carousel = PagedCarousel::new(vec![1, 2], 3);
        carousel.next();
        assert_eq!(carousel.cursor(), 0);
        carousel.prev();
        assert_eq!(carousel.cursor(), 0);
    }
}
