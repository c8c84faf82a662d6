//! Cancellable auto-advance timer
//!
//! The display owns at most one `AutoAdvance` guard and holds it exactly
//! while the slideshow is playing. Dropping the guard aborts the task, so a
//! torn-down display can never receive a late tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::carousel::RotatingSlideshow;

/// Scoped guard around the auto-advance task
///
/// Fires every `interval` and advances the slideshow cursor. Cancellation
/// is the drop of this guard; a dropped guard never ticks again.
pub struct AutoAdvance {
    task: JoinHandle<()>,
}

impl AutoAdvance {
    /// Spawn the auto-advance task on the given runtime
    pub fn spawn<T: Send + Sync + 'static>(
        handle: &tokio::runtime::Handle,
        slideshow: Arc<RotatingSlideshow<T>>,
        interval: Duration,
    ) -> Self {
        debug!(?interval, "auto-advance timer acquired");

        let task = handle.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // interval's first tick completes immediately; the first
            // advance should land a full period after acquisition
            ticker.tick().await;
            loop {
                ticker.tick().await;
                slideshow.tick();
            }
        });

        Self { task }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        debug!("auto-advance timer released");
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Playback;

    fn slideshow(n: usize) -> Arc<RotatingSlideshow<usize>> {
        Arc::new(RotatingSlideshow::new((0..n).collect()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_advances_while_playing() {
        let show = slideshow(5);
        let _guard = AutoAdvance::spawn(
            &tokio::runtime::Handle::current(),
            show.clone(),
            Duration::from_secs(5),
        );

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(show.cursor(), 1);
        assert_eq!(show.playback(), Playback::Playing);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(show.cursor(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_guard_never_ticks_again() {
        let show = slideshow(5);
        let guard = AutoAdvance::spawn(
            &tokio::runtime::Handle::current(),
            show.clone(),
            Duration::from_secs(5),
        );

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(show.cursor(), 1);

        drop(guard);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(show.cursor(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_slideshow_ignores_ticks() {
        let show = slideshow(5);
        show.toggle_autoplay();

        let _guard = AutoAdvance::spawn(
            &tokio::runtime::Handle::current(),
            show.clone(),
            Duration::from_secs(5),
        );

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(show.cursor(), 0);
        assert_eq!(show.playback(), Playback::Paused);
    }
}
