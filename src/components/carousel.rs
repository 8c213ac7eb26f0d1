// ABOUTME: One rotation abstraction for every home screen strip: windowed
// ABOUTME: indexing with wrap-around, width breakpoints and timed auto-advance

use std::time::{Duration, Instant};

/// Rotating window over `item_count` items. Both home screen strips
/// (services, testimonials) are instances of this; the window size comes
/// from terminal width at render time.
#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    index: usize,
    interval: Duration,
    last_rotated: Instant,
}

impl Carousel {
    pub fn new(item_count: usize, interval: Duration) -> Self {
        Self {
            item_count,
            index: 0,
            interval,
            last_rotated: Instant::now(),
        }
    }

    /// Update the item count when the backing list changes; the index
    /// stays valid.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if item_count == 0 {
            self.index = 0;
        } else {
            self.index %= item_count;
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Window size for a terminal width: three items on wide screens, two
    /// on medium, one otherwise.
    pub fn window_for_width(width: u16) -> usize {
        if width >= 120 {
            3
        } else if width >= 80 {
            2
        } else {
            1
        }
    }

    /// Indices visible right now, wrapping past the end of the list.
    pub fn visible_indices(&self, window: usize) -> Vec<usize> {
        if self.item_count == 0 || window == 0 {
            return Vec::new();
        }
        let shown = window.min(self.item_count);
        (0..shown)
            .map(|offset| (self.index + offset) % self.item_count)
            .collect()
    }

    pub fn rotate_next(&mut self) {
        if self.item_count > 0 {
            self.index = (self.index + 1) % self.item_count;
        }
        self.last_rotated = Instant::now();
    }

    pub fn rotate_previous(&mut self) {
        if self.item_count > 0 {
            self.index = (self.index + self.item_count - 1) % self.item_count;
        }
        self.last_rotated = Instant::now();
    }

    /// Advance on the timer; returns true when the window moved so the
    /// caller can request a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.item_count > 1 && now.duration_since(self.last_rotated) >= self.interval {
            self.index = (self.index + 1) % self.item_count;
            self.last_rotated = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel(count: usize) -> Carousel {
        Carousel::new(count, Duration::from_secs(6))
    }

    #[test]
    fn test_window_follows_width_breakpoints() {
        assert_eq!(Carousel::window_for_width(160), 3);
        assert_eq!(Carousel::window_for_width(120), 3);
        assert_eq!(Carousel::window_for_width(100), 2);
        assert_eq!(Carousel::window_for_width(80), 2);
        assert_eq!(Carousel::window_for_width(79), 1);
        assert_eq!(Carousel::window_for_width(40), 1);
    }

    #[test]
    fn test_visible_indices_wrap_around() {
        let mut strip = carousel(4);
        assert_eq!(strip.visible_indices(3), vec![0, 1, 2]);
        strip.rotate_next();
        strip.rotate_next();
        assert_eq!(strip.visible_indices(3), vec![2, 3, 0]);
    }

    #[test]
    fn test_window_never_repeats_items() {
        let strip = carousel(2);
        assert_eq!(strip.visible_indices(3), vec![0, 1]);
        assert_eq!(carousel(0).visible_indices(3), Vec::<usize>::new());
    }

    #[test]
    fn test_rotation_wraps_both_directions() {
        let mut strip = carousel(3);
        strip.rotate_previous();
        assert_eq!(strip.index(), 2);
        strip.rotate_next();
        assert_eq!(strip.index(), 0);
    }

    #[test]
    fn test_timer_advances_only_after_the_interval() {
        let mut strip = Carousel::new(3, Duration::from_secs(6));
        let start = Instant::now();
        assert!(!strip.tick(start + Duration::from_secs(1)));
        assert_eq!(strip.index(), 0);
        assert!(strip.tick(start + Duration::from_secs(7)));
        assert_eq!(strip.index(), 1);
    }

    #[test]
    fn test_single_item_never_rotates_on_the_timer() {
        let mut strip = Carousel::new(1, Duration::from_secs(6));
        let start = Instant::now();
        assert!(!strip.tick(start + Duration::from_secs(60)));
        assert_eq!(strip.index(), 0);
    }

    #[test]
    fn test_shrinking_item_count_keeps_index_in_range() {
        let mut strip = carousel(5);
        strip.rotate_next();
        strip.rotate_next();
        strip.rotate_next();
        strip.rotate_next();
        assert_eq!(strip.index(), 4);
        strip.set_item_count(2);
        assert_eq!(strip.index(), 0);
    }
}
