//! Bounded scrolling window over the filtered category list.
//!
//! The viewport does not own its inputs: the container width comes from the
//! renderer's measurements and the item count from the current filtered
//! view. Both are pushed in, and every push re-clamps the window so that
//! `window_start` always stays within `[0, max(0, len - capacity)]`.

use std::ops::Range;

/// Snapshot of the viewport for readers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub window_start: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone)]
pub struct CarouselViewport {
    /// Card width plus gap, in the same unit as container widths and offsets
    step_width: u16,
    capacity: usize,
    item_count: usize,
    window_start: usize,
}

impl CarouselViewport {
    /// `step_width` of zero is treated as one.
    pub fn new(step_width: u16) -> Self {
        Self {
            step_width: step_width.max(1),
            capacity: 1,
            item_count: 0,
            window_start: 0,
        }
    }

    pub fn step_width(&self) -> u16 {
        self.step_width
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            window_start: self.window_start,
            capacity: self.capacity,
        }
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recompute capacity from a measured container width (minimum one card).
    pub fn set_container_width(&mut self, container_width: u16) {
        let capacity = usize::from(container_width / self.step_width).max(1);
        if capacity != self.capacity {
            log::debug!("Carousel capacity {} -> {}", self.capacity, capacity);
            self.capacity = capacity;
            self.reclamp();
        }
    }

    /// Track the length of the filtered view.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            self.item_count = item_count;
            self.reclamp();
        }
    }

    /// Largest valid `window_start`
    pub fn max_start(&self) -> usize {
        self.item_count.saturating_sub(self.capacity)
    }

    /// Move the window so it starts at `target`, clamped to the valid range.
    pub fn scroll_to_index(&mut self, target: i64) {
        let max_start = i64::try_from(self.max_start()).unwrap_or(i64::MAX);
        let clamped = target.clamp(0, max_start);
        // Within [0, max_start], so it fits in usize.
        self.window_start = clamped as usize;
    }

    /// Sync the window from a raw scroll offset reported by the user's scroll.
    pub fn on_user_scroll(&mut self, raw_offset: f64) {
        let index = (raw_offset / f64::from(self.step_width)).round();
        // Saturating float-to-int cast, NaN becomes 0.
        self.scroll_to_index(index as i64);
    }

    pub fn scroll_left(&mut self) {
        self.scroll_to_index(self.window_start as i64 - 1);
    }

    pub fn scroll_right(&mut self) {
        self.scroll_to_index(self.window_start as i64 + 1);
    }

    pub fn can_scroll_left(&self) -> bool {
        self.window_start > 0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.window_start + self.capacity < self.item_count
    }

    /// Indexes of the filtered view currently in the window
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.window_start + self.capacity).min(self.item_count);
        self.window_start..end
    }

    /// Scroll offset that corresponds to the current window
    pub fn scroll_offset(&self) -> f64 {
        self.window_start as f64 * f64::from(self.step_width)
    }

    /// Scroll just enough to bring `index` into the window.
    pub fn reveal(&mut self, index: usize) {
        if index < self.window_start {
            self.scroll_to_index(index as i64);
        } else if index >= self.window_start + self.capacity {
            self.scroll_to_index((index + 1 - self.capacity) as i64);
        }
    }

    fn reclamp(&mut self) {
        let max_start = self.max_start();
        if self.window_start > max_start {
            log::debug!("Carousel window {} clamped to {}", self.window_start, max_start);
            self.window_start = max_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: u16 = 10;

    fn viewport(item_count: usize, capacity: u16) -> CarouselViewport {
        let mut vp = CarouselViewport::new(STEP);
        vp.set_container_width(capacity * STEP);
        vp.set_item_count(item_count);
        vp
    }

    #[test]
    fn test_capacity_from_container_width() {
        let mut vp = CarouselViewport::new(STEP);
        vp.set_container_width(35);
        assert_eq!(vp.capacity(), 3);

        vp.set_container_width(5);
        assert_eq!(vp.capacity(), 1);

        vp.set_container_width(0);
        assert_eq!(vp.capacity(), 1);
    }

    #[test]
    fn test_zero_step_width_is_one() {
        let mut vp = CarouselViewport::new(0);
        vp.set_container_width(4);
        assert_eq!(vp.step_width(), 1);
        assert_eq!(vp.capacity(), 4);
    }

    #[test]
    fn test_scroll_to_index_clamps_overlarge() {
        let mut vp = viewport(6, 3);
        vp.scroll_to_index(5);
        assert_eq!(vp.window_start(), 3);
        assert!(vp.can_scroll_left());
        assert!(!vp.can_scroll_right());
    }

    #[test]
    fn test_scroll_to_index_clamps_negative() {
        let mut vp = viewport(6, 3);
        vp.scroll_to_index(-4);
        assert_eq!(vp.window_start(), 0);
        assert!(!vp.can_scroll_left());
        assert!(vp.can_scroll_right());
    }

    #[test]
    fn test_scroll_bounds_hold_for_any_target() {
        for len in 0..8usize {
            for cap in 1..5u16 {
                let mut vp = viewport(len, cap);
                let max_start = len.saturating_sub(cap as usize);
                for target in [-100i64, -1, 0, 1, 2, 3, 7, 100, i64::MIN, i64::MAX] {
                    vp.scroll_to_index(target);
                    assert!(vp.window_start() <= max_start);
                }
            }
        }
    }

    #[test]
    fn test_fewer_items_than_capacity() {
        let mut vp = viewport(2, 5);
        vp.scroll_to_index(1);
        assert_eq!(vp.window_start(), 0);
        assert!(!vp.can_scroll_left());
        assert!(!vp.can_scroll_right());
        assert_eq!(vp.visible_range(), 0..2);
    }

    #[test]
    fn test_user_scroll_rounds_to_step() {
        let mut vp = viewport(6, 3);
        vp.on_user_scroll(14.0);
        assert_eq!(vp.window_start(), 1);
        vp.on_user_scroll(15.0);
        assert_eq!(vp.window_start(), 2);
        assert_eq!(vp.scroll_offset(), 20.0);
    }

    #[test]
    fn test_user_scroll_and_programmatic_scroll_converge() {
        let mut by_index = viewport(6, 3);
        let mut by_offset = viewport(6, 3);

        by_index.scroll_to_index(9);
        by_offset.on_user_scroll(9.0 * f64::from(STEP));
        assert_eq!(by_index.state(), by_offset.state());

        by_offset.on_user_scroll(-250.0);
        by_index.scroll_to_index(-25);
        assert_eq!(by_index.state(), by_offset.state());

        by_offset.on_user_scroll(f64::NAN);
        assert_eq!(by_offset.window_start(), 0);
    }

    #[test]
    fn test_shrinking_list_reclamps_window() {
        let mut vp = viewport(6, 3);
        vp.scroll_to_index(3);
        vp.set_item_count(4);
        assert_eq!(vp.window_start(), 1);
        vp.set_item_count(0);
        assert_eq!(vp.window_start(), 0);
    }

    #[test]
    fn test_growing_capacity_reclamps_window() {
        let mut vp = viewport(6, 3);
        vp.scroll_to_index(3);
        vp.set_container_width(5 * STEP);
        assert_eq!(vp.window_start(), 1);
        assert_eq!(vp.visible_range(), 1..6);
    }

    #[test]
    fn test_scroll_left_right_step_by_one() {
        let mut vp = viewport(5, 2);
        vp.scroll_right();
        vp.scroll_right();
        assert_eq!(vp.window_start(), 2);
        vp.scroll_right();
        vp.scroll_right();
        assert_eq!(vp.window_start(), 3);
        vp.scroll_left();
        assert_eq!(vp.window_start(), 2);
    }

    #[test]
    fn test_reveal_scrolls_minimally() {
        let mut vp = viewport(10, 3);
        vp.reveal(5);
        assert_eq!(vp.visible_range(), 3..6);
        vp.reveal(4);
        assert_eq!(vp.window_start(), 3);
        vp.reveal(0);
        assert_eq!(vp.window_start(), 0);
    }
}
