use super::config::NAV_REVEAL_OFFSET;

/// Derives navbar visibility from vertical scroll movement.
///
/// The bar is visible while scrolling up, or anywhere within `reveal_offset`
/// pixels of the top. Starts visible at offset 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    visible: bool,
    reveal_offset: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(NAV_REVEAL_OFFSET)
    }
}

impl ScrollTracker {
    pub fn new(reveal_offset: f64) -> Self {
        Self {
            last_offset: 0.0,
            visible: true,
            reveal_offset,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Records a scroll position and returns whether visibility flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        // overscroll can report negative offsets
        let offset = offset.max(0.0);
        let visible = offset < self.last_offset || offset < self.reveal_offset;
        self.last_offset = offset;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visibility(offsets: &[f64]) -> Vec<bool> {
        let mut tracker = ScrollTracker::default();
        offsets
            .iter()
            .map(|offset| {
                tracker.observe(*offset);
                tracker.visible()
            })
            .collect()
    }

    #[test]
    fn test_initially_visible() {
        let tracker = ScrollTracker::default();
        assert!(tracker.visible());
        assert_eq!(tracker.last_offset(), 0.0);
    }

    #[test]
    fn test_visibility_sequence() {
        assert_eq!(
            visibility(&[0.0, 50.0, 120.0, 90.0]),
            vec![true, true, false, true]
        );
    }

    #[test]
    fn test_hidden_only_when_not_scrolling_up_past_threshold() {
        let offsets = [
            10.0, 79.0, 80.0, 81.0, 81.0, 400.0, 399.0, 1200.0, 60.0, 90.0, 0.0, 300.0, 300.0,
        ];
        let mut last = 0.0;
        for (offset, visible) in offsets.iter().zip(visibility(&offsets)) {
            let hidden = *offset >= last && *offset >= 80.0;
            assert_eq!(visible, !hidden, "offset {offset} after {last}");
            last = *offset;
        }
    }

    #[test]
    fn test_holding_still_below_fold_hides() {
        // an unchanged offset below the fold is not scrolling up
        assert_eq!(visibility(&[200.0, 150.0, 150.0]), vec![false, true, false]);
    }

    #[test]
    fn test_observe_reports_transitions() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(40.0));
        assert!(tracker.observe(500.0));
        assert!(!tracker.observe(600.0));
        assert!(tracker.observe(550.0));
        assert!(!tracker.observe(20.0));
    }

    #[test]
    fn test_negative_offset_clamped() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(-35.0);
        assert_eq!(tracker.last_offset(), 0.0);
        assert!(tracker.visible());
    }

    #[test]
    fn test_custom_reveal_offset() {
        let mut tracker = ScrollTracker::new(200.0);
        tracker.observe(150.0);
        assert!(tracker.visible());
        tracker.observe(250.0);
        assert!(!tracker.visible());
    }
}
