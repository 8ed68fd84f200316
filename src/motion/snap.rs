/// Time a snap transition holds the lock, in milliseconds.
pub const TRANSITION_MS: f64 = 800.0;

/// One section per wheel gesture.
///
/// Section 0 is the hero at the top of the page. The hero stays pinned for
/// `lead` extra pixels, so section `i > 0` sits at `lead + i * viewport`.
/// While a transition is running further wheel input is swallowed. The lock
/// is purely time based so it cannot get stuck. Once the page is scrolled
/// past the last section the snapper lets go until the user is back inside
/// the snapped range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnap {
    index: usize,
    count: usize,
    lead: f64,
    beyond: bool,
    locked_until: f64,
}

impl ScrollSnap {
    pub fn new(count: usize, lead: f64) -> Self {
        ScrollSnap {
            index: 0,
            count,
            lead: lead.max(0.0),
            beyond: false,
            locked_until: f64::NEG_INFINITY,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        now_ms < self.locked_until
    }

    /// Adopt a new section layout, e.g. once the project list has loaded.
    pub fn set_layout(&mut self, count: usize, lead: f64) {
        self.count = count;
        self.lead = lead.max(0.0);
        self.index = self.index.min(count.saturating_sub(1));
    }

    /// Returns the new section index when the wheel moves to another section.
    pub fn on_wheel(&mut self, delta: f64, now_ms: f64) -> Option<usize> {
        if self.count == 0 || self.beyond || self.is_locked(now_ms) {
            return None;
        }
        let next = if delta > 0.0 && self.index + 1 < self.count {
            self.index + 1
        } else if delta < 0.0 && self.index > 0 {
            self.index - 1
        } else {
            return None;
        };
        self.lock(next, now_ms);
        Some(next)
    }

    pub fn go_to(&mut self, index: usize, now_ms: f64) -> Option<usize> {
        if index >= self.count || self.is_locked(now_ms) {
            return None;
        }
        self.beyond = false;
        self.lock(index, now_ms);
        Some(index)
    }

    /// Re-derive the current section from a scroll offset that moved without
    /// wheel input (keyboard, scrollbar, route change).
    pub fn sync(&mut self, scroll: f64, viewport: f64, now_ms: f64) {
        if self.count == 0 || viewport <= 0.0 || self.is_locked(now_ms) {
            return;
        }
        let last = self.count - 1;
        self.beyond = scroll > self.offset(last, viewport) + 1.0;
        self.index = if self.beyond {
            last
        } else {
            self.nearest(scroll, viewport)
        };
    }

    /// Scroll offset of section `index`.
    pub fn offset(&self, index: usize, viewport: f64) -> f64 {
        if index == 0 {
            0.0
        } else {
            self.lead + index as f64 * viewport
        }
    }

    fn nearest(&self, scroll: f64, viewport: f64) -> usize {
        if scroll <= self.lead / 2.0 + viewport / 2.0 || self.count == 1 {
            return 0;
        }
        let i = ((scroll - self.lead) / viewport).round().max(1.0) as usize;
        i.min(self.count - 1)
    }

    fn lock(&mut self, index: usize, now_ms: f64) {
        self.index = index;
        self.locked_until = now_ms + TRANSITION_MS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_steps_one_section() {
        let mut snap = ScrollSnap::new(4, 0.0);
        assert_eq!(snap.on_wheel(120.0, 0.0), Some(1));
        assert_eq!(snap.on_wheel(120.0, 900.0), Some(2));
        assert_eq!(snap.on_wheel(-3.0, 1800.0), Some(1));
        assert_eq!(snap.offset(snap.index(), 900.0), 900.0);
    }

    #[test]
    fn test_offsets_skip_pinned_hero() {
        // hero is 900 + 1500 tall, cards follow one viewport apart
        let snap = ScrollSnap::new(4, 1500.0);
        assert_eq!(snap.offset(0, 900.0), 0.0);
        assert_eq!(snap.offset(1, 900.0), 2400.0);
        assert_eq!(snap.offset(3, 900.0), 4200.0);
    }

    #[test]
    fn test_locked_during_transition() {
        let mut snap = ScrollSnap::new(4, 0.0);
        assert_eq!(snap.on_wheel(120.0, 1000.0), Some(1));
        assert!(snap.is_locked(1500.0));
        assert_eq!(snap.on_wheel(120.0, 1500.0), None);
        assert_eq!(snap.index(), 1);
        assert!(!snap.is_locked(1800.0));
        assert_eq!(snap.on_wheel(120.0, 1800.0), Some(2));
    }

    #[test]
    fn test_bounds() {
        let mut snap = ScrollSnap::new(2, 0.0);
        assert_eq!(snap.on_wheel(-50.0, 0.0), None);
        assert_eq!(snap.on_wheel(50.0, 0.0), Some(1));
        assert_eq!(snap.on_wheel(50.0, 5000.0), None);
        assert_eq!(snap.on_wheel(0.0, 9000.0), None);
    }

    #[test]
    fn test_empty_never_moves() {
        let mut snap = ScrollSnap::new(0, 0.0);
        assert_eq!(snap.on_wheel(50.0, 0.0), None);
        assert_eq!(snap.go_to(0, 0.0), None);
    }

    #[test]
    fn test_go_to() {
        let mut snap = ScrollSnap::new(3, 0.0);
        assert_eq!(snap.go_to(5, 0.0), None);
        assert_eq!(snap.go_to(2, 0.0), Some(2));
        assert_eq!(snap.go_to(0, 100.0), None);
        assert_eq!(snap.go_to(0, 900.0), Some(0));
    }

    #[test]
    fn test_sync_and_resize() {
        let mut snap = ScrollSnap::new(5, 1500.0);
        snap.sync(1000.0, 1000.0, 0.0);
        assert_eq!(snap.index(), 0);
        snap.sync(3400.0, 1000.0, 0.0);
        assert_eq!(snap.index(), 2);
        snap.set_layout(3, 1500.0);
        assert_eq!(snap.index(), 2);
    }

    #[test]
    fn test_released_past_last_section() {
        let mut snap = ScrollSnap::new(3, 1500.0);
        // contact section, well below the last card at 3500
        snap.sync(5200.0, 1000.0, 0.0);
        assert_eq!(snap.on_wheel(-40.0, 0.0), None);
        assert_eq!(snap.on_wheel(40.0, 0.0), None);

        // back on the last card, snapping resumes
        snap.sync(3500.0, 1000.0, 10.0);
        assert_eq!(snap.index(), 2);
        assert_eq!(snap.on_wheel(-40.0, 10.0), Some(1));
    }
}
