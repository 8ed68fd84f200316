use super::{lerp, Ease};

/// Pixels per line when the browser reports wheel deltas in lines.
const LINE_HEIGHT: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollConfig {
    /// Seconds taken to glide to a new target.
    pub duration: f64,
    pub easing: Ease,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        SmoothScrollConfig {
            duration: 1.2,
            easing: Ease::Lenis,
            wheel_multiplier: 1.0,
        }
    }
}

/// Smooth-scroll emulation.
///
/// Wheel input moves a target; every animation frame `advance` eases the
/// rendered position from where it was at the last retarget towards that
/// target. The caller writes the returned position to the window.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    position: f64,
    from: f64,
    target: f64,
    elapsed: f64,
    velocity: f64,
    animating: bool,
    stopped: bool,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        SmoothScroll {
            config,
            position: 0.0,
            from: 0.0,
            target: 0.0,
            elapsed: 0.0,
            velocity: 0.0,
            animating: false,
            stopped: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Pixels per second over the last frame.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Feed a wheel delta (already in pixels). `max` is the largest
    /// reachable scroll offset. Returns false when input is ignored.
    pub fn on_wheel(&mut self, delta: f64, max: f64) -> bool {
        if self.stopped {
            return false;
        }
        let target = (self.target + delta * self.config.wheel_multiplier).clamp(0.0, max.max(0.0));
        self.retarget(target);
        true
    }

    pub fn scroll_to(&mut self, target: f64, immediate: bool, max: f64) {
        let target = target.clamp(0.0, max.max(0.0));
        if immediate {
            self.position = target;
            self.from = target;
            self.target = target;
            self.velocity = 0.0;
            self.animating = false;
        } else {
            self.retarget(target);
        }
    }

    /// Advance by `dt` seconds and return the position to render.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !self.animating {
            self.velocity = 0.0;
            return self.position;
        }
        self.elapsed += dt.max(0.0);
        let t = if self.config.duration > 0.0 {
            (self.elapsed / self.config.duration).min(1.0)
        } else {
            1.0
        };
        let previous = self.position;
        self.position = lerp(self.from, self.target, self.config.easing.apply(t));
        if t >= 1.0 {
            self.position = self.target;
            self.animating = false;
        }
        self.velocity = if dt > 0.0 {
            (self.position - previous) / dt
        } else {
            0.0
        };
        self.position
    }

    /// Adopt a scroll offset that changed outside of wheel input, such as
    /// keyboard, scrollbar or touch scrolling. Ignored mid-glide.
    pub fn sync(&mut self, position: f64) {
        if self.animating {
            return;
        }
        self.position = position;
        self.from = position;
        self.target = position;
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.animating = false;
        self.target = self.position;
        self.velocity = 0.0;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    fn retarget(&mut self, target: f64) {
        self.from = self.position;
        self.target = target;
        self.elapsed = 0.0;
        self.animating = self.from != self.target;
    }
}

/// Convert a wheel delta to pixels given the DOM `deltaMode`
/// (0 = pixels, 1 = lines, 2 = pages).
pub fn normalize_wheel(delta: f64, mode: u32, viewport: f64) -> f64 {
    match mode {
        1 => delta * LINE_HEIGHT,
        2 => delta * viewport,
        _ => delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;
    const MAX: f64 = 5000.0;

    fn scroller() -> SmoothScroll {
        SmoothScroll::new(SmoothScrollConfig::default())
    }

    fn run(s: &mut SmoothScroll, seconds: f64) -> f64 {
        let frames = (seconds / FRAME).ceil() as usize;
        let mut pos = s.position();
        for _ in 0..frames {
            pos = s.advance(FRAME);
        }
        pos
    }

    #[test]
    fn test_wheel_glides_to_target() {
        let mut s = scroller();
        assert!(s.on_wheel(300.0, MAX));
        let early = s.advance(FRAME);
        assert!(early > 0.0 && early < 300.0);
        assert!(s.velocity() > 0.0);
        assert_eq!(run(&mut s, 1.3), 300.0);
        assert!(!s.is_animating());
        assert_eq!(s.advance(FRAME), 300.0);
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn test_wheel_accumulates_and_clamps() {
        let mut s = scroller();
        s.on_wheel(100.0, MAX);
        s.on_wheel(100.0, MAX);
        assert_eq!(s.target(), 200.0);
        s.on_wheel(-1000.0, MAX);
        assert_eq!(s.target(), 0.0);
        s.on_wheel(9000.0, MAX);
        assert_eq!(s.target(), MAX);
    }

    #[test]
    fn test_retarget_starts_from_current_position() {
        let mut s = scroller();
        s.on_wheel(1000.0, MAX);
        let mid = run(&mut s, 0.1);
        s.on_wheel(100.0, MAX);
        // no jump when the target moves mid-glide
        let next = s.advance(FRAME);
        assert!(next >= mid);
        assert_eq!(run(&mut s, 1.3), 1100.0);
    }

    #[test]
    fn test_immediate_scroll_to() {
        let mut s = scroller();
        s.on_wheel(500.0, MAX);
        s.advance(FRAME);
        s.scroll_to(0.0, true, MAX);
        assert_eq!(s.position(), 0.0);
        assert!(!s.is_animating());
        assert_eq!(s.advance(FRAME), 0.0);
    }

    #[test]
    fn test_animated_scroll_to() {
        let mut s = scroller();
        s.scroll_to(2400.0, false, MAX);
        assert!(s.is_animating());
        assert_eq!(run(&mut s, 1.3), 2400.0);
    }

    #[test]
    fn test_stop_ignores_input() {
        let mut s = scroller();
        s.stop();
        assert!(!s.on_wheel(200.0, MAX));
        assert_eq!(s.advance(FRAME), 0.0);
        s.start();
        assert!(s.on_wheel(200.0, MAX));
    }

    #[test]
    fn test_sync_only_when_idle() {
        let mut s = scroller();
        s.sync(800.0);
        assert_eq!(s.position(), 800.0);
        s.on_wheel(100.0, MAX);
        assert_eq!(s.target(), 900.0);
        s.sync(0.0);
        assert_eq!(s.target(), 900.0);
    }

    #[test]
    fn test_normalize_wheel() {
        assert_eq!(normalize_wheel(3.0, 0, 800.0), 3.0);
        assert_eq!(normalize_wheel(3.0, 1, 800.0), 48.0);
        assert_eq!(normalize_wheel(-1.0, 2, 800.0), -800.0);
    }
}
