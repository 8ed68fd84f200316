/// Exponential decay rate per `lag` seconds; `e^-3` leaves about 5% of the
/// distance once `lag` seconds have passed.
const SETTLE_RATE: f64 = 3.0;
const SNAP_EPSILON: f64 = 1e-4;

/// Follows a scroll-derived progress value with inertia.
///
/// A lag of `n` seconds means the animation catches up with the scroll
/// position in roughly `n` seconds (about 95% of the way). A lag of zero ties
/// the animation directly to the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    lag: f64,
    value: Option<f64>,
}

impl Scrub {
    pub fn new(lag: f64) -> Self {
        Scrub {
            lag: lag.max(0.0),
            value: None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Advance by `dt` seconds towards `target` and return the new value.
    ///
    /// The first sample lands directly on the target so a page opened
    /// mid-scroll starts in the right pose.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let next = match self.value {
            None => target,
            Some(_) if self.lag == 0.0 => target,
            Some(current) => {
                let k = 1.0 - (-SETTLE_RATE * dt.max(0.0) / self.lag).exp();
                let v = current + (target - current) * k;
                if (target - v).abs() < SNAP_EPSILON {
                    target
                } else {
                    v
                }
            }
        };
        self.value = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_first_sample_jumps() {
        let mut scrub = Scrub::new(1.5);
        assert_eq!(scrub.value(), None);
        assert_eq!(scrub.step(0.4, FRAME), 0.4);
        assert_eq!(scrub.value(), Some(0.4));
    }

    #[test]
    fn test_zero_lag_follows_immediately() {
        let mut scrub = Scrub::new(0.0);
        scrub.step(0.0, FRAME);
        assert_eq!(scrub.step(0.8, FRAME), 0.8);
    }

    #[test]
    fn test_lag_approaches_target() {
        let mut scrub = Scrub::new(1.0);
        scrub.step(0.0, FRAME);
        let first = scrub.step(1.0, FRAME);
        assert!(first > 0.0 && first < 0.1);

        // one second of frames covers ~95% of the distance
        let mut v = first;
        for _ in 1..60 {
            v = scrub.step(1.0, FRAME);
        }
        assert!(v > 0.94 && v < 1.0, "got {v}");
    }

    #[test]
    fn test_longer_lag_is_slower() {
        let mut quick = Scrub::new(1.0);
        let mut slow = Scrub::new(2.0);
        quick.step(0.0, FRAME);
        slow.step(0.0, FRAME);
        for _ in 0..20 {
            quick.step(1.0, FRAME);
            slow.step(1.0, FRAME);
        }
        assert!(quick.value().unwrap() > slow.value().unwrap());
    }

    #[test]
    fn test_settles_exactly() {
        let mut scrub = Scrub::new(0.5);
        scrub.step(1.0, FRAME);
        for _ in 0..600 {
            scrub.step(0.0, FRAME);
        }
        assert_eq!(scrub.value(), Some(0.0));
    }

    #[test]
    fn test_zero_dt_holds_position() {
        let mut scrub = Scrub::new(1.0);
        scrub.step(0.2, FRAME);
        assert_eq!(scrub.step(0.9, 0.0), 0.2);
    }
}
