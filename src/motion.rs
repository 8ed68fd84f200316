//! Scroll-driven animation math.
//!
//! Everything in here is pure: no DOM, no signals. The browser glue in
//! `app::motion` measures layout once per frame and feeds the numbers through
//! these types, which keeps the choreography testable on the host.

pub mod choreography;
pub mod easing;
pub mod scrub;
pub mod smooth;
pub mod snap;
pub mod trigger;

pub use choreography::{Inset, Pose};
pub use easing::Ease;
pub use scrub::Scrub;
pub use smooth::{SmoothScroll, SmoothScrollConfig};
pub use snap::ScrollSnap;
pub use trigger::{Layout, ScrollRange, TriggerPoint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("unknown easing: {0}")]
    UnknownEase(String),
    #[error("invalid trigger position: {0}")]
    BadTrigger(String),
}

/// Linear interpolation between `from` and `to`, exact at both ends.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}
