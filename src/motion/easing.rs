use std::str::FromStr;

use super::MotionError;

/// Easing curves, named after the tweening library conventions the site's
/// animations were designed with (`power2` is cubic, `power3` is quartic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    None,
    Power2In,
    Power2Out,
    Power3Out,
    ExpoOut,
    /// The smooth-scroll curve: `min(1, 1.001 - 2^(-10t))`.
    Lenis,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Ease::Lenis => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
        }
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" | "linear" => Ok(Ease::None),
            "power2.in" => Ok(Ease::Power2In),
            "power2.out" => Ok(Ease::Power2Out),
            "power3.out" => Ok(Ease::Power3Out),
            "expo.out" => Ok(Ease::ExpoOut),
            "lenis" => Ok(Ease::Lenis),
            other => Err(MotionError::UnknownEase(other.to_string())),
        }
    }
}
