use std::str::FromStr;

use super::MotionError;

/// A position along an element or along the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Fraction of the size, `top` = 0, `center` = 0.5, `bottom` = 1.
    Fraction(f64),
    Pixels(f64),
}

impl Anchor {
    fn offset(self, size: f64) -> f64 {
        match self {
            Anchor::Fraction(f) => f * size,
            Anchor::Pixels(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MotionError::BadTrigger(s.to_string());
        match s {
            "top" => Ok(Anchor::Fraction(0.0)),
            "center" => Ok(Anchor::Fraction(0.5)),
            "bottom" => Ok(Anchor::Fraction(1.0)),
            pct if pct.ends_with('%') => finite(&pct[..pct.len() - 1])
                .map(|p| Anchor::Fraction(p / 100.0))
                .ok_or_else(bad),
            px => finite(px.strip_suffix("px").unwrap_or(px))
                .map(Anchor::Pixels)
                .ok_or_else(bad),
        }
    }
}

/// `NaN` and `inf` parse as floats but never describe a position.
fn finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Where a scroll-linked animation starts or ends.
///
/// Written the way the site's timelines were authored: `"top 80%"` means
/// "when the element's top reaches 80% of the viewport height", and
/// `"+=1500"` means "1500px of scrolling after the start".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerPoint {
    Meet { element: Anchor, viewport: Anchor },
    After(f64),
}

impl TriggerPoint {
    pub const fn meet(element: f64, viewport: f64) -> Self {
        TriggerPoint::Meet {
            element: Anchor::Fraction(element),
            viewport: Anchor::Fraction(viewport),
        }
    }
}

impl FromStr for TriggerPoint {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(px) = s.strip_prefix("+=") {
            let px = px.trim();
            return finite(px.strip_suffix("px").unwrap_or(px))
                .map(TriggerPoint::After)
                .ok_or_else(|| MotionError::BadTrigger(s.to_string()));
        }
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(TriggerPoint::Meet {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(MotionError::BadTrigger(s.to_string())),
        }
    }
}

/// An element's natural (un-pinned) placement in the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Distance from the top of the document to the element's top edge.
    pub top: f64,
    pub height: f64,
    pub viewport: f64,
}

/// Absolute scroll offsets bounding an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn resolve(start: TriggerPoint, end: TriggerPoint, layout: Layout) -> Self {
        let meet = |element: Anchor, viewport: Anchor| {
            layout.top + element.offset(layout.height) - viewport.offset(layout.viewport)
        };
        let start = match start {
            TriggerPoint::Meet { element, viewport } => meet(element, viewport),
            TriggerPoint::After(px) => layout.top + px,
        };
        let end = match end {
            TriggerPoint::Meet { element, viewport } => meet(element, viewport),
            TriggerPoint::After(px) => start + px,
        };
        ScrollRange { start, end }
    }

    pub fn progress(&self, scroll: f64) -> f64 {
        if self.end <= self.start {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(top: f64) -> Layout {
        Layout {
            top,
            height: 600.0,
            viewport: 1000.0,
        }
    }

    #[test]
    fn test_parse_keywords_and_units() {
        assert_eq!(
            "top 80%".parse::<TriggerPoint>(),
            Ok(TriggerPoint::meet(0.0, 0.8))
        );
        assert_eq!(
            "center center".parse::<TriggerPoint>(),
            Ok(TriggerPoint::meet(0.5, 0.5))
        );
        assert_eq!(
            "bottom 100px".parse::<TriggerPoint>(),
            Ok(TriggerPoint::Meet {
                element: Anchor::Fraction(1.0),
                viewport: Anchor::Pixels(100.0),
            })
        );
        assert_eq!("+=1500".parse::<TriggerPoint>(), Ok(TriggerPoint::After(1500.0)));
        assert_eq!("+= 40px".parse::<TriggerPoint>(), Ok(TriggerPoint::After(40.0)));
    }

    #[test]
    fn test_parse_errors() {
        assert!("top".parse::<TriggerPoint>().is_err());
        assert!("top 80% extra".parse::<TriggerPoint>().is_err());
        assert!("middle top".parse::<TriggerPoint>().is_err());
        assert!("+=far".parse::<TriggerPoint>().is_err());
        assert_eq!(
            "top x%".parse::<TriggerPoint>(),
            Err(MotionError::BadTrigger("x%".to_string()))
        );
        assert_eq!(
            "top NaN%".parse::<TriggerPoint>(),
            Err(MotionError::BadTrigger("NaN%".to_string()))
        );
        assert!("inf top".parse::<TriggerPoint>().is_err());
        assert!("+=infinity".parse::<TriggerPoint>().is_err());
        assert!("+=NaN".parse::<TriggerPoint>().is_err());
    }

    #[test]
    fn test_resolve_meet_points() {
        // element top at 2000, viewport 1000: "top bottom" starts at 1000,
        // "top 20%" ends at 1800
        let range = ScrollRange::resolve(
            "top bottom".parse().unwrap(),
            "top 20%".parse().unwrap(),
            layout(2000.0),
        );
        assert_eq!(range.start, 1000.0);
        assert_eq!(range.end, 1800.0);
    }

    #[test]
    fn test_resolve_relative_end() {
        let range = ScrollRange::resolve(
            "top top".parse().unwrap(),
            "+=1500".parse().unwrap(),
            layout(0.0),
        );
        assert_eq!(range, ScrollRange { start: 0.0, end: 1500.0 });
        assert_eq!(range.progress(750.0), 0.5);
    }

    #[test]
    fn test_progress_is_clamped() {
        let range = ScrollRange { start: 100.0, end: 300.0 };
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(200.0), 0.5);
        assert_eq!(range.progress(10_000.0), 1.0);
    }

    #[test]
    fn test_empty_range_is_a_step() {
        let range = ScrollRange { start: 500.0, end: 500.0 };
        assert_eq!(range.progress(499.0), 0.0);
        assert_eq!(range.progress(500.0), 1.0);
    }

    #[test]
    fn test_resize_moves_range() {
        let start: TriggerPoint = "top 80%".parse().unwrap();
        let end: TriggerPoint = "top 20%".parse().unwrap();
        let wide = ScrollRange::resolve(start, end, layout(3000.0));
        let short = ScrollRange::resolve(
            start,
            end,
            Layout {
                viewport: 500.0,
                ..layout(3000.0)
            },
        );
        assert_eq!(wide.start, 2200.0);
        assert_eq!(short.start, 2600.0);
        assert_eq!(short.end - short.start, 300.0);
    }
}
