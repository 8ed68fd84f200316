//! The site's scroll timelines, sampled from a progress value in `[0, 1]`.

use super::{lerp, Ease, Layout, TriggerPoint};

/// Clip rectangle in percent, as in CSS `inset()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Inset {
    pub const NONE: Inset = Inset {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn css(&self) -> String {
        format!(
            "inset({}% {}% {}% {}%)",
            round(self.top),
            round(self.right),
            round(self.bottom),
            round(self.left)
        )
    }
}

/// Visual state applied to an element through its inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: f64,
    pub opacity: f64,
    pub y: f64,
    pub clip: Option<Inset>,
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        scale: 1.0,
        opacity: 1.0,
        y: 0.0,
        clip: None,
    };

    /// Layer `other` on top of `self`: scales and opacities multiply,
    /// offsets add, the later clip wins.
    pub fn then(self, other: Pose) -> Pose {
        Pose {
            scale: self.scale * other.scale,
            opacity: self.opacity * other.opacity,
            y: self.y + other.y,
            clip: other.clip.or(self.clip),
        }
    }

    pub fn css(&self) -> String {
        let mut css = format!(
            "transform: translate3d(0px, {}px, 0px) scale({}); opacity: {};",
            round(self.y),
            round(self.scale),
            round(self.opacity)
        );
        if let Some(clip) = self.clip {
            css.push_str(&format!(" clip-path: {};", clip.css()));
        }
        css
    }
}

fn round(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Hero "portal": the name cut out of a cream mask grows until the mask
/// disappears and only the background video is left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    /// Pinned scroll length in pixels.
    pub scroll_length: f64,
    pub final_scale: f64,
    pub video_scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalFrame {
    pub mask_scale: f64,
    pub video_scale: f64,
}

impl Portal {
    pub const START: TriggerPoint = TriggerPoint::meet(0.0, 0.0);

    pub fn end(&self) -> TriggerPoint {
        TriggerPoint::After(self.scroll_length)
    }

    pub fn sample(&self, progress: f64) -> PortalFrame {
        let t = Ease::None.apply(progress);
        PortalFrame {
            mask_scale: lerp(1.0, self.final_scale, t),
            video_scale: lerp(1.0, self.video_scale, t),
        }
    }

    /// SVG transform scaling the mask group about the centre of its
    /// 100x100 view box.
    pub fn mask_transform(scale: f64) -> String {
        format!("translate(50 50) scale({}) translate(-50 -50)", round(scale))
    }
}

/// Geometry of the stacked project cards. Each card is sticky inside a
/// full-viewport wrapper; wrappers follow each other in normal flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStack {
    /// Card height as a fraction of the viewport.
    pub card_height: f64,
    pub sticky_base: f64,
    pub sticky_step: f64,
}

impl CardStack {
    /// The next card's top travelling from the viewport bottom to 20%.
    pub const RECEDE_START: TriggerPoint = TriggerPoint::meet(0.0, 1.0);
    pub const RECEDE_END: TriggerPoint = TriggerPoint::meet(0.0, 0.2);
    pub const ENTER_START: TriggerPoint = TriggerPoint::meet(0.0, 0.9);
    pub const ENTER_END: TriggerPoint = TriggerPoint::meet(0.0, 0.5);

    pub fn sticky_top(&self, index: usize) -> f64 {
        self.sticky_base + self.sticky_step * index as f64
    }

    /// Natural layout of card `index`, vertically centred in its wrapper.
    pub fn card_layout(&self, section_top: f64, index: usize, viewport: f64) -> Layout {
        let height = self.card_height * viewport;
        Layout {
            top: section_top + index as f64 * viewport + (viewport - height) / 2.0,
            height,
            viewport,
        }
    }

    /// A card shrinking and fading as the next one slides over it.
    pub fn recede(progress: f64) -> Pose {
        let t = progress.clamp(0.0, 1.0);
        Pose {
            scale: lerp(1.0, 0.9, t),
            opacity: lerp(1.0, 0.5, t),
            y: lerp(0.0, 20.0, t),
            clip: None,
        }
    }

    /// The first card arriving from the hero.
    pub fn enter(progress: f64) -> Pose {
        let t = progress.clamp(0.0, 1.0);
        Pose {
            scale: lerp(0.95, 1.0, t),
            opacity: t,
            y: lerp(50.0, 0.0, t),
            clip: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Per-character clip reveal of a line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharReveal {
    pub count: usize,
    pub stagger: f64,
    pub direction: RevealDirection,
}

impl CharReveal {
    pub const START: TriggerPoint = TriggerPoint::meet(0.0, 0.8);
    pub const END: TriggerPoint = TriggerPoint::meet(0.0, 0.2);
    const CHAR_DURATION: f64 = 0.5;

    pub fn new(count: usize, direction: RevealDirection) -> Self {
        CharReveal {
            count,
            stagger: 0.02,
            direction,
        }
    }

    /// Timeline length in stagger units.
    pub fn total(&self) -> f64 {
        self.count.saturating_sub(1) as f64 * self.stagger + Self::CHAR_DURATION
    }

    pub fn char_inset(&self, index: usize, progress: f64) -> Inset {
        let time = progress.clamp(0.0, 1.0) * self.total();
        let local = (time - index as f64 * self.stagger) / Self::CHAR_DURATION;
        let hidden = 100.0 * (1.0 - Ease::Power3Out.apply(local));
        match self.direction {
            RevealDirection::Horizontal => Inset {
                right: hidden,
                ..Inset::NONE
            },
            RevealDirection::Vertical => Inset {
                top: hidden,
                ..Inset::NONE
            },
        }
    }
}
