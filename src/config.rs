//! Site-wide settings.
//!
//! Values are fixed at compile time so the server render and the hydrated
//! client always agree. Server address and asset paths come from the Leptos
//! configuration in `Cargo.toml` instead.

use chrono::{DateTime, Datelike};

use crate::motion::{choreography::CardStack, choreography::Portal, SmoothScrollConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub url: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub locale: &'static str,
    pub author: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub hero_video: &'static str,
    /// Lines cut out of the hero mask, top to bottom.
    pub hero_lines: [&'static str; 2],
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            url: option_env!("PORTFOLIO_SITE_URL").unwrap_or("https://portfolio.example.com"),
            name: "Portfolio - Solaire & Calme",
            description: "Portfolio créatif et élégant - Vitrine de propreté technique et d'élégance visuelle",
            locale: "fr_FR",
            author: "Clément Cochod",
            email: "ccochod@eugeniaschool.com",
            linkedin: "https://www.linkedin.com/in/clément-cochod-506a9633b/",
            hero_video: "/media/IMG_0764.mp4",
            hero_lines: ["COCHOD", "CLEMENT"],
        }
    }
}

impl SiteConfig {
    pub fn absolute(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub smooth: SmoothScrollConfig,
    pub portal: Portal,
    /// Scrub lag of the hero, in seconds.
    pub portal_scrub: f64,
    pub cards: CardStack,
    pub card_scrub: f64,
    pub text_scrub: f64,
    /// One section per wheel gesture on the home page.
    pub snap: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            smooth: SmoothScrollConfig::default(),
            portal: Portal {
                scroll_length: 1500.0,
                final_scale: 800.0,
                video_scale: 1.2,
            },
            portal_scrub: 2.0,
            cards: CardStack {
                card_height: 0.75,
                sticky_base: 20.0,
                sticky_step: 20.0,
            },
            card_scrub: 1.5,
            text_scrub: 1.0,
            snap: matches!(option_env!("PORTFOLIO_SCROLL_SNAP"), Some("1" | "true")),
        }
    }
}

/// Year the site was built, shown in the footer.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or(2025)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|d| d.year())
}
