use leptos::{html, prelude::*};

use super::atoms::{Button, ButtonSize, ButtonVariant};
use super::motion::{use_motion, use_scroll_progress, MotionContext};
use crate::config::SiteConfig;
use crate::motion::{
    choreography::{Portal, PortalFrame},
    ScrollRange,
};

const CREAM: &str = "#FDFCF0";

/// Scroll distance the hero stays pinned for after its first viewport.
pub fn pinned_length(ctx: MotionContext) -> f64 {
    if ctx.reduced.get() {
        0.0
    } else {
        ctx.config.portal.scroll_length
    }
}

/// Full-screen video seen through the author's name cut out of a cream
/// mask. Scrolling zooms the mask until only the video is left; the section
/// stays pinned (sticky) for the length of the zoom.
#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_motion();
    let site = SiteConfig::default();
    let portal = ctx.config.portal;
    let anchor = NodeRef::<html::Div>::new();

    let progress = use_scroll_progress(anchor, ctx.config.portal_scrub, move |layout| {
        ScrollRange::resolve(Portal::START, portal.end(), layout)
    });
    let frame = Memo::new(move |_| {
        if ctx.active.get() {
            portal.sample(progress.get())
        } else {
            portal.sample(0.0)
        }
    });

    let height = move || format!("height: calc(100vh + {}px);", pinned_length(ctx));
    let video_style = move || {
        let PortalFrame { video_scale, .. } = frame.get();
        format!("transform: scale({video_scale:.4}); will-change: transform;")
    };
    let mask_transform = move || Portal::mask_transform(frame.get().mask_scale);
    let [top_line, bottom_line] = site.hero_lines;

    view! {
        <div node_ref=anchor class="relative w-full" style=height>
            <section
                class="sticky top-0 w-full h-screen overflow-hidden"
                style=format!("background-color: {CREAM};")
            >
                <video
                    class="absolute inset-0 w-full h-full object-cover"
                    src=site.hero_video
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    style=video_style
                />
                <svg
                    class="absolute inset-0 w-full h-full pointer-events-none z-10"
                    viewBox="0 0 100 100"
                    preserveAspectRatio="xMidYMid slice"
                    aria-hidden="true"
                >
                    <defs>
                        <mask id="portal-mask" maskUnits="userSpaceOnUse">
                            <rect width="100%" height="100%" fill="white" />
                            <g fill="black" transform=mask_transform>
                                <rect width="100" height="100" fill="none" />
                                <text
                                    x="50"
                                    y="46"
                                    text-anchor="middle"
                                    dominant-baseline="alphabetic"
                                    font-size="18"
                                    font-weight="900"
                                    font-family="system-ui, sans-serif"
                                    letter-spacing="-0.05em"
                                >
                                    {top_line}
                                </text>
                                <rect
                                    x="0"
                                    y="50"
                                    width="100"
                                    height="1.2"
                                    transform="translate(0 -0.6)"
                                />
                                <text
                                    x="50"
                                    y="54"
                                    text-anchor="middle"
                                    dominant-baseline="hanging"
                                    font-size="18"
                                    font-weight="900"
                                    font-family="system-ui, sans-serif"
                                    letter-spacing="-0.05em"
                                >
                                    {bottom_line}
                                </text>
                            </g>
                        </mask>
                    </defs>
                    <rect width="100%" height="100%" fill=CREAM mask="url(#portal-mask)" />
                </svg>
                <h1 class="sr-only">{format!("{top_line} {bottom_line}")}</h1>
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-30">
                    <Button
                        variant=ButtonVariant::Tertiary
                        size=ButtonSize::Sm
                        label="Faire défiler jusqu'aux projets"
                        on_click=move |_| {
                            let viewport = ctx.frame.get_untracked().viewport;
                            ctx.scroll_to(pinned_length(ctx) + viewport, false)
                        }
                    >
                        <span class="flex flex-col items-center gap-1 text-text">
                            <span class="text-sm font-medium">"Scroll"</span>
                            <svg
                                width="24"
                                height="24"
                                viewBox="0 0 24 24"
                                fill="none"
                                class="animate-bounce-arrow"
                            >
                                <path
                                    d="M7 10L12 15L17 10"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />
                            </svg>
                        </span>
                    </Button>
                </div>
            </section>
        </div>
    }
}
