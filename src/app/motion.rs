//! Browser side of the scroll choreography.
//!
//! `MotionProvider` owns the one animation-frame loop of the page. Every frame
//! it advances the smooth scroller, writes the window scroll position and
//! publishes a [`Frame`]. Effects read that signal, measure their anchor
//! element and sample their timeline. On the server, and before hydration,
//! `active` is false and every effect renders its resting pose.

use leptos::{html, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::use_media_query;

use crate::config::MotionConfig;
use crate::motion::{
    smooth::normalize_wheel, Layout, Scrub, ScrollRange, ScrollSnap, SmoothScroll,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub scroll: f64,
    pub viewport: f64,
    /// Seconds since the previous frame.
    pub dt: f64,
}

#[derive(Clone, Copy)]
pub struct MotionContext {
    pub frame: ReadSignal<Frame>,
    /// Hydrated and motion not reduced.
    pub active: Signal<bool>,
    pub reduced: Signal<bool>,
    pub config: MotionConfig,
    scroller: StoredValue<SmoothScroll>,
    snap: StoredValue<Option<ScrollSnap>>,
}

/// What a wheel event should do once the snapper has seen it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WheelRoute {
    Glide(f64),
    /// Glide to the offset of the next section.
    Section(f64),
    Swallow,
}

/// The parts of a `WheelEvent` the scroller needs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WheelInput {
    delta_y: f64,
    mode: u32,
    ctrl: bool,
}

impl MotionContext {
    fn new(
        frame: ReadSignal<Frame>,
        active: Signal<bool>,
        reduced: Signal<bool>,
        config: MotionConfig,
    ) -> Self {
        MotionContext {
            frame,
            active,
            reduced,
            config,
            scroller: StoredValue::new(SmoothScroll::new(config.smooth)),
            snap: StoredValue::new(None),
        }
    }

    /// Scroll the window, gliding when motion is active.
    pub fn scroll_to(&self, y: f64, immediate: bool) {
        let max = max_scroll();
        if self.active.get_untracked() {
            self.scroller.update_value(|s| s.scroll_to(y, immediate, max));
            if !immediate {
                return;
            }
        }
        write_scroll(y.clamp(0.0, max));
    }

    /// Snap one section per wheel gesture until [`Self::disable_snap`].
    /// Section 0 is pinned for `lead` extra pixels before the next one starts.
    pub fn enable_snap(&self, sections: usize, lead: f64) {
        if !self.config.snap {
            return;
        }
        self.snap.update_value(|snap| match snap {
            Some(s) => s.set_layout(sections, lead),
            None => *snap = Some(ScrollSnap::new(sections, lead)),
        });
    }

    pub fn disable_snap(&self) {
        self.snap.set_value(None);
    }

    fn route_wheel(&self, delta: f64, viewport: f64, now_ms: f64) -> WheelRoute {
        self.snap
            .try_update_value(|snap| match snap {
                None => WheelRoute::Glide(delta),
                Some(s) if s.is_locked(now_ms) => WheelRoute::Swallow,
                Some(s) => match s.on_wheel(delta, now_ms) {
                    Some(index) => WheelRoute::Section(s.offset(index, viewport)),
                    None => WheelRoute::Glide(delta),
                },
            })
            .unwrap_or(WheelRoute::Glide(delta))
    }

    /// Take over a wheel event. Returns false when the browser should scroll
    /// natively: motion is inactive or the event is a pinch zoom.
    fn handle_wheel(&self, input: WheelInput, viewport: f64, max: f64, now_ms: f64) -> bool {
        // pinch zoom arrives as ctrl + wheel
        if !self.active.get_untracked() || input.ctrl {
            return false;
        }
        let delta = normalize_wheel(input.delta_y, input.mode, viewport);
        self.on_wheel(delta, viewport, max, now_ms);
        true
    }

    fn on_wheel(&self, delta: f64, viewport: f64, max: f64, now_ms: f64) {
        match self.route_wheel(delta, viewport, now_ms) {
            WheelRoute::Glide(delta) => self.scroller.update_value(|s| {
                s.on_wheel(delta, max);
            }),
            WheelRoute::Section(y) => self.scroller.update_value(|s| s.scroll_to(y, false, max)),
            WheelRoute::Swallow => {}
        }
    }

    /// Advance the scroller by one frame given the native scroll offset and
    /// return the offset to render.
    fn tick(&self, native: f64, viewport: f64, dt: f64, now_ms: f64) -> f64 {
        self.snap.update_value(|snap| {
            if let Some(s) = snap {
                s.sync(native, viewport, now_ms);
            }
        });
        self.scroller
            .try_update_value(|s| {
                s.sync(native);
                s.advance(dt)
            })
            .unwrap_or(native)
    }
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}

#[component]
pub fn MotionProvider(children: Children) -> impl IntoView {
    let config = MotionConfig::default();
    let reduced = use_media_query("(prefers-reduced-motion: reduce)");
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted(true));
    let active = Signal::derive(move || mounted.get() && !reduced.get());

    let (frame, set_frame) = signal(Frame::default());
    let ctx = MotionContext::new(frame, active, reduced, config);
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    browser::drive(ctx, set_frame);
    #[cfg(not(feature = "hydrate"))]
    let _ = set_frame;

    let location = use_location();
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| {
            ctx.disable_snap();
            ctx.scroll_to(0.0, true);
        },
        false,
    );

    children()
}

/// Scroll progress through `range`, eased by a scrub with `lag` seconds of
/// inertia. `range` maps the anchor's natural layout to scroll offsets, so
/// the anchor must not itself be sticky.
pub fn use_scroll_progress(
    anchor: NodeRef<html::Div>,
    lag: f64,
    range: impl Fn(Layout) -> ScrollRange + Send + Sync + 'static,
) -> ReadSignal<f64> {
    let ctx = use_motion();
    let scrub = StoredValue::new(Scrub::new(lag));
    let (progress, set_progress) = signal(0.0);

    Effect::new(move |_| {
        let frame = ctx.frame.get();
        if !ctx.active.get() || frame.viewport <= 0.0 {
            return;
        }
        let Some(layout) = measure(anchor, frame) else {
            return;
        };
        let target = range(layout).progress(frame.scroll);
        let value = scrub
            .try_update_value(|s| s.step(target, frame.dt))
            .unwrap_or(target);
        if value != progress.get_untracked() {
            set_progress(value);
        }
    });

    progress
}

/// Document-space layout of an element.
pub fn measure(node: NodeRef<html::Div>, frame: Frame) -> Option<Layout> {
    let el = node.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    Some(Layout {
        top: rect.top() + frame.scroll,
        height: rect.height(),
        viewport: frame.viewport,
    })
}

#[cfg(feature = "hydrate")]
fn max_scroll() -> f64 {
    let window = window();
    let viewport = browser::viewport(&window);
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| (el.scroll_height() as f64 - viewport).max(0.0))
        .unwrap_or(0.0)
}

#[cfg(not(feature = "hydrate"))]
fn max_scroll() -> f64 {
    0.0
}

#[cfg(feature = "hydrate")]
fn write_scroll(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}

#[cfg(not(feature = "hydrate"))]
fn write_scroll(_y: f64) {}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::{ev, prelude::*};
    use leptos_use::{
        use_event_listener_with_options, use_raf_fn, use_window, UseEventListenerOptions,
        UseRafFnCallbackArgs,
    };

    use super::{max_scroll, write_scroll, Frame, MotionContext, WheelInput};

    /// Frames longer than this are treated as a stall, not as elapsed time.
    const MAX_DT: f64 = 0.1;

    pub(super) fn viewport(window: &web_sys::Window) -> f64 {
        window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    pub(super) fn drive(ctx: MotionContext, set_frame: WriteSignal<Frame>) {
        use_raf_fn(move |args: UseRafFnCallbackArgs| {
            let window = window();
            let viewport = viewport(&window);
            let native = window.scroll_y().unwrap_or(0.0);
            let dt = (args.delta / 1000.0).clamp(0.0, MAX_DT);

            let scroll = if ctx.active.get_untracked() {
                let y = ctx.tick(native, viewport, dt, js_sys::Date::now());
                if (y - native).abs() >= 0.5 {
                    write_scroll(y);
                }
                y
            } else {
                native
            };

            let next = Frame {
                scroll,
                viewport,
                dt,
            };
            if next != ctx.frame.get_untracked() {
                set_frame(next);
            }
        });

        // non-passive so the native scroll can be cancelled; removed with the owner
        let _ = use_event_listener_with_options(
            use_window(),
            ev::wheel,
            move |ev: web_sys::WheelEvent| {
                let input = WheelInput {
                    delta_y: ev.delta_y(),
                    mode: ev.delta_mode(),
                    ctrl: ev.ctrl_key(),
                };
                if ctx.handle_wheel(input, viewport(&window()), max_scroll(), js_sys::Date::now()) {
                    ev.prevent_default();
                }
            },
            UseEventListenerOptions::default().passive(false),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::snap::TRANSITION_MS;

    // ssr enables reactive_graph's `sandboxed-arenas`: signals need a live owner
    fn enter_owner() {
        let owner = Owner::new();
        owner.set();
        std::mem::forget(owner);
    }

    fn context(snap: bool) -> MotionContext {
        enter_owner();
        let (frame, _) = signal(Frame::default());
        let config = MotionConfig {
            snap,
            ..MotionConfig::default()
        };
        MotionContext::new(frame, Signal::derive(|| true), Signal::derive(|| false), config)
    }

    #[test]
    fn test_wheel_glides_without_snap() {
        let ctx = context(false);
        ctx.enable_snap(4, 0.0);
        assert_eq!(ctx.route_wheel(120.0, 800.0, 0.0), WheelRoute::Glide(120.0));

        ctx.on_wheel(120.0, 800.0, 5000.0, 0.0);
        let y = ctx.tick(0.0, 800.0, 1.0 / 60.0, 16.0);
        assert!(y > 0.0 && y < 120.0);
        assert_eq!(ctx.scroller.with_value(|s| s.target()), 120.0);
    }

    #[test]
    fn test_wheel_snaps_by_section() {
        let ctx = context(true);
        ctx.enable_snap(3, 0.0);
        assert_eq!(ctx.route_wheel(5.0, 900.0, 0.0), WheelRoute::Section(900.0));
        assert_eq!(ctx.route_wheel(5.0, 900.0, 100.0), WheelRoute::Swallow);
        assert_eq!(
            ctx.route_wheel(5.0, 900.0, TRANSITION_MS + 1.0),
            WheelRoute::Section(1800.0)
        );
        // past the last section the page scrolls freely again
        assert_eq!(
            ctx.route_wheel(5.0, 900.0, 2.0 * TRANSITION_MS + 2.0),
            WheelRoute::Glide(5.0)
        );

        ctx.disable_snap();
        assert_eq!(ctx.route_wheel(5.0, 900.0, 0.0), WheelRoute::Glide(5.0));
    }

    #[test]
    fn test_snap_sections_follow_home_layout() {
        let ctx = context(true);
        let viewport = 900.0;
        let hero_height = viewport + ctx.config.portal.scroll_length;
        ctx.enable_snap(4, ctx.config.portal.scroll_length);

        // every section lands on the top of a card wrapper
        for card in 0..3 {
            let now = card as f64 * 2.0 * TRANSITION_MS;
            ctx.on_wheel(40.0, viewport, 10_000.0, now);
            let target = ctx.scroller.with_value(|s| s.target());
            assert_eq!(target, hero_height + card as f64 * viewport);
        }
        assert_eq!(ctx.scroller.with_value(|s| s.target()), 2400.0 + 1800.0);
    }

    #[test]
    fn test_wheel_handling() {
        let ctx = context(false);
        let line = WheelInput {
            delta_y: 3.0,
            mode: 1,
            ctrl: false,
        };
        assert!(ctx.handle_wheel(line, 800.0, 5000.0, 0.0));
        assert_eq!(ctx.scroller.with_value(|s| s.target()), 3.0 * 16.0);

        // pinch zoom stays with the browser
        let pinch = WheelInput { ctrl: true, ..line };
        assert!(!ctx.handle_wheel(pinch, 800.0, 5000.0, 0.0));
        assert_eq!(ctx.scroller.with_value(|s| s.target()), 3.0 * 16.0);
    }

    #[test]
    fn test_wheel_is_native_when_inactive() {
        enter_owner();
        let (frame, _) = signal(Frame::default());
        let ctx = MotionContext::new(
            frame,
            Signal::derive(|| false),
            Signal::derive(|| true),
            MotionConfig::default(),
        );
        let input = WheelInput {
            delta_y: 120.0,
            mode: 0,
            ctrl: false,
        };
        assert!(!ctx.handle_wheel(input, 800.0, 5000.0, 0.0));
        assert_eq!(ctx.scroller.with_value(|s| s.target()), 0.0);
    }

    #[test]
    fn test_tick_adopts_native_scroll_when_idle() {
        let ctx = context(false);
        assert_eq!(ctx.tick(640.0, 800.0, 1.0 / 60.0, 0.0), 640.0);
        assert_eq!(ctx.scroller.with_value(|s| s.position()), 640.0);
    }
}
