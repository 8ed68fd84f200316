use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::atoms::{Text, TextVariant};
use super::motion::{use_motion, use_scroll_progress};
use crate::motion::{
    choreography::{CharReveal, RevealDirection},
    Pose, ScrollRange,
};

const DURATION_S: f64 = 0.6;
const STAGGER_S: f64 = 0.1;

const HIDDEN: Pose = Pose {
    scale: 1.0,
    opacity: 0.0,
    y: 20.0,
    clip: None,
};

/// Inline style of a revealed block. Until hydration, and under reduced
/// motion, blocks render in place with no transition.
pub fn reveal_style(active: bool, seen: bool, index: usize) -> String {
    if !active {
        return String::new();
    }
    let pose = if seen { Pose::REST } else { HIDDEN };
    format!(
        "{} transition: opacity {DURATION_S}s ease-out, transform {DURATION_S}s ease-out; transition-delay: {:.1}s;",
        pose.css(),
        STAGGER_S * index as f64
    )
}

/// Fades and lifts its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_motion();
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_seen(true);
        }
    });

    view! {
        <div node_ref=node class=class style=move || reveal_style(ctx.active.get(), seen.get(), index)>
            {children()}
        </div>
    }
}

/// Text whose characters are unclipped one after another as it scrolls
/// through the middle of the viewport.
#[component]
pub fn CharRevealText(
    #[prop(into)] text: String,
    #[prop(optional)] variant: TextVariant,
    #[prop(optional)] direction: RevealDirection,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let ctx = use_motion();
    let anchor = NodeRef::<html::Div>::new();
    let chars = text.chars().collect::<Vec<_>>();
    let reveal = CharReveal::new(chars.len(), direction);
    let progress = use_scroll_progress(anchor, ctx.config.text_scrub, |layout| {
        ScrollRange::resolve(CharReveal::START, CharReveal::END, layout)
    });

    let spans = chars
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let style = move || {
                if ctx.active.get() {
                    format!("clip-path: {};", reveal.char_inset(i, progress.get()).css())
                } else {
                    String::new()
                }
            };
            view! {
                <span aria-hidden="true" class="inline-block whitespace-pre" style=style>
                    {c.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div node_ref=anchor>
            <Text variant=variant class=class>
                <span class="sr-only">{text}</span>
                {spans}
            </Text>
        </div>
    }
}
