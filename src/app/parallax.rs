use leptos::{html, prelude::*};

use super::atoms::ArrowLink;
use super::image::ProjectImage;
use super::motion::{use_motion, use_scroll_progress};
use crate::content::{Project, DEFAULT_CARD_COLOR};
use crate::motion::{choreography::CardStack, Pose, ScrollRange};

/// Stacked project cards. Every card sits in a full-viewport sticky wrapper,
/// so each new card slides over the previous one, which shrinks and fades.
#[component]
pub fn ProjectParallax(projects: Vec<Project>) -> impl IntoView {
    let section = NodeRef::<html::Div>::new();
    let count = projects.len();

    view! {
        <div
            node_ref=section
            class="relative w-full bg-cream"
            style=format!("height: {}vh;", count * 100)
        >
            {projects
                .into_iter()
                .enumerate()
                .map(|(index, project)| {
                    view! { <ParallaxCard project index count section /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ParallaxCard(
    project: Project,
    index: usize,
    count: usize,
    section: NodeRef<html::Div>,
) -> impl IntoView {
    let ctx = use_motion();
    let stack = ctx.config.cards;
    let lag = ctx.config.card_scrub;

    // the wrappers are sticky, so timelines are laid out from the section
    let recede = (index + 1 < count).then(|| {
        use_scroll_progress(section, lag, move |layout| {
            let next = stack.card_layout(layout.top, index + 1, layout.viewport);
            ScrollRange::resolve(CardStack::RECEDE_START, CardStack::RECEDE_END, next)
        })
    });
    let enter = (index == 0).then(|| {
        use_scroll_progress(section, lag, move |layout| {
            let card = stack.card_layout(layout.top, index, layout.viewport);
            ScrollRange::resolve(CardStack::ENTER_START, CardStack::ENTER_END, card)
        })
    });

    let background = project
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_CARD_COLOR.to_string());
    let style = move || {
        let pose = if ctx.active.get() {
            let entered = enter.map_or(Pose::REST, |p| CardStack::enter(p.get()));
            let receded = recede.map_or(Pose::REST, |p| CardStack::recede(p.get()));
            entered.then(receded)
        } else {
            Pose::REST
        };
        format!(
            "background: {background}; {} will-change: transform, opacity;",
            pose.css()
        )
    };

    let links = if project.intro {
        Vec::new()
    } else {
        project.links("See more")
    };
    let position = project.image_position().to_string();

    view! {
        <div
            class="sticky flex items-center justify-center"
            style=format!("top: {}px; height: 100vh; z-index: {index};", stack.sticky_top(index))
        >
            <article
                class="w-[90vw] max-w-[1200px] h-[75vh] rounded-[40px] shadow-xl flex flex-col overflow-hidden"
                style=style
            >
                <div class="flex justify-center items-center pt-8 pb-6">
                    <h2 class="text-3xl md:text-4xl font-bold text-center text-[#1a1a1a]">
                        {project.title.clone()}
                    </h2>
                </div>
                <div class="flex-1 min-h-0 flex flex-row px-8 pb-8 gap-8">
                    <div class="w-[45%] flex flex-col">
                        <div class="flex-1 flex items-center justify-center overflow-y-auto">
                            <p class="text-lg leading-relaxed whitespace-pre-line text-center font-medium text-black/80">
                                {project.description.clone()}
                            </p>
                        </div>
                        <div class="mt-6 flex flex-col gap-3 items-center">
                            {links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <ArrowLink
                                            href=link.url
                                            label=link.label
                                            class="text-base text-[#1a1a1a]"
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="w-[55%] flex items-center justify-center p-4">
                        <div class="relative w-full h-full rounded-3xl overflow-hidden">
                            <ProjectImage
                                src=project.image.clone()
                                alt=project.title.clone()
                                position=position
                                class="rounded-3xl"
                                eager={index == 0}
                            />
                        </div>
                    </div>
                </div>
            </article>
        </div>
    }
}
