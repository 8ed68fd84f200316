use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::atoms::{ArrowLink, LinkButton, Text, TextVariant};
use super::data::{projects_resource, LoadError};
use super::footer::Footer;
use super::header::Header;
use super::image::ProjectImage;
use super::reveal::Reveal;
use crate::content::{Project, DEFAULT_TILE_COLOR};

#[component]
fn ProjectTile(project: Project, index: usize) -> impl IntoView {
    let background = project
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_TILE_COLOR.to_string());
    let summary = project.summary();
    let links = project.links("Voir le projet");

    view! {
        <Reveal index class="group">
            <article
                class="h-full rounded-2xl overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300 flex flex-col"
                style=format!("background-color: {background};")
            >
                <div class="relative w-full h-48 md:h-56 overflow-hidden">
                    <ProjectImage
                        src=project.image.clone()
                        alt=project.title.clone()
                        position=project.image_position().to_string()
                        class="group-hover:scale-105 transition-transform duration-300"
                    />
                </div>
                <div class="flex-1 p-6 flex flex-col">
                    <Text variant=TextVariant::H4 class="text-text-dark mb-3">
                        {project.title.clone()}
                    </Text>
                    {(!project.tags.is_empty())
                        .then(|| {
                            view! {
                                <ul class="flex flex-wrap gap-2 mb-3">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <li class="text-xs px-2 py-1 rounded-full bg-white/50 text-text-dark">
                                                    {tag.clone()}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                        })}
                    <Text variant=TextVariant::BodySm class="text-text flex-1 mb-4 line-clamp-4">
                        {summary}
                    </Text>
                    <div class="flex flex-col gap-2 mt-auto">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <ArrowLink
                                        href=link.url
                                        label=link.label
                                        class="text-sm text-text-dark hover:text-accent-dark transition-colors duration-300"
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = projects_resource(false);

    view! {
        <Title text="Projets" />
        <div class="min-h-screen bg-cream flex flex-col">
            <Header />
            <main class="flex-1 w-full max-w-7xl mx-auto px-6 md:px-8 py-12 md:py-16 space-y-12">
                <Reveal class="text-center space-y-4">
                    <Text variant=TextVariant::H1 class="text-accent-dark">
                        "Mes Projets"
                    </Text>
                    <Text class="text-text-light max-w-2xl mx-auto">
                        "Découvrez tous mes projets et réalisations"
                    </Text>
                </Reveal>
                <Transition fallback=move || {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                            <div class="h-96 rounded-2xl bg-sand-light animate-pulse"></div>
                            <div class="h-96 rounded-2xl bg-sand-light animate-pulse"></div>
                            <div class="h-96 rounded-2xl bg-sand-light animate-pulse"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match projects.await {
                            Ok(projects) => {
                                Either::Left(
                                    view! {
                                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                                            {projects
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, project)| {
                                                    view! { <ProjectTile project index /> }
                                                })
                                                .collect_view()}
                                        </div>
                                    },
                                )
                            }
                            Err(error) => Either::Right(view! { <LoadError error /> }),
                        }
                    })}
                </Transition>
                <div class="text-center pt-8">
                    <LinkButton href="/">"Retour à l'accueil"</LinkButton>
                </div>
            </main>
            <Footer />
        </div>
    }
}
