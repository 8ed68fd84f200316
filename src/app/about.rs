use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::atoms::{LinkButton, Text, TextVariant};
use super::data::{about_resource, LoadError};
use super::footer::Footer;
use super::header::Header;
use super::reveal::Reveal;

#[component]
pub fn AboutPage() -> impl IntoView {
    let sections = about_resource();

    view! {
        <Title text="À propos" />
        <div class="min-h-screen bg-cream flex flex-col">
            <Header />
            <main class="flex-1 w-full max-w-4xl mx-auto px-6 md:px-8 py-12 md:py-16 space-y-12">
                <Reveal class="text-center space-y-4">
                    <Text variant=TextVariant::H1 class="text-accent-dark">
                        "À propos de moi"
                    </Text>
                    <Text class="text-text-light max-w-2xl mx-auto">
                        "Découvrez mon parcours, mes compétences et ma vision"
                    </Text>
                </Reveal>
                <Transition fallback=move || {
                    view! {
                        <div class="space-y-8">
                            <div class="h-40 rounded-2xl bg-sand-light animate-pulse"></div>
                            <div class="h-40 rounded-2xl bg-sand-light animate-pulse"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match sections.await {
                            Ok(sections) => {
                                Either::Left(
                                    view! {
                                        <div class="space-y-8">
                                            {sections
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, section)| {
                                                    view! {
                                                        <Reveal
                                                            index
                                                            class="bg-white/50 backdrop-blur-sm rounded-2xl p-6 md:p-8 border border-sand/50 shadow-sm hover:shadow-md transition-shadow duration-300"
                                                        >
                                                            <section>
                                                                <Text
                                                                    variant=TextVariant::H3
                                                                    class="text-accent-dark mb-4"
                                                                >
                                                                    {section.title}
                                                                </Text>
                                                                <div
                                                                    class="text-text leading-relaxed about-prose"
                                                                    inner_html=section.html
                                                                />
                                                            </section>
                                                        </Reveal>
                                                    }
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
                    <LinkButton href="/">"Retour aux projets"</LinkButton>
                </div>
            </main>
            <Footer />
        </div>
    }
}
