use leptos::prelude::*;

use super::atoms::{Text, TextVariant};
use super::reveal::{CharRevealText, Reveal};
use crate::config::SiteConfig;

#[component]
fn ContactLink(
    #[prop(into)] href: String,
    #[prop(into)] title: String,
    #[prop(into)] detail: String,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="flex flex-col items-center gap-3 group transition-transform duration-300 hover:scale-105 active:scale-95"
        >
            <div class="w-16 h-16 rounded-full bg-accent/20 flex items-center justify-center group-hover:bg-accent/30 transition-colors duration-300 text-accent-dark">
                {children()}
            </div>
            <Text variant=TextVariant::BodySm class="text-text-dark font-medium">
                {title}
            </Text>
            <Text variant=TextVariant::Caption class="text-accent-dark">
                {detail}
            </Text>
        </a>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let site = SiteConfig::default();

    view! {
        <section id="contact" class="w-full py-16 md:py-24 bg-cream">
            <div class="max-w-4xl mx-auto px-6 md:px-8 space-y-8">
                <div class="text-center space-y-4">
                    <CharRevealText
                        text="Contactez-moi"
                        variant=TextVariant::H2
                        class="text-accent-dark"
                    />
                    <Reveal>
                        <Text class="text-text-light max-w-2xl mx-auto">
                            "Vous avez un projet en tête ou une question ? N'hésitez pas à me contacter."
                        </Text>
                    </Reveal>
                </div>
                <Reveal
                    index=1
                    class="bg-white/50 backdrop-blur-sm rounded-2xl p-8 md:p-12 border border-sand/50 shadow-sm"
                >
                    <div class="flex flex-col md:flex-row items-center justify-center gap-8 md:gap-12">
                        <ContactLink
                            href=format!("mailto:{}", site.email)
                            title="Email"
                            detail=site.email
                        >
                            <svg
                                width="32"
                                height="32"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                                <polyline points="22,6 12,13 2,6" />
                            </svg>
                        </ContactLink>
                        <ContactLink
                            href=site.linkedin
                            title="LinkedIn"
                            detail=site.author
                            external=true
                        >
                            <svg width="32" height="32" viewBox="0 0 24 24" fill="currentColor">
                                <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" />
                            </svg>
                        </ContactLink>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
