use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::contact::ContactSection;
use super::data::{projects_resource, LoadError};
use super::footer::Footer;
use super::header::Header;
use super::hero::{pinned_length, HeroSection};
use super::motion::use_motion;
use super::parallax::ProjectParallax;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_motion();
    let projects = projects_resource(true);

    // one snap section for the hero, then one per card
    Effect::new(move |_| {
        if let Some(Ok(projects)) = projects.get() {
            ctx.enable_snap(projects.len() + 1, pinned_length(ctx));
        }
    });
    on_cleanup(move || ctx.disable_snap());

    view! {
        <Title text="Accueil" />
        <div class="min-h-screen bg-cream">
            <Header fixed=true />
            <HeroSection />
            <Suspense fallback=|| view! { <div class="h-screen bg-cream" /> }>
                {move || Suspend::new(async move {
                    match projects.await {
                        Ok(projects) => Either::Left(view! { <ProjectParallax projects /> }),
                        Err(error) => {
                            Either::Right(view! { <div class="py-16"><LoadError error /></div> })
                        }
                    }
                })}
            </Suspense>
            <ContactSection />
            <Footer />
        </div>
    }
}
