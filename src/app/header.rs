use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

const NAV: [(&str, &str); 3] = [("/", "Accueil"), ("/projects", "Projets"), ("/about", "À propos")];

fn nav_class(active: bool) -> &'static str {
    if active {
        "text-base font-medium transition-colors duration-300 text-accent-dark"
    } else {
        "text-base font-medium transition-colors duration-300 text-text hover:text-accent-dark"
    }
}

/// Site navigation. `fixed` keeps it above the hero on the home page.
#[component]
pub fn Header(#[prop(optional)] fixed: bool) -> impl IntoView {
    let pathname = use_location().pathname;
    let header = view! {
        <header class="w-full py-8 md:py-12 px-6 md:px-8 backdrop-blur-sm bg-cream/80">
            <nav class="flex items-center justify-center max-w-7xl mx-auto">
                <div class="flex items-center gap-6">
                    {NAV
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=href
                                    attr:class=move || nav_class(pathname.get() == href)
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    };
    view! {
        <div class=if fixed { "fixed top-0 left-0 right-0 z-50" } else { "" }>{header}</div>
    }
}
