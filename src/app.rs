mod about;
mod atoms;
mod contact;
mod data;
mod footer;
mod header;
mod hero;
mod homepage;
mod image;
mod motion;
mod parallax;
mod projects;
mod reveal;

use about::AboutPage;
use atoms::{LinkButton, Text, TextVariant};
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use motion::MotionProvider;
use projects::ProjectsPage;

use crate::config::SiteConfig;

pub use data::{get_about_server, get_projects_server};

const OG_IMAGE: &str = "/og-image.jpg";

/// schema.org description of the author, embedded as JSON-LD.
fn person_json_ld(site: &SiteConfig) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": site.author,
        "url": site.url,
        "email": format!("mailto:{}", site.email),
        "sameAs": [site.linkedin],
        "jobTitle": "Étudiant Business Data & IA",
    })
    .to_string()
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = SiteConfig::default();
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap"
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <script type="application/ld+json" inner_html=person_json_ld(&site) />
                <MetaTags />
            </head>
            <body class="font-sans bg-cream text-text antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let site = SiteConfig::default();
    let image = site.absolute(OG_IMAGE);

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Meta name="description" content=site.description />
        <Meta name="author" content=site.author />
        <Meta name="robots" content="index, follow, max-image-preview:large" />
        <Link rel="canonical" href=site.absolute("/") />
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content=site.locale />
        <Meta property="og:url" content=site.absolute("/") />
        <Meta property="og:site_name" content=site.name />
        <Meta property="og:title" content=site.name />
        <Meta property="og:description" content=site.description />
        <Meta property="og:image" content=image.clone() />
        <Meta property="og:image:width" content="1200" />
        <Meta property="og:image:height" content="630" />
        <Meta property="og:image:alt" content=site.name />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=site.name />
        <Meta name="twitter:description" content=site.description />
        <Meta name="twitter:image" content=image />

        <Router>
            <MotionProvider>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </MotionProvider>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page introuvable" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 px-6 text-center">
            <Text variant=TextVariant::H1 class="text-accent-dark">
                "404"
            </Text>
            <Text class="text-text-light">"Cette page n'existe pas."</Text>
            <LinkButton href="/">"Retour à l'accueil"</LinkButton>
        </main>
    }
}
