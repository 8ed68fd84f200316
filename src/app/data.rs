use dashmap::DashMap;
use leptos::{prelude::*, server_fn::codec::GetUrl};
use std::sync::LazyLock;

use crate::content::{AboutSection, Project};

/// Browser-side caches, keyed by whether the intro card is included.
static PROJECT_CACHE: LazyLock<DashMap<bool, Vec<Project>>> = LazyLock::new(DashMap::new);
static ABOUT_CACHE: LazyLock<DashMap<(), Vec<AboutSection>>> = LazyLock::new(DashMap::new);

#[server(input = GetUrl)]
pub async fn get_projects_server(include_intro: bool) -> Result<Vec<Project>, ServerFnError> {
    use crate::content::{get_projects, showcase};

    let projects = get_projects().map_err(|e| {
        tracing::error!(error = %e, "couldn't load projects");
        ServerFnError::new(e)
    })?;
    Ok(if include_intro {
        projects
    } else {
        showcase(projects)
    })
}

#[server(input = GetUrl)]
pub async fn get_about_server() -> Result<Vec<AboutSection>, ServerFnError> {
    crate::content::get_about().map_err(|e| {
        tracing::error!(error = %e, "couldn't load about sections");
        ServerFnError::new(e)
    })
}

pub fn projects_resource(include_intro: bool) -> Resource<Result<Vec<Project>, String>> {
    Resource::new(
        move || include_intro,
        |include_intro| async move {
            let cache = &*PROJECT_CACHE;
            if let Some(p) = cache.get(&include_intro) {
                return Ok((*p).clone());
            }
            let projects = get_projects_server(include_intro)
                .await
                .map_err(|e| e.to_string())?;
            // only cache on the browser
            #[cfg(feature = "hydrate")]
            cache.insert(include_intro, projects.clone());
            Ok(projects)
        },
    )
}

pub fn about_resource() -> Resource<Result<Vec<AboutSection>, String>> {
    Resource::new(
        || (),
        |_| async move {
            let cache = &*ABOUT_CACHE;
            if let Some(s) = cache.get(&()) {
                return Ok((*s).clone());
            }
            let sections = get_about_server().await.map_err(|e| e.to_string())?;
            #[cfg(feature = "hydrate")]
            cache.insert((), sections.clone());
            Ok(sections)
        },
    )
}

/// Inline message for a failed load.
#[component]
pub fn LoadError(error: String) -> impl IntoView {
    view! {
        <p class="text-center text-text-light" role="alert">
            "Le contenu n'a pas pu être chargé. " <span class="text-xs">{error}</span>
        </p>
    }
}
