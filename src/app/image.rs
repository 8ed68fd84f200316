use leptos::{either::Either, html, prelude::*};

/// Shown instead of a project image that is missing or fails to load.
#[component]
fn Placeholder(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div
            role="img"
            aria-label=title
            class="absolute inset-0 flex items-center justify-center bg-sand-light text-sand-dark"
        >
            <svg
                width="64"
                height="64"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <rect x="3" y="3" width="18" height="18" rx="2" />
                <circle cx="8.5" cy="8.5" r="1.5" />
                <polyline points="21 15 16 10 5 21" />
            </svg>
        </div>
    }
}

/// Cover image filling its (relatively positioned) parent.
#[component]
pub fn ProjectImage(
    src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(into, optional)] position: Option<String>,
    #[prop(into, optional)] class: String,
    #[prop(optional)] eager: bool,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let img = NodeRef::<html::Img>::new();

    // an image that failed before hydration never fires `error` for us
    Effect::new(move |_| {
        if let Some(img) = img.get() {
            if load_failed(img.complete(), img.natural_width()) {
                set_failed(true);
            }
        }
    });

    let style = format!(
        "object-fit: cover; object-position: {};",
        position.as_deref().unwrap_or("center")
    );

    move || match src.clone() {
        Some(src) if !failed.get() => Either::Left(view! {
            <img
                node_ref=img
                src=src
                alt=alt.clone()
                class=format!("absolute inset-0 h-full w-full {class}")
                style=style.clone()
                loading=if eager { "eager" } else { "lazy" }
                on:error=move |_| set_failed(true)
            />
        }),
        _ => Either::Right(view! { <Placeholder title=alt.clone() /> }),
    }
}

/// A finished image with no intrinsic size is a broken one.
fn load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}
