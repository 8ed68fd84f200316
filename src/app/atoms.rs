use leptos::{either::EitherOf6, prelude::*};
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    H1,
    H2,
    H3,
    H4,
    #[default]
    Body,
    BodySm,
    Caption,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    P,
    Span,
}

impl TextVariant {
    pub fn class(self) -> &'static str {
        match self {
            TextVariant::H1 => "text-4xl md:text-5xl lg:text-6xl font-bold text-text-dark leading-tight",
            TextVariant::H2 => "text-3xl md:text-4xl lg:text-5xl font-bold text-text-dark leading-tight",
            TextVariant::H3 => "text-2xl md:text-3xl font-semibold text-text-dark leading-snug",
            TextVariant::H4 => "text-xl md:text-2xl font-semibold text-text-dark leading-snug",
            TextVariant::Body => "text-base md:text-lg text-text leading-relaxed",
            TextVariant::BodySm => "text-sm md:text-base text-text-light leading-relaxed",
            TextVariant::Caption => "text-xs md:text-sm text-text-light leading-normal",
            TextVariant::Label => "text-sm font-medium text-text uppercase tracking-wide",
        }
    }

    /// Headings render as their own tag, everything else as a paragraph.
    pub fn tag(self) -> TextTag {
        match self {
            TextVariant::H1 => TextTag::H1,
            TextVariant::H2 => TextTag::H2,
            TextVariant::H3 => TextTag::H3,
            TextVariant::H4 => TextTag::H4,
            _ => TextTag::P,
        }
    }
}

fn join_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn Text(
    #[prop(optional)] variant: TextVariant,
    #[prop(optional)] tag: Option<TextTag>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = join_class(variant.class(), &class);
    match tag.unwrap_or(variant.tag()) {
        TextTag::H1 => EitherOf6::A(view! { <h1 class=class>{children()}</h1> }),
        TextTag::H2 => EitherOf6::B(view! { <h2 class=class>{children()}</h2> }),
        TextTag::H3 => EitherOf6::C(view! { <h3 class=class>{children()}</h3> }),
        TextTag::H4 => EitherOf6::D(view! { <h4 class=class>{children()}</h4> }),
        TextTag::P => EitherOf6::E(view! { <p class=class>{children()}</p> }),
        TextTag::Span => EitherOf6::F(view! { <span class=class>{children()}</span> }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center font-medium transition-all duration-300 focus-visible:outline-2 focus-visible:outline-accent focus-visible:outline-offset-2";

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => {
            "bg-accent text-cream hover:bg-accent-dark active:scale-95 shadow-sm hover:shadow-md"
        }
        ButtonVariant::Secondary => {
            "bg-transparent border-2 border-accent text-accent-dark hover:bg-accent hover:text-cream active:scale-95"
        }
        ButtonVariant::Tertiary => {
            "bg-sand-light text-text hover:bg-sand active:scale-95 shadow-sm hover:shadow-md"
        }
    };
    let size = match size {
        ButtonSize::Sm => "px-4 py-2 text-sm rounded-md",
        ButtonSize::Md => "px-6 py-3 text-base rounded-lg",
        ButtonSize::Lg => "px-8 py-4 text-lg rounded-xl",
    };
    format!("{BUTTON_BASE} {variant} {size}")
}

/// Router link styled as a button.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href attr:class=button_class(variant, size)>
            {children()}
        </A>
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] label: Option<String>,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size)
            aria-label=label
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// External link with the sliding arrow used on cards.
#[component]
pub fn ArrowLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=join_class("inline-flex items-center gap-2 font-medium group/link", &class)
        >
            <span class="relative">
                {label}
                <span class="absolute bottom-0 left-0 w-0 h-[2px] bg-current transition-all duration-300 group-hover/link:w-full" />
            </span>
            <span class="transition-transform duration-300 group-hover/link:translate-x-1">"→"</span>
        </a>
    }
}
