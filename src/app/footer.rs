use leptos::prelude::*;

use super::atoms::{Text, TextVariant};
use crate::config::build_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full py-8 mt-16 border-t border-sand">
            <div class="flex flex-col md:flex-row items-center justify-between gap-4 max-w-7xl mx-auto px-6 md:px-8">
                <Text variant=TextVariant::Caption class="text-text-light">
                    {format!("© {} Portfolio. Tous droits réservés.", build_year())}
                </Text>
                <Text variant=TextVariant::Caption class="text-text-light">
                    "Conçu avec élégance et précision"
                </Text>
            </div>
        </footer>
    }
}
