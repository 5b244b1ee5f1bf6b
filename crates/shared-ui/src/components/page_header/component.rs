use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::theme_toggle::ThemeToggle;

/// Storefront header: brand, theme toggle and account buttons.
///
/// Requires a [`ThemeState`](crate::theme::ThemeState) in context.
#[component]
pub fn PageHeader(
    #[props(default = "Pet's".to_string(), into)] brand: String,
    #[props(default = "Love".to_string(), into)] accent: String,
) -> Element {
    rsx! {
        div { class: "flex flex-row items-center justify-between h-12 px-3",
            BrandTitle { brand, accent }
            ThemeToggle {}
            HeaderActions {
                Button { variant: ButtonVariant::Outlined, class: "h-8 w-24", "Login" }
                Button { class: "h-8 w-24", "Sign up" }
            }
        }
    }
}

/// Two-part brand name rendered as headings.
#[component]
pub fn BrandTitle(brand: String, accent: String) -> Element {
    rsx! {
        div { class: "flex flex-row text-2xl font-bold",
            h1 { class: "text-primary-light dark:text-primary-dark", "{brand}" }
            h1 { class: "text-amber-300", "{accent}" }
        }
    }
}

/// Container for the header's action buttons.
#[component]
pub fn HeaderActions(children: Element) -> Element {
    rsx! {
        div { class: "flex flex-row gap-2", {children} }
    }
}
