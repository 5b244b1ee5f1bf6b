use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;
use dioxus_primitives::switch as prim;

use crate::theme::{use_theme, use_theme_toggle};

/// Switch styled for the light/dark toggle.
#[component]
fn ThemeSwitch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "theme-switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
fn ThemeSwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "theme-switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Dark-mode toggle bound to the [`ThemeState`](crate::theme::ThemeState) in context.
#[component]
pub fn ThemeToggle() -> Element {
    let state = use_theme();
    let toggle = use_theme_toggle();
    let is_dark = state.mode().is_dark();

    rsx! {
        div {
            class: "theme-toggle",
            "data-mode": if is_dark { "dark" } else { "light" },
            span { class: "theme-toggle-icon",
                if is_dark {
                    Icon { width: 14, height: 14, icon: FaMoon }
                } else {
                    Icon { width: 14, height: 14, icon: FaSun }
                }
            }
            ThemeSwitch {
                checked: Some(is_dark),
                title: "Toggle dark mode",
                on_checked_change: toggle,
                ThemeSwitchThumb {}
            }
        }
    }
}
