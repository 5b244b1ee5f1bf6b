use dioxus::prelude::*;
use shared_ui::theme::{use_theme_provider, DarkModeSync};
use shared_ui::PageHeader;

mod config;

const TAILWIND: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = config::site_config();

    // Seed dark mode from config; the header toggle owns it afterwards
    use_theme_provider(site.theme.mode());

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND }
        DarkModeSync {}
        PageHeader {
            brand: site.brand.name.clone(),
            accent: site.brand.accent.clone(),
        }
    }
}
