use crate::storage::default_storage;
use crate::theme::{ThemeStore, theme_definition};
use crate::types::ThemeMode;
use crate::views::{
    About, ChatSection, Contact, DashboardDemo, Footer, Hero, Projects, Skills, Testimonials,
};
use dioxus::prelude::*;

const NEOFOLIO_CSS: Asset = asset!("/assets/neofolio.css");

const NAV_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("AI Chat", "#ai-chat"),
    ("Contact", "#contact"),
];

#[component]
pub fn App() -> Element {
    let theme = use_signal(|| ThemeStore::load(default_storage()));
    let root_class = theme_definition(theme().mode()).root_class;

    rsx! {
        ThemeStyles { theme }
        div { id: "top", class: "site-root {root_class}",
            Navbar { theme }
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                ChatSection {}
                DashboardDemo {}
                Testimonials {}
                Contact {}
            }
            Footer {}
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeStore>) -> Element {
    let definition = theme_definition(theme().mode());
    rsx! {
        document::Link { rel: "stylesheet", href: NEOFOLIO_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn Navbar(theme: Signal<ThemeStore>) -> Element {
    let mut theme = theme;
    let toggle_label = match theme().mode() {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    };
    rsx! {
        header { class: "navbar",
            div { class: "navbar-content",
                a { class: "brand neon-text", href: "#top", "NeoFolio" }
                nav { class: "nav-links",
                    for (label, href) in NAV_LINKS.iter().copied() {
                        a { class: "nav-link", href: href, "{label}" }
                    }
                }
                button {
                    class: "btn btn-ghost theme-toggle",
                    r#type: "button",
                    title: "Toggle theme",
                    onclick: move |_| {
                        theme.with_mut(|store| {
                            store.toggle();
                        });
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}
