use dioxus::prelude::*;
use time::OffsetDateTime;

struct FooterSection {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Quick Links",
        links: &[
            ("About", "#about"),
            ("Skills", "#skills"),
            ("Projects", "#projects"),
            ("Contact", "#contact"),
        ],
    },
    FooterSection {
        title: "Projects",
        links: &[
            ("AI Dashboard", "#projects"),
            ("3D Portfolio", "#projects"),
            ("E-commerce", "#projects"),
            ("Chat App", "#projects"),
        ],
    },
    FooterSection {
        title: "Connect",
        links: &[
            ("GitHub", "https://github.com"),
            ("LinkedIn", "https://linkedin.com"),
            ("Email", "mailto:chauhanaman7000@gmail.com"),
            ("Resume", "#"),
        ],
    },
];

#[component]
pub fn Footer() -> Element {
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div {
                    h3 { class: "neon-text", "NeoFolio" }
                    p { class: "text-muted",
                        "Creating futuristic web experiences with cutting-edge technologies and AI integration."
                    }
                    p { class: "text-muted made-with", "Made with ♥ by Aman Chauhan" }
                }
                for section in FOOTER_SECTIONS {
                    div {
                        h4 { class: "text-primary", "{section.title}" }
                        ul { class: "footer-links",
                            for (label, href) in section.links.iter().copied() {
                                li {
                                    a { class: "footer-link", href: href, "{label}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                div {
                    p { class: "text-muted", "© {year} Aman Chauhan. All Rights Reserved." }
                    p { class: "text-muted fine-print",
                        "Designed and developed with modern web technologies"
                    }
                }
                div { class: "footer-status",
                    a { class: "btn btn-outline glass", href: "#top", title: "Back to top", "↑" }
                    span { class: "status-dot" }
                    span { class: "text-muted", "Available for work" }
                }
            }

            div { class: "footer-credit glass",
                p { class: "text-muted fine-print", "Built with Rust, Dioxus & a sprinkle of SVG" }
            }
        }
    }
}
