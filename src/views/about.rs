use dioxus::prelude::*;

struct TimelineEntry {
    year: &'static str,
    title: &'static str,
    description: &'static str,
    marker: &'static str,
}

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2020",
        title: "Started Coding Journey",
        description: "Got curious about websites and started with HTML/CSS tutorials",
        marker: "</>",
    },
    TimelineEntry {
        year: "2021",
        title: "First React Project",
        description: "Built my first single page app - was mind blown by components!",
        marker: "🚀",
    },
    TimelineEntry {
        year: "2022",
        title: "Learned Modern Tools",
        description: "Started using TypeScript and Next.js for bigger projects",
        marker: "⚡",
    },
    TimelineEntry {
        year: "2023",
        title: "AI Integration",
        description: "Got into AI APIs and started building smarter web apps",
        marker: "🧠",
    },
];

const PROFILE_DETAILS: &[(&str, &str)] = &[
    ("Location:", "India"),
    ("Experience:", "3+ Years"),
    ("Favorite Tech:", "React & Next.js"),
    ("Currently Learning:", "Three.js & AI APIs"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "About Me" }
                p { class: "section-subtitle",
                    "Passionate frontend developer with a love for creating immersive digital experiences"
                }
            }

            div { class: "about-grid",
                div { class: "card glass",
                    div { class: "profile-header",
                        div { class: "profile-avatar", "AC" }
                        div {
                            h3 { class: "profile-name text-primary", "Aman Chauhan" }
                            p { class: "text-muted", "Frontend Developer & AI Enthusiast" }
                        }
                    }
                    p { class: "profile-bio",
                        "Hey there! I'm Aman, a frontend developer who really enjoys building cool stuff on the web. \
                         Started out just being curious about how websites worked, and now I'm into creating modern \
                         interfaces with some AI features thrown in. Always learning something new!"
                    }
                    div { class: "profile-details",
                        for (label, value) in PROFILE_DETAILS.iter().copied() {
                            div {
                                span { class: "text-primary strong", "{label}" }
                                p { class: "text-muted", "{value}" }
                            }
                        }
                    }
                }

                div { class: "timeline",
                    h3 { class: "timeline-title", "My Journey" }
                    for entry in TIMELINE {
                        div { class: "timeline-entry",
                            div { class: "timeline-marker", "{entry.marker}" }
                            div { class: "timeline-body",
                                div { class: "timeline-year-row",
                                    span { class: "text-primary strong", "{entry.year}" }
                                    div { class: "timeline-rule" }
                                }
                                h4 { "{entry.title}" }
                                p { class: "text-muted", "{entry.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
