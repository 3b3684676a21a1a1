use dioxus::prelude::*;
use std::time::Duration;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
    rating: u8,
    project: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Product Manager",
        company: "TechStart Inc.",
        content: "Aman delivered an exceptional AI-powered dashboard that exceeded our expectations. His attention to detail and innovative approach to user experience is outstanding.",
        rating: 5,
        project: "Analytics Dashboard",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO",
        company: "InnovateLabs",
        content: "Working with Aman was a game-changer for our startup. He built a stunning 3D portfolio website that perfectly showcased our product. Highly recommend!",
        rating: 5,
        project: "3D Portfolio Website",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Marketing Director",
        company: "GrowthCo",
        content: "Aman's expertise in modern web technologies is impressive. He created a responsive e-commerce platform that increased our conversion rate by 40%.",
        rating: 5,
        project: "E-commerce Platform",
    },
    Testimonial {
        name: "David Thompson",
        role: "Lead Developer",
        company: "CodeCraft Studios",
        content: "Aman's code quality and architectural decisions are top-notch. He seamlessly integrated AI features into our learning platform, making it truly innovative.",
        rating: 5,
        project: "Learning Management System",
    },
    Testimonial {
        name: "Lisa Wang",
        role: "Design Lead",
        company: "CreativeFlow",
        content: "Aman has an excellent eye for design and animation. The micro-interactions and smooth transitions he implemented brought our designs to life beautifully.",
        rating: 5,
        project: "Interactive Website",
    },
];

const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[component]
pub fn Testimonials() -> Element {
    let mut current = use_signal(|| 0usize);

    // Auto-play; the future is dropped with the component.
    use_future(move || async move {
        loop {
            tokio::time::sleep(AUTOPLAY_INTERVAL).await;
            current.with_mut(|i| *i = next_index(*i, TESTIMONIALS.len()));
        }
    });

    let active = &TESTIMONIALS[current() % TESTIMONIALS.len()];
    let stars = "★".repeat(active.rating as usize);

    rsx! {
        section { id: "testimonials", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "Client Testimonials" }
                p { class: "section-subtitle", "What clients say about working with me" }
            }

            div { class: "testimonial-stage",
                button {
                    class: "btn btn-outline glass carousel-arrow",
                    r#type: "button",
                    onclick: move |_| current.with_mut(|i| *i = prev_index(*i, TESTIMONIALS.len())),
                    "‹"
                }

                div { class: "card glass testimonial-card",
                    div { class: "quote-mark", "“" }
                    div { class: "rating text-primary", "{stars}" }
                    blockquote { class: "testimonial-quote", "\"{active.content}\"" }
                    div { class: "testimonial-author",
                        div { class: "avatar assistant", {active.name.chars().next().unwrap_or('?').to_string()} }
                        div {
                            p { class: "strong", "{active.name}" }
                            p { class: "text-muted", "{active.role}" }
                            p { class: "text-primary", "{active.company}" }
                        }
                    }
                    span { class: "badge badge-primary", "Project: {active.project}" }
                }

                button {
                    class: "btn btn-outline glass carousel-arrow",
                    r#type: "button",
                    onclick: move |_| current.with_mut(|i| *i = next_index(*i, TESTIMONIALS.len())),
                    "›"
                }
            }

            div { class: "carousel-dots",
                for i in 0..TESTIMONIALS.len() {
                    button {
                        class: if i == current() { "carousel-dot active" } else { "carousel-dot" },
                        r#type: "button",
                        aria_label: "Show testimonial {i + 1}",
                        onclick: move |_| current.set(i),
                    }
                }
            }

            div { class: "thumbnail-strip",
                for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
                    button {
                        class: if i == current() { "thumbnail glass active" } else { "thumbnail glass" },
                        r#type: "button",
                        onclick: move |_| current.set(i),
                        p { class: "strong", "{testimonial.name}" }
                        p { class: "text-muted", "{testimonial.company}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(0, 5), 1);
    }

    #[test]
    fn prev_wraps_around() {
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(prev_index(3, 5), 2);
    }
}
