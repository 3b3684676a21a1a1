use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARTICLE_COUNT: usize = 80;
const PARTICLE_SEED: u64 = 0x4e454f_464f4c49; // ascii "NEOFOLI"
const PARTICLE_VIEWBOX: f64 = 100.0;

// Tiny placeholder CV so the download button works without a real file.
const CV_DATA_URL: &str = "data:application/pdf;base64,JVBERi0xLjQKJdPr6eEKMSAwIG9iago8PAovVHlwZSAvQ2F0YWxvZwovUGFnZXMgMiAwIFIKPj4KZW5kb2JqCjIgMCBvYmoKPDwKL1R5cGUgL1BhZ2VzCi9LaWRzIFsgMyAwIFIgXQovQ291bnQgMQo+PgplbmRvYmoKMyAwIG9iago8PAovVHlwZSAvUGFnZQovUGFyZW50IDIgMCBSCi9NZWRpYUJveCBbIDAgMCA2MTIgNzkyIF0KL0NvbnRlbnRzIDQgMCBSCj4+CmVuZG9iago0IDAgb2JqCjw8Ci9MZW5ndGggNDQKPj4Kc3RyZWFtCkJUCi9GMSAxMiBUZgozMCA3MDAgVGQKKEFtYW4gQ2hhdWhhbiAtIERldmVsb3BlciBDVikgVGoKRVQKZW5kc3RyZWFtCmVuZG9iago1IDAgb2JqCjw8Ci9UeXBlIC9Gb250Ci9TdWJ0eXBlIC9UeXBlMQovQmFzZUZvbnQgL0hlbHZldGljYQo+PgplbmRvYmoKeHJlZgo2IDAgb2JqCjw8Ci9TaXplIDYKL1Jvb3QgMSAwIFIKPj4Kc3RhcnR4cmVmCjIzNwolJUVPRgo=";

#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    radius: f64,
    delay_ms: u32,
}

/// Deterministic scatter for the decorative backdrop; the drift itself is a
/// CSS animation, so no per-frame work happens here.
fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0.0..PARTICLE_VIEWBOX),
            y: rng.gen_range(0.0..PARTICLE_VIEWBOX),
            radius: rng.gen_range(0.15..0.55),
            delay_ms: rng.gen_range(0..6000),
        })
        .collect()
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero gradient-bg",
            ParticleBackground {}
            div { class: "section-content hero-content",
                h1 { class: "hero-title neon-text",
                    "Hey, I'm "
                    span { class: "text-primary", "Aman Chauhan" }
                }
                p { class: "hero-subtitle",
                    "A Frontend Developer who builds "
                    span { class: "text-primary strong", "futuristic UIs" }
                    " and "
                    span { class: "text-primary strong", "AI-powered experiences" }
                }
                div { class: "hero-actions",
                    a { class: "btn btn-primary neon-glow", href: "#contact", "Hire Me" }
                    a { class: "btn btn-outline glass", href: "#projects", "View Projects" }
                    a {
                        class: "btn btn-ghost glass",
                        href: CV_DATA_URL,
                        download: "Aman_Chauhan_CV.pdf",
                        "Download CV"
                    }
                }
                a { class: "scroll-hint floating", href: "#projects", "▼" }
            }
        }
    }
}

#[component]
fn ParticleBackground() -> Element {
    let particles = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
    rsx! {
        svg {
            class: "hero-canvas",
            view_box: "0 0 100 100",
            preserve_aspect_ratio: "xMidYMid slice",
            "aria-hidden": "true",
            for particle in particles {
                circle {
                    class: "particle",
                    cx: "{particle.x:.2}",
                    cy: "{particle.y:.2}",
                    r: "{particle.radius:.2}",
                    style: "animation-delay: {particle.delay_ms}ms;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic() {
        assert_eq!(particle_field(20, 7), particle_field(20, 7));
    }

    #[test]
    fn scatter_stays_inside_viewbox() {
        for particle in particle_field(PARTICLE_COUNT, PARTICLE_SEED) {
            assert!((0.0..PARTICLE_VIEWBOX).contains(&particle.x));
            assert!((0.0..PARTICLE_VIEWBOX).contains(&particle.y));
        }
    }
}
