use dioxus::prelude::*;

#[derive(PartialEq)]
struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    featured: bool,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Dashboard",
        category: "Dashboard",
        description: "Modern analytics dashboard with AI-driven insights and real-time data visualization.",
        tech: &["React", "TypeScript", "Chart.js", "AI API"],
        featured: true,
    },
    Project {
        title: "3D Portfolio Website",
        category: "Portfolio",
        description: "Interactive 3D portfolio showcasing creative projects with immersive user experience.",
        tech: &["Three.js", "React", "Framer Motion", "GSAP"],
        featured: true,
    },
    Project {
        title: "E-commerce Platform",
        category: "E-commerce",
        description: "Full-featured online store with advanced filtering, cart management, and payment integration.",
        tech: &["Next.js", "Stripe", "PostgreSQL", "Tailwind"],
        featured: false,
    },
    Project {
        title: "Real-time Chat App",
        category: "Social",
        description: "Modern messaging application with real-time communication and file sharing capabilities.",
        tech: &["React", "Socket.io", "Node.js", "MongoDB"],
        featured: false,
    },
    Project {
        title: "Productivity Tool",
        category: "Productivity",
        description: "Task management application with AI-powered suggestions and team collaboration features.",
        tech: &["Vue.js", "Express", "Redis", "AI API"],
        featured: false,
    },
    Project {
        title: "Learning Management System",
        category: "Education",
        description: "Interactive learning platform with video streaming, quizzes, and progress tracking.",
        tech: &["React", "Firebase", "Video.js", "Material-UI"],
        featured: true,
    },
];

const CATEGORIES: &[&str] = &[
    "All",
    "Dashboard",
    "Portfolio",
    "E-commerce",
    "Social",
    "Productivity",
    "Education",
];

fn filtered_projects(filter: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| filter == "All" || project.category == filter)
        .collect()
}

#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(|| "All");
    let visible = filtered_projects(filter());

    rsx! {
        section { id: "projects", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "Featured Projects" }
                p { class: "section-subtitle",
                    "Showcasing my best work in web development and AI integration"
                }
            }

            div { class: "filter-row",
                for category in CATEGORIES.iter().copied() {
                    button {
                        class: if filter() == category { "btn btn-primary neon-glow" } else { "btn btn-outline glass" },
                        r#type: "button",
                        onclick: move |_| filter.set(category),
                        "{category}"
                    }
                }
            }

            div { class: "projects-grid",
                for project in visible {
                    div {
                        class: if project.featured { "card glass project-card featured" } else { "card glass project-card" },
                        div { class: "project-card-header",
                            h3 { "{project.title}" }
                            span { class: "badge badge-secondary", "{project.category}" }
                            if project.featured {
                                span { class: "badge badge-primary", "Featured" }
                            }
                        }
                        p { class: "text-muted", "{project.description}" }
                        div { class: "badge-row",
                            for tech in project.tech.iter().copied() {
                                span { class: "badge badge-outline", "{tech}" }
                            }
                        }
                        div { class: "project-actions",
                            a { class: "btn btn-outline", href: "#", "Live Demo" }
                            a { class: "btn btn-ghost", href: "#", "Code" }
                        }
                    }
                }
            }

            div { class: "card glass cta-card",
                h3 { "Want to see more?" }
                p { class: "text-muted",
                    "Check out my GitHub for more projects and open source contributions."
                }
                a {
                    class: "btn btn-primary neon-glow",
                    href: "https://github.com",
                    target: "_blank",
                    "View All Projects"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_keeps_everything() {
        assert_eq!(filtered_projects("All").len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_narrows() {
        let dashboards = filtered_projects("Dashboard");
        assert_eq!(dashboards.len(), 1);
        assert_eq!(dashboards[0].title, "AI-Powered Dashboard");
    }

    #[test]
    fn every_category_button_has_projects_or_is_all() {
        for category in CATEGORIES.iter().skip(1) {
            assert!(
                !filtered_projects(category).is_empty(),
                "empty category: {category}"
            );
        }
    }
}
