use dioxus::prelude::*;

struct Skill {
    name: &'static str,
    level: u8,
    projects: &'static [&'static str],
}

struct SkillCategory {
    title: &'static str,
    skills: &'static [Skill],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "🧠 Languages",
        skills: &[
            Skill { name: "JavaScript", level: 85, projects: &["Portfolio Site", "Todo App", "Weather App"] },
            Skill { name: "TypeScript", level: 75, projects: &["This Portfolio", "Shopping Cart"] },
            Skill { name: "HTML", level: 90, projects: &["Various Websites", "Landing Pages"] },
            Skill { name: "CSS", level: 88, projects: &["Responsive Designs", "Animation Effects"] },
        ],
    },
    SkillCategory {
        title: "⚛️ Frameworks",
        skills: &[
            Skill { name: "React", level: 85, projects: &["This Portfolio", "E-commerce Site"] },
            Skill { name: "Next.js", level: 70, projects: &["Blog Website", "Landing Pages"] },
            Skill { name: "Vue.js", level: 60, projects: &["Small Projects", "Learning Demos"] },
            Skill { name: "Express.js", level: 65, projects: &["API Backends", "Simple Servers"] },
        ],
    },
    SkillCategory {
        title: "🎨 UI & Design",
        skills: &[
            Skill { name: "Tailwind CSS", level: 80, projects: &["This Portfolio", "Responsive Sites"] },
            Skill { name: "Framer Motion", level: 70, projects: &["Portfolio Animations", "Page Transitions"] },
            Skill { name: "Three.js", level: 60, projects: &["Learning Projects", "This Portfolio"] },
            Skill { name: "Bootstrap", level: 75, projects: &["Quick Prototypes", "Client Projects"] },
        ],
    },
    SkillCategory {
        title: "🛠️ Tools & Others",
        skills: &[
            Skill { name: "Git", level: 80, projects: &["Version Control", "GitHub Projects"] },
            Skill { name: "Node.js", level: 70, projects: &["Backend APIs", "Build Tools"] },
            Skill { name: "MongoDB", level: 65, projects: &["Database Projects", "CRUD Apps"] },
            Skill { name: "AI APIs", level: 50, projects: &["This Chat Feature", "Learning Projects"] },
        ],
    },
];

const FUN_STATS: &[(&str, &str)] = &[
    ("Projects Completed", "25+"),
    ("Lines of Code", "50K+"),
    ("Coffee Cups", "1000+"),
    ("Learning Hours", "500+"),
];

#[component]
pub fn Skills() -> Element {
    let mut hovered_skill = use_signal(|| Option::<&'static str>::None);

    rsx! {
        section { id: "skills", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "Skills & Expertise" }
                p { class: "section-subtitle", "Technologies I use to bring ideas to life" }
            }

            div { class: "skills-grid",
                for category in SKILL_CATEGORIES {
                    div { class: "card glass",
                        h3 { class: "category-title", "{category.title}" }
                        div { class: "skill-list",
                            for skill in category.skills {
                                div {
                                    class: "skill",
                                    onmouseenter: move |_| hovered_skill.set(Some(skill.name)),
                                    onmouseleave: move |_| hovered_skill.set(None),
                                    div { class: "skill-label-row",
                                        span { "{skill.name}" }
                                        span { class: "text-primary skill-level", "{skill.level}%" }
                                    }
                                    div { class: "skill-bar",
                                        div {
                                            class: "skill-bar-fill",
                                            style: "width: {skill.level}%;",
                                        }
                                    }
                                    if hovered_skill() == Some(skill.name) {
                                        div { class: "skill-popover glass",
                                            p { class: "text-primary strong", "Used in:" }
                                            div { class: "badge-row",
                                                for project in skill.projects.iter().copied() {
                                                    span { class: "badge badge-secondary", "{project}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "stats-grid",
                for (label, value) in FUN_STATS.iter().copied() {
                    div { class: "card glass stat-card",
                        div { class: "stat-value text-primary", "{value}" }
                        div { class: "text-muted", "{label}" }
                    }
                }
            }
        }
    }
}
