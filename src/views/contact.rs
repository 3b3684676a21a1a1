use dioxus::prelude::*;
use std::time::Duration;

// No backend exists; submission is a staged delay followed by a toast.
const FAKE_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
const TOAST_VISIBLE_FOR: Duration = Duration::from_secs(4);

const TOAST_TITLE: &str = "Message sent successfully! I'll get back to you soon.";
const TOAST_DETAIL: &str = "Thank you for reaching out. I typically respond within 24 hours.";

const CONTACT_INFO: &[(&str, &str, &str)] = &[
    ("Email", "chauhanaman7000@gmail.com", "mailto:chauhanaman7000@gmail.com"),
    ("Phone", "+91 XXXX-XXXXX", "tel:+91XXXXXXXXX"),
    ("Location", "India", "#"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Email", "mailto:chauhanaman7000@gmail.com"),
];

const AVAILABILITY: &[(&str, &str, bool)] = &[
    ("Freelance Projects:", "Available", true),
    ("Full-time Roles:", "Open to Discuss", false),
    ("Consultations:", "Available", true),
];

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let submitting = use_signal(|| false);
    let toast = use_signal(|| Option::<()>::None);

    let handle_submit = {
        let mut name = name;
        let mut email = email;
        let mut subject = subject;
        let mut message = message;
        let mut submitting = submitting;
        let mut toast = toast;
        move |ev: FormEvent| {
            ev.prevent_default();
            if submitting() {
                return;
            }
            submitting.set(true);
            spawn(async move {
                tokio::time::sleep(FAKE_SUBMIT_DELAY).await;

                name.set(String::new());
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());
                submitting.set(false);

                toast.set(Some(()));
                tokio::time::sleep(TOAST_VISIBLE_FOR).await;
                toast.set(None);
            });
        }
    };

    rsx! {
        section { id: "contact", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "Get In Touch" }
                p { class: "section-subtitle",
                    "Ready to start your next project? Let's create something amazing together."
                }
            }

            div { class: "contact-grid",
                div { class: "card glass",
                    h3 { "Send a Message" }
                    p { class: "text-muted",
                        "Fill out the form below and I'll get back to you as soon as possible."
                    }
                    form { class: "contact-form", onsubmit: handle_submit,
                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "name", "Name *" }
                                input {
                                    id: "name",
                                    class: "glass",
                                    required: true,
                                    placeholder: "Your full name",
                                    value: "{name}",
                                    oninput: move |ev| name.set(ev.value()),
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "email", "Email *" }
                                input {
                                    id: "email",
                                    class: "glass",
                                    r#type: "email",
                                    required: true,
                                    placeholder: "your@email.com",
                                    value: "{email}",
                                    oninput: move |ev| email.set(ev.value()),
                                }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "subject", "Subject *" }
                            input {
                                id: "subject",
                                class: "glass",
                                required: true,
                                placeholder: "What's this about?",
                                value: "{subject}",
                                oninput: move |ev| subject.set(ev.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "message", "Message *" }
                            textarea {
                                id: "message",
                                class: "glass",
                                required: true,
                                rows: "6",
                                placeholder: "Tell me about your project...",
                                value: "{message}",
                                oninput: move |ev| message.set(ev.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary neon-glow submit-btn",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spinner" }
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }
                    }
                }

                div { class: "contact-side",
                    div { class: "card glass",
                        h3 { "Contact Information" }
                        p { class: "text-muted",
                            "Prefer to reach out directly? Here's how you can contact me."
                        }
                        for (label, value, href) in CONTACT_INFO.iter().copied() {
                            div { class: "contact-row",
                                p { class: "strong", "{label}" }
                                a { class: "text-muted", href: href, "{value}" }
                            }
                        }
                    }

                    div { class: "card glass",
                        h3 { "Connect With Me" }
                        p { class: "text-muted", "Follow me on social media or check out my work." }
                        div { class: "badge-row",
                            for (label, href) in SOCIAL_LINKS.iter().copied() {
                                a {
                                    class: "btn btn-outline glass",
                                    href: href,
                                    target: "_blank",
                                    "{label}"
                                }
                            }
                        }
                    }

                    div { class: "card glass",
                        p { class: "strong", "Quick Response Guaranteed" }
                        p { class: "text-muted", "I typically respond to all inquiries within 24 hours." }
                    }

                    div { class: "card glass",
                        h3 { "Current Availability" }
                        for (label, status, open) in AVAILABILITY.iter().copied() {
                            div { class: "availability-row",
                                span { "{label}" }
                                span {
                                    class: if open { "status-open" } else { "status-maybe" },
                                    "{status}"
                                }
                            }
                        }
                    }
                }
            }

            if toast().is_some() {
                div { class: "toast glass", role: "status",
                    p { class: "strong", "{TOAST_TITLE}" }
                    p { class: "text-muted", "{TOAST_DETAIL}" }
                }
            }
        }
    }
}
