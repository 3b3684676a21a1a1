//! The canned "AI assistant": a keyword-matched static response table.
//!
//! There is no model behind this. Input is lowercased and scanned against an
//! ordered list of substring keys; the first hit wins, otherwise the default
//! response is returned.

use once_cell::sync::Lazy;
use rand::Rng;
use std::time::Duration;

pub struct ResponseTable {
    entries: Vec<(&'static str, &'static str)>,
    default: &'static str,
}

impl ResponseTable {
    /// Keys must already be lowercase; insertion order is the tie-break rule
    /// when several keys could match.
    pub fn new(entries: Vec<(&'static str, &'static str)>, default: &'static str) -> Self {
        Self { entries, default }
    }

    /// Total over all inputs: an empty string (or any other miss) yields the
    /// default response.
    pub fn respond(&self, input: &str) -> &'static str {
        let message = input.to_lowercase();
        for (key, response) in &self.entries {
            if message.contains(key) {
                return response;
            }
        }
        self.default
    }

    pub fn default_response(&self) -> &'static str {
        self.default
    }
}

pub static PORTFOLIO_TABLE: Lazy<ResponseTable> = Lazy::new(portfolio_table);

fn portfolio_table() -> ResponseTable {
    ResponseTable::new(
        vec![
            (
                "technologies",
                "Aman works with React, TypeScript, Next.js, TailwindCSS, and he's learning Three.js and AI APIs. He's been coding for about 3+ years now.",
            ),
            (
                "experience",
                "Aman has 3+ years of frontend development experience. He started with basic HTML/CSS and gradually moved to React and modern frameworks. Still learning new things every day!",
            ),
            (
                "advanced project",
                "His most recent project is this AI-themed portfolio you're looking at! He's also worked on some e-commerce sites and dashboard applications using React and Next.js.",
            ),
            (
                "different",
                "Aman likes to keep things simple but effective. He focuses on clean code, good user experience, and is always eager to learn new technologies. Currently exploring AI integration in web apps.",
            ),
            (
                "skills",
                "Aman's main skills are React, JavaScript, TypeScript, TailwindCSS, Next.js, and he's currently learning Three.js for 3D graphics and various AI APIs for smarter web applications.",
            ),
            (
                "projects",
                "Aman has built e-commerce platforms, portfolio websites, dashboard applications, and some smaller utility apps. He's always working on something new!",
            ),
            (
                "contact",
                "You can reach Aman through the contact form below, or email him directly at chauhanaman7000@gmail.com. He's always interested in new opportunities and collaborations!",
            ),
        ],
        "That's a great question! Aman is a frontend developer who enjoys building modern web applications. Feel free to ask about his skills, projects, or experience!",
    )
}

pub const WELCOME_MESSAGE: &str = "Hello! I'm Aman's AI assistant. Feel free to ask me anything about his skills, projects, or experience!";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What technologies does Aman know?",
    "What is his most recent project?",
    "How much experience does he have?",
    "What makes Aman different from other developers?",
];

/// Uniform 1-3 s pause before the reply lands, so the canned answer reads
/// like someone typing.
pub fn typing_delay() -> Duration {
    let extra = rand::thread_rng().gen_range(0..2000u64);
    Duration::from_millis(1000 + extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_table() -> ResponseTable {
        ResponseTable::new(vec![("hi", "hello!")], "?")
    }

    #[test]
    fn matches_keyword_inside_text() {
        assert_eq!(tiny_table().respond("hi there"), "hello!");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(tiny_table().respond("bye"), "?");
    }

    #[test]
    fn empty_input_returns_default() {
        assert_eq!(tiny_table().respond(""), "?");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let table = ResponseTable::new(vec![("skills", "the skills answer")], "?");
        assert_eq!(table.respond("Tell me about his SKILLS"), "the skills answer");
    }

    #[test]
    fn first_inserted_key_wins() {
        let table = ResponseTable::new(
            vec![("experience", "first"), ("skills", "second")],
            "?",
        );
        assert_eq!(table.respond("skills and experience"), "first");
    }

    #[test]
    fn default_is_not_a_matchable_key() {
        // "default" lives outside the scan, so mentioning the word does not
        // short-circuit keyword lookup.
        let table = ResponseTable::new(vec![("skills", "the skills answer")], "fallback");
        assert_eq!(table.respond("default skills"), "the skills answer");
        assert_eq!(table.respond("what is the default"), "fallback");
    }

    #[test]
    fn portfolio_table_answers_known_topics() {
        let table = portfolio_table();
        assert!(table.respond("What technologies does Aman know?").contains("React"));
        assert!(table.respond("how do I contact him").contains("contact form"));
        assert_eq!(table.respond("tell me a joke"), table.default_response());
    }

    #[test]
    fn typing_delay_stays_in_range() {
        for _ in 0..32 {
            let delay = typing_delay();
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay < Duration::from_millis(3000));
        }
    }
}
