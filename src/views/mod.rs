mod about;
mod chat;
mod contact;
mod dashboard;
mod footer;
mod hero;
mod projects;
mod skills;
mod testimonials;

pub use about::About;
pub use chat::ChatSection;
pub use contact::Contact;
pub use dashboard::DashboardDemo;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
pub use testimonials::Testimonials;
