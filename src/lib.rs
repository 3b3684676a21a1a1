pub mod assistant;
pub mod charts;
pub mod storage;
pub mod theme;
pub mod types;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
