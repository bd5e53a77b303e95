//! Swipe - a draggable panel carousel
//!
//! This crate provides the core types and logic for a horizontal carousel
//! implementing the Elm Architecture pattern: pointer events arrive as
//! messages, a pure update fold maintains the carousel state, and the
//! displayed offset is handed to the platform shell for painting.

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::CarouselConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
