//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the carousel:
//! - `app` - ApplicationHandler, window management, and the frame timer

pub mod app;

pub use app::App;
