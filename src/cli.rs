//! Command-line argument parsing for the carousel
//!
//! Supports theme selection, theme listing, and initial window size.

use clap::Parser;

/// A draggable, swipeable panel carousel
#[derive(Parser, Debug)]
#[command(name = "swipe", version, about = "A draggable, swipeable panel carousel")]
pub struct CliArgs {
    /// Theme id to use for this run (overrides the saved config)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Persist the chosen theme to the config file
    #[arg(long, requires = "theme")]
    pub save_theme: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 450)]
    pub height: u32,
}
