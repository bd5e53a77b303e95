use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use swipe::cli::CliArgs;
use swipe::config::CarouselConfig;
use swipe::theme::{list_available_themes, load_theme, Theme, ThemeSource};

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    swipe::tracing::init();

    if args.list_themes {
        for info in list_available_themes() {
            let origin = match info.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            println!("{:<16} {} ({})", info.id, info.name, origin);
        }
        return Ok(());
    }

    let mut config = CarouselConfig::load();
    if let Some(theme_id) = &args.theme {
        if args.save_theme {
            if let Err(e) = config.set_theme(theme_id) {
                tracing::warn!("Could not persist theme choice: {}", e);
                config.theme = theme_id.clone();
            }
        } else {
            config.theme = theme_id.clone();
        }
    }

    let theme = load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}. Using default.", config.theme, e);
        Theme::default()
    });

    if theme.panels.is_empty() {
        anyhow::bail!("Theme '{}' has an empty panel palette", theme.name);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(args.width, args.height, theme, config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
