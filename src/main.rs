mod app;
mod cli;
mod error;
mod game;
mod model;
mod ui;

use cli::Cli;
use error::{GameError, Result};
use ui::ThemeKind;

fn main() {
    let cli = Cli::parse_args();

    match startup_theme(cli.theme.as_deref()) {
        Ok(theme) => {
            if let Err(e) = app::run(theme) {
                eprintln!("Error: {}", e);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Available themes:");
            for kind in ThemeKind::ALL {
                eprintln!("  {}", kind.name());
            }
        }
    }
}

fn startup_theme(name: Option<&str>) -> Result<ThemeKind> {
    match name {
        Some(name) => {
            ThemeKind::from_name(name).ok_or_else(|| GameError::UnknownTheme(name.to_string()))
        }
        None => Ok(ThemeKind::default()),
    }
}
