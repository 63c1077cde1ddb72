use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use selcraft::config::{Config, LogLevel, CONFIG_ENV};
use selcraft::logging::{set_level, tracing_init};
use selcraft::recipe::Recipe;
use tracing::{info, warn};

// usage: selcraft [RECIPE_FILE]   (reads stdin without a file)
fn main() -> anyhow::Result<()> {
    let level_handle = tracing_init(LogLevel::default().into());

    let mut config = Config::default();
    config.listen_log_level(Box::new(move |level: &LogLevel| -> anyhow::Result<()> {
        set_level(&level_handle, *level)
    }));
    if let Ok(raw) = std::env::var(CONFIG_ENV) {
        let applied = serde_json::from_str(&raw)
            .map_err(anyhow::Error::from)
            .and_then(|value| config.update(&value));
        if let Err(err) = applied {
            warn!("ignoring {CONFIG_ENV}: {err:#}");
        }
    }

    let text = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read recipe `{}`", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("could not read recipe from stdin")?;
            text
        }
    };

    let selector = Recipe::from_json(&text)?.build_with(config.combinator_spacing)?;
    info!(specificity = %selector.specificity(), "built selector");
    println!("{selector}");
    Ok(())
}
