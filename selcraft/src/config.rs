use anyhow::bail;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;

use crate::selector::CombinatorSpacing;

/// Environment variable the binary reads a JSON config object from.
pub const CONFIG_ENV: &str = "SELCRAFT_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

pub type Listener<T> = Box<dyn FnMut(&T) -> anyhow::Result<()> + Send + Sync>;

const CONFIG_ITEMS: &[&str] = &["combinatorSpacing", "logLevel"];

#[derive(Default)]
pub struct Config {
    pub combinator_spacing: CombinatorSpacing,
    pub log_level: LogLevel,
    combinator_spacing_listeners: Vec<Listener<CombinatorSpacing>>,
    log_level_listeners: Vec<Listener<LogLevel>>,
}

impl Config {
    /// Known keys. Each may also be given with a `selcraft.` prefix, which
    /// wins when both are present.
    pub fn items() -> &'static [&'static str] {
        CONFIG_ITEMS
    }

    pub fn listen_combinator_spacing(&mut self, listener: Listener<CombinatorSpacing>) {
        self.combinator_spacing_listeners.push(listener);
    }

    pub fn listen_log_level(&mut self, listener: Listener<LogLevel>) {
        self.log_level_listeners.push(listener);
    }

    pub fn update(&mut self, update: &Value) -> anyhow::Result<()> {
        if let Value::Object(update) = update {
            self.update_by_map(update)
        } else {
            bail!("got invalid configuration object {update}")
        }
    }

    pub fn update_by_map(&mut self, update: &Map<String, Value>) -> anyhow::Result<()> {
        if let Some(spacing) = lookup(update, "combinatorSpacing") {
            for listener in &mut self.combinator_spacing_listeners {
                listener(&spacing)?;
            }
            self.combinator_spacing = spacing;
        }
        if let Some(level) = lookup(update, "logLevel") {
            for listener in &mut self.log_level_listeners {
                listener(&level)?;
            }
            self.log_level = level;
        }
        debug!(spacing = ?self.combinator_spacing, level = ?self.log_level, "configuration updated");
        Ok(())
    }
}

fn lookup<T: DeserializeOwned>(update: &Map<String, Value>, item: &str) -> Option<T> {
    let value = update
        .get(&format!("selcraft.{item}"))
        .filter(|value| !value.is_null())
        .or_else(|| update.get(item))?;
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(item, %value, %err, "ignoring invalid configuration value");
            None
        }
    }
}

#[cfg(test)]
mod test_config {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.combinator_spacing, CombinatorSpacing::Padded);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(LevelFilter::from(config.log_level), LevelFilter::WARN);
    }

    #[test]
    fn update_notifies_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut config = Config::default();
        let sink = seen.clone();
        config.listen_combinator_spacing(Box::new(move |spacing: &CombinatorSpacing| -> anyhow::Result<()> {
            sink.lock().unwrap().push(*spacing);
            Ok(())
        }));

        config.update(&json!({ "combinatorSpacing": "collapsed" })).unwrap();
        assert_eq!(config.combinator_spacing, CombinatorSpacing::Collapsed);
        assert_eq!(*seen.lock().unwrap(), [CombinatorSpacing::Collapsed]);

        // keys that are absent leave the listener alone
        config.update(&json!({ "logLevel": "trace" })).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn prefixed_key_wins() {
        let mut config = Config::default();
        config
            .update(&json!({ "selcraft.logLevel": "debug", "logLevel": "error" }))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        config
            .update(&json!({ "selcraft.logLevel": null, "logLevel": "error" }))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut config = Config::default();
        config
            .update(&json!({ "combinatorSpacing": "sideways", "unknown": 1 }))
            .unwrap();
        assert_eq!(config.combinator_spacing, CombinatorSpacing::Padded);
        assert!(config.update(&json!(["logLevel"])).is_err());
    }

    #[test]
    fn failing_listener_keeps_old_value() {
        let mut config = Config::default();
        config.listen_log_level(Box::new(|_: &LogLevel| -> anyhow::Result<()> {
            anyhow::bail!("rejected")
        }));
        assert!(config.update(&json!({ "logLevel": "info" })).is_err());
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
