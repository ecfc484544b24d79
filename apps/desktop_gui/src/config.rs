use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use summit_core::Timings;

pub const DEFAULT_CONFIG_FILE: &str = "summit.toml";
const ENV_PREFIX: &str = "SUMMIT__";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub search_debounce_ms: u64,
    pub announcement_ttl_ms: u64,
    pub selection_announcement_ttl_ms: u64,
    pub export_dir: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            announcement_ttl_ms: 3000,
            selection_announcement_ttl_ms: 1000,
            export_dir: None,
            window_width: 1180.0,
            window_height: 820.0,
        }
    }
}

impl Settings {
    pub fn timings(&self) -> Timings {
        Timings {
            search_delay: Duration::from_millis(self.search_debounce_ms),
            result_announcement_ttl: Duration::from_millis(self.announcement_ttl_ms),
            selection_announcement_ttl: Duration::from_millis(self.selection_announcement_ttl_ms),
        }
    }

    /// Where the save dialog opens: the configured directory, else the user's downloads.
    pub fn export_start_dir(&self) -> Option<PathBuf> {
        self.export_dir.clone().or_else(dirs::download_dir)
    }

    fn apply(&mut self, key: &str, value: &str) {
        let value = value.trim();
        match key {
            "search_debounce_ms" => set_parsed(&mut self.search_debounce_ms, key, value),
            "announcement_ttl_ms" => set_parsed(&mut self.announcement_ttl_ms, key, value),
            "selection_announcement_ttl_ms" => {
                set_parsed(&mut self.selection_announcement_ttl_ms, key, value)
            }
            "window_width" => set_parsed(&mut self.window_width, key, value),
            "window_height" => set_parsed(&mut self.window_height, key, value),
            "export_dir" => {
                self.export_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => tracing::warn!(key = other, "unknown setting ignored"),
        }
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, key: &str, value: &str) {
    match value.parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(_) => tracing::warn!(key, value, "malformed setting ignored"),
    }
}

/// Defaults, then the config file, then `SUMMIT__*` environment variables.
///
/// An explicitly requested file that cannot be read is an error; the implicit
/// `summit.toml` is optional.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_from(explicit, std::env::vars())
}

fn load_settings_from(
    explicit: Option<&Path>,
    env: impl IntoIterator<Item = (String, String)>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let raw = match explicit {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };

    if let Some(raw) = raw {
        let table = toml::from_str::<HashMap<String, toml::Value>>(&raw)
            .context("config file is not valid TOML")?;
        for (key, value) in table {
            match value {
                toml::Value::String(s) => settings.apply(&key, &s),
                toml::Value::Integer(i) => settings.apply(&key, &i.to_string()),
                toml::Value::Float(f) => settings.apply(&key, &f.to_string()),
                other => tracing::warn!(key, value = %other, "unsupported setting type ignored"),
            }
        }
    }

    for (name, value) in env {
        if let Some(key) = name.strip_prefix(ENV_PREFIX) {
            settings.apply(&key.to_ascii_lowercase(), &value);
        }
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
