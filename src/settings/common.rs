use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use strum_macros::{Display, EnumString};

use crate::utils::SettingsError;

/// How the prober learns the neighbor behind an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ProbeMode {
    /// Walk through the exit and straight back.
    #[default]
    RoundTrip,
    /// Ask the world who is behind the exit, without moving.
    Peek,
}

/// Run configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Map to load. When absent a maze is generated.
    pub map_file: Option<PathBuf>,
    pub probe_mode: ProbeMode,
    pub maze_width: u32,
    pub maze_height: u32,
    pub maze_extra_links: u32,
    pub maze_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_file: None,
            probe_mode: ProbeMode::RoundTrip,
            maze_width: 10,
            maze_height: 10,
            maze_extra_links: 5,
            maze_seed: 42,
        }
    }
}

impl Settings {
    /// Reads `MAP_FILE`, `PROBE_MODE`, `MAZE_WIDTH`, `MAZE_HEIGHT`,
    /// `MAZE_EXTRA_LINKS` and `MAZE_SEED`, after loading a `.env` file if one
    /// is present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Settings {
            map_file: non_empty("MAP_FILE").map(PathBuf::from),
            probe_mode: parse_or(non_empty("PROBE_MODE"), "PROBE_MODE", defaults.probe_mode)?,
            maze_width: parse_or(non_empty("MAZE_WIDTH"), "MAZE_WIDTH", defaults.maze_width)?,
            maze_height: parse_or(non_empty("MAZE_HEIGHT"), "MAZE_HEIGHT", defaults.maze_height)?,
            maze_extra_links: parse_or(
                non_empty("MAZE_EXTRA_LINKS"),
                "MAZE_EXTRA_LINKS",
                defaults.maze_extra_links,
            )?,
            maze_seed: parse_or(non_empty("MAZE_SEED"), "MAZE_SEED", defaults.maze_seed)?,
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: ToString,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|e| SettingsError {
            key: key.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}

// Initialised to the defaults on first use
static ACTIVE_SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::default()));

pub fn get_settings() -> Settings {
    match ACTIVE_SETTINGS.read() {
        Ok(settings) => settings.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_settings(new_settings: Settings) {
    match ACTIVE_SETTINGS.write() {
        Ok(mut settings) => *settings = new_settings,
        Err(poisoned) => *poisoned.into_inner() = new_settings,
    }
}
