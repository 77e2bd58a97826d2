use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_POLL_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Base URL of the mess server (e.g. "https://mess.example.edu")
    #[serde(default)]
    pub server: Option<String>,

    /// Poll cadence override in seconds
    #[serde(default)]
    pub poll_secs: Option<u64>,
}

impl Config {
    pub fn poll_secs(&self) -> u64 {
        self.poll_secs.unwrap_or(DEFAULT_POLL_SECS)
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("MESSMATE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("messmate").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("messmate").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "messmate", "messmate")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("messmate"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("messmate"));
    }
    directories::ProjectDirs::from("io", "messmate", "messmate")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_file_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("messmate.log"))
}
