use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tasks::DEFAULT_TASKS_FILE;

const APP_NAME: &str = "todo";

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[&str] = &["storage.path"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Task file location; relative paths resolve against the working directory
    pub path: Option<PathBuf>,
}

pub fn get_config_dir() -> Result<PathBuf> {
    // TODO_CONFIG_PATH overrides the default config directory
    if let Ok(path) = std::env::var("TODO_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }

    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .context("Could not determine config directory")
}

pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Resolve the task file: explicit override, then config, then `tasks.json`
pub fn get_tasks_file(config: &Config, overridden: Option<&Path>) -> PathBuf {
    if let Some(path) = overridden {
        return path.to_path_buf();
    }
    if let Some(path) = &config.storage.path {
        return path.clone();
    }
    PathBuf::from(DEFAULT_TASKS_FILE)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_file()?)
}

pub fn load_config_from(config_file: &Path) -> Result<Config> {
    if !config_file.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(config_file)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &get_config_file()?)
}

pub fn save_config_to(config: &Config, config_file: &Path) -> Result<()> {
    if let Some(config_dir) = config_file.parent().filter(|p| !p.exists()) {
        fs::create_dir_all(config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(config_file, contents)
        .with_context(|| format!("Failed to write config file: {}", config_file.display()))?;

    Ok(())
}

pub fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "storage.path" => config.storage.path.as_ref().map(|p| p.display().to_string()),
        _ => None,
    }
}

pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "storage.path" => config.storage.path = Some(PathBuf::from(value)),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
    Ok(())
}
