use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub corpus_path: Option<PathBuf>,
    pub require_complete_details: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus_path: None,
            require_complete_details: false,
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    corpus_path: Option<PathBuf>,
    require_complete_details: Option<bool>,
    log_level: Option<String>,
}

/// Defaults, then `site.toml` in the working directory, then `APP__*` env vars.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    let path = Path::new(SETTINGS_FILE);
    if path.exists() {
        apply_file(&mut settings, path)?;
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("invalid settings file '{}'", path.display()))?;

    if let Some(v) = file_cfg.corpus_path {
        settings.corpus_path = Some(v);
    }
    if let Some(v) = file_cfg.require_complete_details {
        settings.require_complete_details = v;
    }
    if let Some(v) = file_cfg.log_level {
        settings.log_level = v;
    }
    Ok(())
}

pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__CORPUS_PATH") {
        settings.corpus_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("APP__REQUIRE_COMPLETE_DETAILS") {
        if let Some(parsed) = parse_flag(&v) {
            settings.require_complete_details = parsed;
        }
    }
    if let Some(v) = lookup("APP__LOG_LEVEL") {
        settings.log_level = v;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
