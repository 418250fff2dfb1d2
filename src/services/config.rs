use crate::cli::DEFAULT_API_BASE;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/churnlens/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Flag wins over config file wins over the built-in default.
pub fn resolve_api_base(flag: Option<&str>, file: &ConfigFile) -> String {
    flag.map(str::to_string)
        .or_else(|| file.api_base.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub fn resolve_timeout_ms(file: &ConfigFile) -> u64 {
    file.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
}
