use serde::Deserialize;
use std::fs;

/// Optional defaults loaded from a JSON file; CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_path: Option<String>,
    pub allow_contains: bool,
    pub show_only_not_found: bool,
    pub output_path: Option<String>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
