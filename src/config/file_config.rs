use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub request_timeout_sec: Option<u64>,

    pub expected_status: Option<ExpectedStatusConfig>,
}

/// Per-check overrides of the expected HTTP status code.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ExpectedStatusConfig {
    pub health: Option<u16>,
    pub register: Option<u16>,
    pub login: Option<u16>,
    pub create_product: Option<u16>,
    pub list_products: Option<u16>,
    pub update_quantity: Option<u16>,
    // Negative cases
    pub unauthorized: Option<u16>,
    pub duplicate_registration: Option<u16>,
    pub invalid_product: Option<u16>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
