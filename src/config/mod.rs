mod file_config;

pub use file_config::{ExpectedStatusConfig, FileConfig};

use anyhow::{anyhow, bail, Context, Result};
use reqwest::{StatusCode, Url};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// CLI arguments that can be used for config resolution.
/// Values set here take precedence over the TOML file.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub request_timeout_sec: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` keeps the HTTP client's defaults.
    pub request_timeout: Option<Duration>,
    pub expected: ExpectedStatuses,
}

/// Status code each check must observe to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatuses {
    pub health: StatusCode,
    pub register: StatusCode,
    pub login: StatusCode,
    pub create_product: StatusCode,
    pub list_products: StatusCode,
    pub update_quantity: StatusCode,
    pub unauthorized: StatusCode,
    pub duplicate_registration: StatusCode,
    pub invalid_product: StatusCode,
}

impl Default for ExpectedStatuses {
    fn default() -> Self {
        Self {
            health: StatusCode::OK,
            register: StatusCode::CREATED,
            login: StatusCode::OK,
            create_product: StatusCode::CREATED,
            list_products: StatusCode::OK,
            update_quantity: StatusCode::OK,
            unauthorized: StatusCode::UNAUTHORIZED,
            duplicate_registration: StatusCode::CONFLICT,
            invalid_product: StatusCode::BAD_REQUEST,
        }
    }
}

impl ExpectedStatuses {
    fn with_overrides(file: ExpectedStatusConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            health: status_or(file.health, defaults.health, "health")?,
            register: status_or(file.register, defaults.register, "register")?,
            login: status_or(file.login, defaults.login, "login")?,
            create_product: status_or(
                file.create_product,
                defaults.create_product,
                "create_product",
            )?,
            list_products: status_or(file.list_products, defaults.list_products, "list_products")?,
            update_quantity: status_or(
                file.update_quantity,
                defaults.update_quantity,
                "update_quantity",
            )?,
            unauthorized: status_or(file.unauthorized, defaults.unauthorized, "unauthorized")?,
            duplicate_registration: status_or(
                file.duplicate_registration,
                defaults.duplicate_registration,
                "duplicate_registration",
            )?,
            invalid_product: status_or(
                file.invalid_product,
                defaults.invalid_product,
                "invalid_product",
            )?,
        })
    }
}

fn status_or(value: Option<u16>, default: StatusCode, key: &str) -> Result<StatusCode> {
    match value {
        None => Ok(default),
        Some(code) => StatusCode::from_u16(code)
            .with_context(|| format!("Invalid status code for expected_status.{}: {}", key, code)),
    }
}

impl RunnerConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// Explicit CLI values override the file, the file overrides defaults.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let raw_base_url = cli
            .base_url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&raw_base_url)?;

        let request_timeout = match cli.request_timeout_sec.or(file.request_timeout_sec) {
            Some(0) => bail!("request_timeout_sec must be greater than zero"),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let expected = ExpectedStatuses::with_overrides(file.expected_status.unwrap_or_default())?;

        Ok(Self {
            base_url,
            request_timeout,
            expected,
        })
    }

    /// Configuration with defaults for everything except the base URL.
    pub fn for_base_url(base_url: &str) -> Result<Self> {
        Self::resolve(
            &CliConfig {
                base_url: Some(base_url.to_string()),
                ..Default::default()
            },
            None,
        )
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid base URL {:?}: {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported base URL scheme {:?}, expected http or https", other),
    }
    if url.host_str().is_none() {
        bail!("Base URL has no host: {:?}", raw);
    }
    Ok(raw.trim_end_matches('/').to_string())
}
