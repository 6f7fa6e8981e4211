use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig, DEFAULT_WAR_HIT_LIMIT};

use crate::config::validation::validate_warhit_limits;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_warhit_limit: usize,
    pub max_warhit_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8040".to_string(),
            api_token: None,
            clickhouse_url: "http://127.0.0.1:8123".to_string(),
            clickhouse_database: "warlog".to_string(),
            clickhouse_user: None,
            clickhouse_password: None,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
            default_warhit_limit: DEFAULT_WAR_HIT_LIMIT,
            max_warhit_limit: 1000,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("WARLOG_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        self.api_token = non_blank(self.api_token.take());
        self.clickhouse_user = non_blank(self.clickhouse_user.take());
        self.clickhouse_password = non_blank(self.clickhouse_password.take());
        self.clickhouse_url = self.clickhouse_url.trim().trim_end_matches('/').to_string();
        self.clickhouse_database = self.clickhouse_database.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.clickhouse_url.is_empty() {
            return Err(anyhow!("clickhouse_url must not be empty"));
        }
        if self.clickhouse_database.is_empty() {
            return Err(anyhow!("clickhouse_database must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        validate_warhit_limits(self.default_warhit_limit, self.max_warhit_limit)
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            default_warhit_limit: self.default_warhit_limit,
            max_warhit_limit: self.max_warhit_limit,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            clickhouse_url: self.clickhouse_url.clone(),
            clickhouse_database: self.clickhouse_database.clone(),
            clickhouse_user: self.clickhouse_user.clone(),
            clickhouse_password: self.clickhouse_password.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("WARLOG_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("WARLOG_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("WARLOG_CLICKHOUSE_URL") {
            self.clickhouse_url = value;
        }
        if let Ok(value) = env::var("WARLOG_CLICKHOUSE_DATABASE") {
            self.clickhouse_database = value;
        }
        if let Ok(value) = env::var("WARLOG_CLICKHOUSE_USER") {
            self.clickhouse_user = Some(value);
        }
        if let Ok(value) = env::var("WARLOG_CLICKHOUSE_PASSWORD") {
            self.clickhouse_password = Some(value);
        }
        if let Ok(value) = env::var("WARLOG_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("WARLOG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("WARLOG_DEFAULT_WARHIT_LIMIT") {
            self.default_warhit_limit = value.parse().unwrap_or(self.default_warhit_limit);
        }
        if let Ok(value) = env::var("WARLOG_MAX_WARHIT_LIMIT") {
            self.max_warhit_limit = value.parse().unwrap_or(self.max_warhit_limit);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.default_warhit_limit, 50);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
bind_addr = "0.0.0.0:9000"
max_warhit_limit = 200
"#,
        )
        .expect("parse");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.max_warhit_limit, 200);
        assert_eq!(config.clickhouse_database, "warlog");
    }

    #[test]
    fn normalize_clears_blank_secrets() {
        let mut config = AppConfig {
            api_token: Some("   ".to_string()),
            clickhouse_user: Some(String::new()),
            clickhouse_password: Some("secret".to_string()),
            clickhouse_url: " http://db:8123/ ".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.api_token.is_none());
        assert!(config.clickhouse_user.is_none());
        assert_eq!(config.clickhouse_password.as_deref(), Some("secret"));
        assert_eq!(config.clickhouse_url, "http://db:8123");
    }

    #[test]
    fn validate_rejects_bad_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("reject");
        assert!(err.to_string().contains("bind_addr"));
    }

    #[test]
    fn validate_rejects_default_limit_above_max() {
        let config = AppConfig {
            default_warhit_limit: 60,
            max_warhit_limit: 50,
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("reject");
        assert!(err.to_string().contains("default_warhit_limit"));
    }

    #[test]
    fn runtime_config_carries_limits() {
        let runtime = AppConfig::default().to_runtime_config();
        assert_eq!(runtime.default_warhit_limit, 50);
        assert_eq!(runtime.max_warhit_limit, 1000);
    }
}
