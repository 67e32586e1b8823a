use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::logic::ChartLayout;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub sales: SalesConfig,
    #[serde(default)]
    pub chart: ChartLayout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON album list to serve instead of the built-in fixture
    pub fixture_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesConfig {
    /// Used by `/sales/chart` when the request names no source. Unlike
    /// request-supplied sources this may be a local file path.
    pub default_source: Option<String>,
    /// Hosts request-supplied sales URLs may target; empty allows any host
    #[serde(default)]
    pub allowed_hosts: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            default_source: None,
            allowed_hosts: Vec::new(),
            timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and
    /// `ALBUMS_`-prefixed environment variables (`ALBUMS_SERVER__PORT=8080`,
    /// `ALBUMS_SALES__ALLOWED_HOSTS=a.example,b.example`)
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        config = config.add_source(config::File::with_name("config").required(false));

        config = config.add_source(
            config::Environment::with_prefix("ALBUMS")
                .separator("__")
                .prefix_separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("sales.allowed_hosts"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        self.chart.validate()?;
        Ok(())
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn sales_timeout(&self) -> Duration {
        Duration::from_secs(self.sales.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:3000");
        assert_eq!(config.sales_timeout(), Duration::from_secs(10));
        assert!(config.catalog.fixture_path.is_none());
        assert_eq!(config.chart, ChartLayout::default());
    }

    #[test]
    fn test_defaults_survive_config_round_trip() {
        let built = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap();
        let config: AppConfig = built.try_deserialize().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sales.timeout_secs, 10);
        assert!(config.sales.allowed_hosts.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_chart_layout_rejected() {
        let mut config = AppConfig::default();
        config.chart.band_padding = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.chart.margin_left = 2000.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("no plotting area"));
    }
}
