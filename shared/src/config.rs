use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Runtime configuration for the dashboard client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Base URL of the API fronting the identity, linking and account services
    pub api_base_url: String,
    pub currency_symbol: String,
    pub currency_decimals: usize,
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    /// Also forward client log lines to `{api_base_url}/api/logs`
    pub remote_logging: bool,
    /// Where a finished sign-in or bank link lands
    pub root_route: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            remote_logging: false,
            root_route: "/".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parses a (possibly partial) JSON config; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("apiBaseUrl must not be empty".to_string()));
        }
        if self.counter_frame_ms == 0 {
            return Err(ConfigError::Invalid("counterFrameMs must be positive".to_string()));
        }
        if self.currency_decimals > 6 {
            return Err(ConfigError::Invalid(format!(
                "currencyDecimals must be at most 6, got {}",
                self.currency_decimals
            )));
        }
        if !self.root_route.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "rootRoute must start with '/', got {:?}",
                self.root_route
            )));
        }
        Ok(())
    }

    /// `api_base_url` joined with `path`, without doubled slashes
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
