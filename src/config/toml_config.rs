use crate::config::{
    DEFAULT_AGO, DEFAULT_EVALUATION_MODE, DEFAULT_EVALUATION_STATUS, DEFAULT_EVENT_TYPE,
    DEFAULT_LIMIT, DEFAULT_MAX_MAGNITUDE, DEFAULT_MIN_MAGNITUDE, DEFAULT_SERVICE, DEFAULT_SINCE,
};
use crate::core::ConfigProvider;
use crate::utils::error::{QuakeError, Result};
use crate::utils::validation::{validate_search_options, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Query options loaded from a TOML file.
///
/// ```toml
/// [service]
/// host = "wfs.geonet.org.nz"
/// limit = 100
///
/// [filters]
/// minmag = 3.5
/// since = "1h"
/// type = "earthquake"
/// ```
///
/// Every key is optional and falls back to the command line default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub filters: FilterConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub host: String,
    pub limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVICE.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub minmag: f64,
    pub maxmag: f64,
    #[serde(deserialize_with = "crate::utils::duration::deserialize")]
    pub since: Duration,
    #[serde(deserialize_with = "crate::utils::duration::deserialize")]
    pub ago: Duration,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    pub mode: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            minmag: DEFAULT_MIN_MAGNITUDE,
            maxmag: DEFAULT_MAX_MAGNITUDE,
            since: DEFAULT_SINCE,
            ago: DEFAULT_AGO,
            event_type: DEFAULT_EVENT_TYPE.to_string(),
            status: DEFAULT_EVALUATION_STATUS.to_string(),
            mode: DEFAULT_EVALUATION_MODE.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuakeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuakeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WFS_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuakeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn service(&self) -> &str {
        &self.service.host
    }

    fn min_magnitude(&self) -> f64 {
        self.filters.minmag
    }

    fn max_magnitude(&self) -> f64 {
        self.filters.maxmag
    }

    fn since(&self) -> Duration {
        self.filters.since
    }

    fn ago(&self) -> Duration {
        self.filters.ago
    }

    fn event_type(&self) -> &str {
        &self.filters.event_type
    }

    fn evaluation_status(&self) -> &str {
        &self.filters.status
    }

    fn evaluation_mode(&self) -> &str {
        &self.filters.mode
    }

    fn limit(&self) -> usize {
        self.service.limit
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_search_options(self)
    }
}
