use crate::config::{
    default_tag_labels, validate_provider, DEFAULT_CDN_BASE_URL, DEFAULT_LOCALE,
    DEFAULT_OUTPUT_PATH, DEFAULT_PLACEHOLDER_IMAGE, DEFAULT_PRIMARY_MAP, DEFAULT_REALMS_URL,
    DEFAULT_VERSION_PRODUCT,
};
use crate::domain::model::TagLabel;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_realms_url")]
    pub realms_url: String,
    #[serde(default = "default_cdn_base_url")]
    pub cdn_base_url: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_version_product")]
    pub version_product: String,
    #[serde(default = "default_primary_map")]
    pub primary_map: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default = "default_tag_labels")]
    pub tag_labels: Vec<TagLabel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub verbose: Option<bool>,
    pub json_logs: Option<bool>,
}

fn default_realms_url() -> String {
    DEFAULT_REALMS_URL.to_string()
}

fn default_cdn_base_url() -> String {
    DEFAULT_CDN_BASE_URL.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_version_product() -> String {
    DEFAULT_VERSION_PRODUCT.to_string()
}

fn default_primary_map() -> String {
    DEFAULT_PRIMARY_MAP.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            realms_url: default_realms_url(),
            cdn_base_url: default_cdn_base_url(),
            locale: default_locale(),
            version_product: default_version_product(),
            primary_map: default_primary_map(),
            timeout_seconds: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            tag_labels: default_tag_labels(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn realms_url(&self) -> &str {
        &self.source.realms_url
    }

    fn cdn_base_url(&self) -> &str {
        &self.source.cdn_base_url
    }

    fn locale(&self) -> &str {
        &self.source.locale
    }

    fn version_product(&self) -> &str {
        &self.source.version_product
    }

    fn primary_map(&self) -> &str {
        &self.source.primary_map
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn placeholder_image(&self) -> &str {
        &self.render.placeholder_image
    }

    fn tag_labels(&self) -> &[TagLabel] {
        &self.render.tag_labels
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
