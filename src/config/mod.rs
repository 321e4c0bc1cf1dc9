pub mod cli;
pub mod toml_config;

use crate::domain::model::TagLabel;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_REALMS_URL: &str = "https://ddragon.leagueoflegends.com/realms/br.json";
pub const DEFAULT_CDN_BASE_URL: &str = "https://ddragon.leagueoflegends.com/cdn/";
pub const DEFAULT_LOCALE: &str = "pt_BR";
pub const DEFAULT_VERSION_PRODUCT: &str = "item";
pub const DEFAULT_PRIMARY_MAP: &str = "11";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/32x32?text=NA";

/// Class tags in filter-menu order, labelled for the default `pt_BR` data locale.
pub fn default_tag_labels() -> Vec<TagLabel> {
    vec![
        TagLabel::new("Fighter", "Lutador"),
        TagLabel::new("Tank", "Tanque"),
        TagLabel::new("Mage", "Mago"),
        TagLabel::new("Assassin", "Assassino"),
        TagLabel::new("Support", "Suporte"),
        TagLabel::new("Marksman", "Atirador"),
    ]
}

/// Checks shared by every `ConfigProvider`.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_url("realms_url", config.realms_url())?;
    validation::validate_base_url("cdn_base_url", config.cdn_base_url())?;
    validation::validate_non_empty_string("locale", config.locale())?;
    validation::validate_non_empty_string("version_product", config.version_product())?;
    validation::validate_non_empty_string("primary_map", config.primary_map())?;
    validation::validate_path("output_path", config.output_path())?;
    validation::validate_non_empty_string("placeholder_image", config.placeholder_image())?;
    if let Some(timeout) = config.timeout_seconds() {
        validation::validate_range("timeout_seconds", timeout, 1, 300)?;
    }
    for label in config.tag_labels() {
        validation::validate_non_empty_string("tag_labels.tag", &label.tag)?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ddragon-browser")]
#[command(about = "Browse game items and champions from the Data Dragon service")]
pub struct CliConfig {
    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_REALMS_URL)]
    pub realms_url: String,

    #[arg(long, default_value = DEFAULT_CDN_BASE_URL)]
    pub cdn_base_url: String,

    #[arg(long, default_value = DEFAULT_LOCALE)]
    pub locale: String,

    #[arg(long, default_value = DEFAULT_VERSION_PRODUCT)]
    pub version_product: String,

    #[arg(long, default_value = DEFAULT_PRIMARY_MAP)]
    pub primary_map: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_PLACEHOLDER_IMAGE)]
    pub placeholder_image: String,

    #[arg(long, help = "Abort requests that take longer than this many seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(skip = default_tag_labels())]
    pub tag_labels: Vec<TagLabel>,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn realms_url(&self) -> &str {
        &self.realms_url
    }

    fn cdn_base_url(&self) -> &str {
        &self.cdn_base_url
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn version_product(&self) -> &str {
        &self.version_product
    }

    fn primary_map(&self) -> &str {
        &self.primary_map
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    fn tag_labels(&self) -> &[TagLabel] {
        &self.tag_labels
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        validate_provider(self)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_are_valid() {
        let config = CliConfig::parse_from(["ddragon-browser"]);
        assert_eq!(config.realms_url, DEFAULT_REALMS_URL);
        assert_eq!(config.locale, "pt_BR");
        assert_eq!(config.primary_map(), "11");
        assert_eq!(config.tag_labels().len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_cdn_without_trailing_slash() {
        let config = CliConfig::parse_from([
            "ddragon-browser",
            "--cdn-base-url",
            "https://ddragon.leagueoflegends.com/cdn",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_rejects_out_of_range_timeout() {
        let config = CliConfig::parse_from(["ddragon-browser", "--timeout-seconds", "0"]);
        assert!(config.validate().is_err());
    }
}
