pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::DDragonClient;
pub use app::Session;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{Command, Controller};
pub use utils::error::{CatalogError, Result};
