use crate::domain::model::Version;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};

/// Fetches the manifest and extracts `product`'s version.
pub async fn fetch_latest_version<S: CatalogSource + ?Sized>(
    source: &S,
    product: &str,
) -> Result<Version> {
    let manifest = source.version_manifest().await?;
    manifest
        .products
        .get(product)
        .map(|version| Version::from(version.as_str()))
        .ok_or_else(|| {
            CatalogError::shape(format!("version manifest has no entry for '{}'", product))
        })
}

/// Session-wide memo of the latest data set version.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    product: String,
    cached: Option<Version>,
}

impl VersionResolver {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            cached: None,
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cached(&self) -> Option<&Version> {
        self.cached.as_ref()
    }

    /// Keeps the first version seen; later calls are no-ops.
    pub fn remember(&mut self, version: Version) {
        if self.cached.is_none() {
            tracing::info!("📌 Using data set version {}", version);
            self.cached = Some(version);
        }
    }

    pub async fn resolve<S: CatalogSource + ?Sized>(&mut self, source: &S) -> Result<Version> {
        if let Some(version) = &self.cached {
            return Ok(version.clone());
        }

        tracing::debug!("Resolving latest version for product '{}'", self.product);
        let version = fetch_latest_version(source, &self.product).await?;
        self.remember(version.clone());
        Ok(version)
    }
}
