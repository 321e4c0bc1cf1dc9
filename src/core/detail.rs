use crate::domain::model::{ChampionDetail, ChampionId, Version};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::collections::HashMap;

pub async fn fetch_champion_detail<S: CatalogSource + ?Sized>(
    source: &S,
    id: &ChampionId,
    version: &Version,
) -> Result<ChampionDetail> {
    tracing::debug!("Fetching details for {} (version {})", id, version);
    source.champion_detail(id, version).await
}

/// Per-champion detail memo. Unbounded; entries live for the whole session.
#[derive(Debug, Clone, Default)]
pub struct DetailLoader {
    cache: HashMap<ChampionId, ChampionDetail>,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ChampionId) -> Option<&ChampionDetail> {
        self.cache.get(id)
    }

    pub fn insert(&mut self, id: ChampionId, detail: ChampionDetail) {
        self.cache.insert(id, detail);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Cached records are returned without touching the source. Failures cache nothing.
    pub async fn load<S: CatalogSource + ?Sized>(
        &mut self,
        source: &S,
        id: &ChampionId,
        version: &Version,
    ) -> Result<ChampionDetail> {
        if let Some(detail) = self.cache.get(id) {
            tracing::debug!("Detail cache hit for {}", id);
            return Ok(detail.clone());
        }

        let detail = fetch_champion_detail(source, id, version).await?;
        self.insert(id.clone(), detail.clone());
        Ok(detail)
    }
}
