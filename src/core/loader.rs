use crate::domain::model::{ChampionSummary, Item, Version};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::text::strip_tags;
use std::collections::HashSet;

/// Keeps primary-map items with a positive cost, first occurrence per display name, and
/// strips markup from descriptions. Input order decides which duplicate survives.
pub fn clean_items(items: Vec<Item>, primary_map: &str) -> Vec<Item> {
    let mut seen_names = HashSet::new();

    items
        .into_iter()
        .filter(|item| item.is_available_on(primary_map))
        .filter(|item| item.cost.map(|cost| cost > 0).unwrap_or(false))
        .filter(|item| seen_names.insert(item.name.clone()))
        .map(|item| Item {
            description: strip_tags(&item.description),
            ..item
        })
        .collect()
}

pub async fn fetch_items<S: CatalogSource + ?Sized>(
    source: &S,
    version: &Version,
    primary_map: &str,
) -> Result<Vec<Item>> {
    let raw = source.items(version).await?;
    let raw_count = raw.len();
    let items = clean_items(raw, primary_map);
    tracing::info!(
        "Loaded {} items for version {} ({} dropped by map/cost/duplicate filters)",
        items.len(),
        version,
        raw_count - items.len()
    );
    Ok(items)
}

pub async fn fetch_champions<S: CatalogSource + ?Sized>(
    source: &S,
    version: &Version,
) -> Result<Vec<ChampionSummary>> {
    let champions = source.champions(version).await?;
    tracing::info!("Loaded {} champions for version {}", champions.len(), version);
    Ok(champions)
}

/// Session collections. Each successful load replaces a collection wholesale; a failed load
/// leaves the previous one in place.
#[derive(Debug, Clone)]
pub struct DataLoader {
    primary_map: String,
    items: Vec<Item>,
    champions: Vec<ChampionSummary>,
}

impl DataLoader {
    pub fn new(primary_map: impl Into<String>) -> Self {
        Self {
            primary_map: primary_map.into(),
            items: Vec::new(),
            champions: Vec::new(),
        }
    }

    pub fn primary_map(&self) -> &str {
        &self.primary_map
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn champions(&self) -> &[ChampionSummary] {
        &self.champions
    }

    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn replace_champions(&mut self, champions: Vec<ChampionSummary>) {
        self.champions = champions;
    }

    pub async fn load_items<S: CatalogSource + ?Sized>(
        &mut self,
        source: &S,
        version: &Version,
    ) -> Result<&[Item]> {
        let items = fetch_items(source, version, &self.primary_map).await?;
        self.replace_items(items);
        Ok(&self.items)
    }

    pub async fn load_champions<S: CatalogSource + ?Sized>(
        &mut self,
        source: &S,
        version: &Version,
    ) -> Result<&[ChampionSummary]> {
        let champions = fetch_champions(source, version).await?;
        self.replace_champions(champions);
        Ok(&self.champions)
    }
}
