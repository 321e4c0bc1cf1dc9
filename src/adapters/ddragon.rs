use crate::domain::model::{
    ChampionDetail, ChampionId, ChampionSummary, Item, StatRatings, Version, VersionManifest,
};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
struct RawRealm {
    n: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    full: String,
}

#[derive(Debug, Deserialize)]
struct RawGold {
    total: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    plaintext: Option<String>,
    gold: Option<RawGold>,
    image: Option<RawImage>,
    #[serde(default)]
    maps: BTreeMap<String, bool>,
}

#[derive(Debug, Deserialize)]
struct RawChampion {
    id: String,
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    tags: Vec<String>,
    image: RawImage,
}

#[derive(Debug, Deserialize)]
struct RawInfo {
    attack: u8,
    defense: u8,
    magic: u8,
    difficulty: u8,
}

#[derive(Debug, Deserialize)]
struct RawChampionDetail {
    #[serde(flatten)]
    summary: RawChampion,
    #[serde(default)]
    lore: String,
    info: RawInfo,
    #[serde(default)]
    allytips: Vec<String>,
}

impl RawItem {
    fn into_item(self, id: String) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            plaintext: self.plaintext.filter(|text| !text.trim().is_empty()),
            cost: self.gold.and_then(|gold| gold.total),
            icon: self.image.map(|image| image.full).unwrap_or_default(),
            maps: self
                .maps
                .into_iter()
                .filter(|(_, available)| *available)
                .map(|(map, _)| map)
                .collect(),
        }
    }
}

impl From<RawChampion> for ChampionSummary {
    fn from(raw: RawChampion) -> Self {
        ChampionSummary {
            id: ChampionId::from(raw.id),
            name: raw.name,
            title: raw.title,
            tags: raw.tags,
            icon: raw.image.full,
        }
    }
}

impl From<RawChampionDetail> for ChampionDetail {
    fn from(raw: RawChampionDetail) -> Self {
        ChampionDetail {
            summary: raw.summary.into(),
            lore: raw.lore,
            ratings: StatRatings {
                attack: raw.info.attack,
                defense: raw.info.defense,
                magic: raw.info.magic,
                difficulty: raw.info.difficulty,
            },
            ally_tips: raw.allytips,
        }
    }
}

fn is_array_index(key: &str) -> bool {
    if key == "0" {
        return true;
    }
    if key.is_empty() || key.starts_with('0') || !key.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    key.parse::<u64>()
        .map(|n| n < u64::from(u32::MAX))
        .unwrap_or(false)
}

/// Orders object entries the way a JavaScript engine enumerates them: integer-like keys
/// ascending, then the remaining keys in document order. Item dedup depends on this order.
pub fn js_property_order(data: Map<String, Value>) -> Vec<(String, Value)> {
    let (mut indexed, named): (Vec<_>, Vec<_>) =
        data.into_iter().partition(|(key, _)| is_array_index(key));
    indexed.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
    indexed.extend(named);
    indexed
}

fn decode_entries<T: DeserializeOwned>(data: Map<String, Value>) -> Result<Vec<(String, T)>> {
    js_property_order(data)
        .into_iter()
        .map(|(key, value)| {
            let entry = serde_json::from_value(value).map_err(|e| {
                CatalogError::shape(format!("entry '{}' could not be decoded: {}", key, e))
            })?;
            Ok((key, entry))
        })
        .collect()
}

pub fn parse_version_manifest(body: &[u8]) -> Result<VersionManifest> {
    let realm: RawRealm = serde_json::from_slice(body)?;
    let products = realm
        .n
        .into_iter()
        .filter_map(|(product, version)| version.as_str().map(|v| (product, v.to_string())))
        .collect();
    Ok(VersionManifest { products })
}

pub fn parse_items(body: &[u8]) -> Result<Vec<Item>> {
    let collection: RawCollection = serde_json::from_slice(body)?;
    let entries = decode_entries::<RawItem>(collection.data)?;
    Ok(entries
        .into_iter()
        .map(|(id, raw)| raw.into_item(id))
        .collect())
}

pub fn parse_champions(body: &[u8]) -> Result<Vec<ChampionSummary>> {
    let collection: RawCollection = serde_json::from_slice(body)?;
    let entries = decode_entries::<RawChampion>(collection.data)?;
    Ok(entries.into_iter().map(|(_, raw)| raw.into()).collect())
}

pub fn parse_champion_detail(body: &[u8]) -> Result<ChampionDetail> {
    let collection: RawCollection = serde_json::from_slice(body)?;
    let (_, raw) = decode_entries::<RawChampionDetail>(collection.data)?
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::shape("champion detail response has an empty 'data' map"))?;
    Ok(raw.into())
}

/// HTTP client for the Data Dragon realm document and CDN.
pub struct DDragonClient {
    client: Client,
    realms_url: Url,
    cdn_base_url: Url,
    locale: String,
}

impl DDragonClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            realms_url: Url::parse(config.realms_url())?,
            cdn_base_url: Url::parse(config.cdn_base_url())?,
            locale: config.locale().to_string(),
        })
    }

    /// `<cdn><version>/data/<locale>/<segments..>`, each segment percent-encoded.
    pub fn data_url(&self, version: &Version, segments: &[&str]) -> Result<Url> {
        let mut url = self.cdn_base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| CatalogError::InvalidConfigValueError {
                    field: "cdn_base_url".to_string(),
                    value: self.cdn_base_url.to_string(),
                    reason: "URL cannot be used as a base".to_string(),
                })?;
            path.pop_if_empty()
                .push(version.as_str())
                .push("data")
                .push(&self.locale)
                .extend(segments);
        }
        Ok(url)
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl CatalogSource for DDragonClient {
    async fn version_manifest(&self) -> Result<VersionManifest> {
        let body = self.get_bytes(self.realms_url.clone()).await?;
        parse_version_manifest(&body)
    }

    async fn items(&self, version: &Version) -> Result<Vec<Item>> {
        let url = self.data_url(version, &["item.json"])?;
        let items = parse_items(&self.get_bytes(url).await?)?;
        tracing::debug!("Decoded {} raw items for version {}", items.len(), version);
        Ok(items)
    }

    async fn champions(&self, version: &Version) -> Result<Vec<ChampionSummary>> {
        let url = self.data_url(version, &["champion.json"])?;
        let champions = parse_champions(&self.get_bytes(url).await?)?;
        tracing::debug!("Decoded {} champions for version {}", champions.len(), version);
        Ok(champions)
    }

    async fn champion_detail(
        &self,
        id: &ChampionId,
        version: &Version,
    ) -> Result<ChampionDetail> {
        let file = format!("{}.json", id);
        let url = self.data_url(version, &["champion", &file])?;
        parse_champion_detail(&self.get_bytes(url).await?)
    }
}
