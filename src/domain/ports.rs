use crate::domain::model::{
    ChampionDetail, ChampionId, ChampionSummary, Item, TagLabel, Version, VersionManifest,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn realms_url(&self) -> &str;
    fn cdn_base_url(&self) -> &str;
    fn locale(&self) -> &str;
    fn version_product(&self) -> &str;
    fn primary_map(&self) -> &str;
    fn output_path(&self) -> &str;
    fn placeholder_image(&self) -> &str;
    fn tag_labels(&self) -> &[TagLabel];
    fn timeout_seconds(&self) -> Option<u64>;
}

/// Read access to the static game data service. Collections come back unfiltered and in
/// source iteration order.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn version_manifest(&self) -> Result<VersionManifest>;
    async fn items(&self, version: &Version) -> Result<Vec<Item>>;
    async fn champions(&self, version: &Version) -> Result<Vec<ChampionSummary>>;
    async fn champion_detail(&self, id: &ChampionId, version: &Version)
        -> Result<ChampionDetail>;
}
