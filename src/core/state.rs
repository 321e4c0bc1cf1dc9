use crate::core::detail::DetailLoader;
use crate::core::loader::DataLoader;
use crate::core::pipeline::{filter_and_sort_champions, sort_items, ClassFilter, SortKey};
use crate::core::version::VersionResolver;
use crate::core::view::{ChampionsView, DetailView, ItemsView, Section, View};
use crate::domain::model::{ChampionId, Version};

/// All session state: caches, per-section load markers and the last-used controls.
#[derive(Debug, Clone)]
pub struct AppState {
    pub section: Section,
    pub versions: VersionResolver,
    pub data: DataLoader,
    pub details: DetailLoader,
    /// Version the item list was loaded for; `None` until the first successful load.
    pub items_version: Option<Version>,
    pub champions_version: Option<Version>,
    pub item_sort: SortKey,
    pub champion_sort: SortKey,
    pub champion_filter: ClassFilter,
    pub current_champion: Option<ChampionId>,
}

impl AppState {
    pub fn new(version_product: &str, primary_map: &str) -> Self {
        Self {
            section: Section::Landing,
            versions: VersionResolver::new(version_product),
            data: DataLoader::new(primary_map),
            details: DetailLoader::new(),
            items_version: None,
            champions_version: None,
            item_sort: SortKey::NameAsc,
            champion_sort: SortKey::NameAsc,
            champion_filter: ClassFilter::All,
            current_champion: None,
        }
    }

    pub fn is_loaded(&self, section: Section) -> bool {
        match section {
            Section::Landing => true,
            Section::Items => self.items_version.is_some(),
            Section::Champions => self.champions_version.is_some(),
            Section::ChampionDetail => self
                .current_champion
                .as_ref()
                .map(|id| self.details.get(id).is_some())
                .unwrap_or(false),
        }
    }

    pub fn items_view(&self) -> Option<View> {
        let version = self.items_version.clone()?;
        Some(View::Items(ItemsView {
            version,
            items: sort_items(self.data.items(), self.item_sort),
            sort: self.item_sort,
        }))
    }

    pub fn champions_view(&self) -> Option<View> {
        let version = self.champions_version.clone()?;
        Some(View::Champions(ChampionsView {
            version,
            champions: filter_and_sort_champions(
                self.data.champions(),
                &self.champion_filter,
                self.champion_sort,
            ),
            sort: self.champion_sort,
            filter: self.champion_filter.clone(),
        }))
    }

    pub fn detail_view(&self) -> Option<View> {
        let id = self.current_champion.as_ref()?;
        let champion = self.details.get(id)?.clone();
        let version = self.champions_version.clone()?;
        Some(View::ChampionDetail(DetailView { version, champion }))
    }

    /// The view for the active section when its data is available.
    pub fn section_view(&self) -> Option<View> {
        match self.section {
            Section::Landing => Some(View::Landing),
            Section::Items => self.items_view(),
            Section::Champions => self.champions_view(),
            Section::ChampionDetail => self.detail_view(),
        }
    }
}
