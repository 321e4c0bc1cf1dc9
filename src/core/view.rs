use crate::core::pipeline::{ClassFilter, SortKey};
use crate::domain::model::{ChampionDetail, ChampionId, ChampionSummary, Item, Version};
use crate::utils::error::CatalogError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Landing,
    Items,
    Champions,
    ChampionDetail,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Landing => "landing",
            Section::Items => "items",
            Section::Champions => "champions",
            Section::ChampionDetail => "champion-detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    pub section: Section,
    pub message: String,
}

impl LoadingView {
    pub fn for_list(section: Section, version: Option<&Version>) -> Self {
        let noun = if section == Section::Items {
            "items"
        } else {
            "champions"
        };
        let message = match (section, version) {
            (_, None) => format!("Fetching the latest game version for {}...", noun),
            (Section::Items, Some(v)) => format!("Loading all items (version {})...", v),
            (_, Some(v)) => format!("Loading the full champion list (version {})...", v),
        };
        Self { section, message }
    }

    pub fn for_detail(id: &ChampionId) -> Self {
        Self {
            section: Section::ChampionDetail,
            message: format!("Loading details for {}...", id),
        }
    }
}

/// Which step of a fetch failed.
#[derive(Debug)]
pub enum FetchFailure {
    Version(CatalogError),
    Data(CatalogError),
}

impl FetchFailure {
    pub fn error(&self) -> &CatalogError {
        match self {
            FetchFailure::Version(e) | FetchFailure::Data(e) => e,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub section: Section,
    pub title: String,
    pub message: String,
    pub cause: String,
    pub retryable: bool,
}

impl ErrorView {
    pub fn from_failure(section: Section, subject: Option<&ChampionId>, failure: &FetchFailure) -> Self {
        let (title, message) = match (section, failure, subject) {
            (Section::Items, FetchFailure::Version(_), _) => (
                "Error Loading ITEMS".to_string(),
                "Could not obtain the latest game version. Please try again later.".to_string(),
            ),
            (_, FetchFailure::Version(_), _) => (
                "Error Loading CHAMPIONS".to_string(),
                "Could not obtain the latest game version. Please try again later.".to_string(),
            ),
            (Section::Items, FetchFailure::Data(_), _) => (
                "Error Loading Items".to_string(),
                "Could not fetch item data for the current version.".to_string(),
            ),
            (Section::ChampionDetail, FetchFailure::Data(_), Some(id)) => (
                "Error Loading Details".to_string(),
                format!("Could not load detailed information for {}.", id),
            ),
            (_, FetchFailure::Data(_), _) => (
                "Error Loading Champions".to_string(),
                "Could not fetch champion data for the current version.".to_string(),
            ),
        };

        Self {
            section,
            title,
            message,
            cause: failure.error().user_friendly_message(),
            retryable: failure.error().is_retryable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsView {
    pub version: Version,
    pub items: Vec<Item>,
    pub sort: SortKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionsView {
    pub version: Version,
    pub champions: Vec<ChampionSummary>,
    pub sort: SortKey,
    pub filter: ClassFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub version: Version,
    pub champion: ChampionDetail,
}

/// Everything the renderer needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    Loading(LoadingView),
    Error(ErrorView),
    Items(ItemsView),
    Champions(ChampionsView),
    ChampionDetail(DetailView),
}

impl View {
    pub fn section(&self) -> Section {
        match self {
            View::Landing => Section::Landing,
            View::Loading(loading) => loading.section,
            View::Error(error) => error.section,
            View::Items(_) => Section::Items,
            View::Champions(_) => Section::Champions,
            View::ChampionDetail(_) => Section::ChampionDetail,
        }
    }
}
