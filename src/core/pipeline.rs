use crate::domain::model::{ChampionSummary, Item};
use crate::utils::error::CatalogError;
use crate::utils::text::compare_names;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    CostAsc,
    CostDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::CostAsc,
        SortKey::CostDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::CostAsc => "cost-asc",
            SortKey::CostDesc => "cost-desc",
        }
    }

    pub fn is_cost(self) -> bool {
        matches!(self, SortKey::CostAsc | SortKey::CostDesc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name-asc" | "alphabetical-asc" | "a-z" => Ok(SortKey::NameAsc),
            "name-desc" | "alphabetical-desc" | "z-a" => Ok(SortKey::NameDesc),
            "cost-asc" | "value-asc" => Ok(SortKey::CostAsc),
            "cost-desc" | "value-desc" => Ok(SortKey::CostDesc),
            other => Err(CatalogError::command(format!(
                "unknown sort key '{}' (expected name-asc, name-desc, cost-asc or cost-desc)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ClassFilter {
    #[default]
    All,
    Tag(String),
}

impl ClassFilter {
    pub fn matches(&self, champion: &ChampionSummary) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Tag(tag) => champion.has_tag(tag),
        }
    }
}

impl FromStr for ClassFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(CatalogError::command("filter needs a class tag or 'all'"));
        }
        if value.eq_ignore_ascii_case("all") {
            Ok(ClassFilter::All)
        } else {
            Ok(ClassFilter::Tag(value.to_string()))
        }
    }
}

/// Returns a sorted copy; the input snapshot is never touched. Ties keep input order.
pub fn sort_items(items: &[Item], key: SortKey) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::NameAsc => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => sorted.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::CostAsc => sorted.sort_by_key(|item| item.sort_cost()),
        SortKey::CostDesc => sorted.sort_by(|a, b| b.sort_cost().cmp(&a.sort_cost())),
    }
    sorted
}

/// Filters by class tag, then sorts by name. Cost keys do not apply to champions and fall
/// back to name ascending.
pub fn filter_and_sort_champions(
    champions: &[ChampionSummary],
    filter: &ClassFilter,
    key: SortKey,
) -> Vec<ChampionSummary> {
    let mut selected: Vec<ChampionSummary> = champions
        .iter()
        .filter(|champion| filter.matches(champion))
        .cloned()
        .collect();

    match key {
        SortKey::NameDesc => selected.sort_by(|a, b| compare_names(&b.name, &a.name)),
        _ => selected.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
    selected
}
