use crate::core::detail::DetailLoader;
use crate::core::loader::DataLoader;
use crate::core::pipeline::{filter_and_sort_champions, sort_items, ClassFilter, SortKey};
use crate::core::version::VersionResolver;
use crate::core::view::{ChampionsView, DetailView, ItemsView, View};
use crate::domain::model::{ChampionId, Version};
use crate::domain::ports::{CatalogSource, ConfigProvider, Storage};
use crate::render::{render_page, RenderSettings};
use crate::utils::error::Result;
use crate::utils::text::element_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub version: Version,
    pub item_count: usize,
    pub champion_count: usize,
    pub pages: Vec<String>,
}

/// File name of a champion detail page. The id is reduced to a single safe path component.
pub fn champion_page(id: &ChampionId) -> String {
    format!("champion-{}.html", element_token(id.as_str()))
}

async fn write_page<W: Storage>(
    storage: &W,
    settings: &RenderSettings,
    name: String,
    view: &View,
    pages: &mut Vec<String>,
) -> Result<()> {
    let markup = render_page(view, settings);
    storage.write_file(&name, markup.html.as_bytes()).await?;
    tracing::info!("📝 Wrote {}", name);
    pages.push(name);
    Ok(())
}

/// Renders the item catalog, the champion list and the requested champion pages once, without
/// an interactive session.
pub async fn write_snapshot<S, W, C>(
    source: &S,
    storage: &W,
    config: &C,
    champions: &[ChampionId],
) -> Result<SnapshotReport>
where
    S: CatalogSource + ?Sized,
    W: Storage,
    C: ConfigProvider + ?Sized,
{
    let settings = RenderSettings::from_config(config);
    let mut versions = VersionResolver::new(config.version_product());
    let mut data = DataLoader::new(config.primary_map());
    let mut details = DetailLoader::new();
    let mut pages = Vec::new();

    let version = versions.resolve(source).await?;
    tracing::info!("🔖 Using version {}", version);

    let items = sort_items(data.load_items(source, &version).await?, SortKey::NameAsc);
    let item_count = items.len();
    let view = View::Items(ItemsView {
        version: version.clone(),
        items,
        sort: SortKey::NameAsc,
    });
    write_page(storage, &settings, "items.html".to_string(), &view, &mut pages).await?;

    let listed = filter_and_sort_champions(
        data.load_champions(source, &version).await?,
        &ClassFilter::All,
        SortKey::NameAsc,
    );
    let champion_count = listed.len();
    let view = View::Champions(ChampionsView {
        version: version.clone(),
        champions: listed,
        sort: SortKey::NameAsc,
        filter: ClassFilter::All,
    });
    write_page(storage, &settings, "champions.html".to_string(), &view, &mut pages).await?;

    for id in champions {
        if !data.champions().iter().any(|c| &c.id == id) {
            tracing::warn!("⚠️ Champion '{}' is not in the list for version {}, skipping", id, version);
            continue;
        }
        let champion = details.load(source, id, &version).await?;
        let view = View::ChampionDetail(DetailView {
            version: version.clone(),
            champion,
        });
        write_page(storage, &settings, champion_page(id), &view, &mut pages).await?;
    }

    Ok(SnapshotReport {
        version,
        item_count,
        champion_count,
        pages,
    })
}
