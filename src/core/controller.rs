use crate::core::detail::fetch_champion_detail;
use crate::core::loader::{fetch_champions, fetch_items};
use crate::core::pipeline::{ClassFilter, SortKey};
use crate::core::state::AppState;
use crate::core::version::fetch_latest_version;
use crate::core::view::{ErrorView, FetchFailure, LoadingView, Section, View};
use crate::domain::model::{ChampionDetail, ChampionId, ChampionSummary, Item, Version};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};

/// Generation counter value a fetch was issued under.
pub type RequestToken = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Landing,
    Items,
    Champions,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Show(NavTarget),
    SortItems(SortKey),
    SortChampions(SortKey),
    FilterChampions(ClassFilter),
    OpenChampion(ChampionId),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    Items,
    Champions,
    ChampionDetail(ChampionId),
}

/// A fetch to run outside the controller. Resolves the version first when none was cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub kind: FetchKind,
    pub version: Option<Version>,
    pub product: String,
    pub primary_map: String,
}

#[derive(Debug)]
pub enum Fetched {
    Items(Vec<Item>),
    Champions(Vec<ChampionSummary>),
    ChampionDetail(ChampionId, ChampionDetail),
}

#[derive(Debug)]
pub struct FetchOutcome {
    /// Version the data was fetched for; `None` when version resolution itself failed.
    pub version: Option<Version>,
    pub result: std::result::Result<Fetched, FetchFailure>,
}

impl FetchJob {
    pub async fn run<S: CatalogSource + ?Sized>(&self, source: &S) -> FetchOutcome {
        let version = match &self.version {
            Some(version) => version.clone(),
            None => match fetch_latest_version(source, &self.product).await {
                Ok(version) => version,
                Err(error) => {
                    return FetchOutcome {
                        version: None,
                        result: Err(FetchFailure::Version(error)),
                    }
                }
            },
        };

        let result = match &self.kind {
            FetchKind::Items => fetch_items(source, &version, &self.primary_map)
                .await
                .map(Fetched::Items),
            FetchKind::Champions => fetch_champions(source, &version)
                .await
                .map(Fetched::Champions),
            FetchKind::ChampionDetail(id) => fetch_champion_detail(source, id, &version)
                .await
                .map(|detail| Fetched::ChampionDetail(id.clone(), detail)),
        };

        FetchOutcome {
            version: Some(version),
            result: result.map_err(FetchFailure::Data),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub job: FetchJob,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Render this view now.
    Ready(View),
    /// Render the loading view and run the ticket; hand its outcome to `Controller::complete`.
    Fetch { view: View, ticket: FetchTicket },
}

impl Dispatch {
    pub fn view(&self) -> &View {
        match self {
            Dispatch::Ready(view) | Dispatch::Fetch { view, .. } => view,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    token: RequestToken,
    section: Section,
}

/// Turns commands into state transitions. Single owner, no interior locking.
pub struct Controller {
    state: AppState,
    generation: RequestToken,
    in_flight: Option<InFlight>,
    view: View,
}

impl Controller {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            generation: 0,
            in_flight: None,
            view: View::Landing,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_view(&self) -> &View {
        &self.view
    }

    pub fn section(&self) -> Section {
        self.state.section
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Dispatch> {
        tracing::debug!("Dispatching {:?} in section {:?}", command, self.state.section);

        match command {
            Command::Show(NavTarget::Landing) => {
                self.navigate(Section::Landing);
                Ok(self.present(View::Landing))
            }
            Command::Show(NavTarget::Items) => self.enter_list(Section::Items),
            Command::Show(NavTarget::Champions) => self.enter_list(Section::Champions),
            Command::SortItems(key) => {
                self.require_section(Section::Items, "Item sorting")?;
                self.state.item_sort = key;
                Ok(self.refresh())
            }
            Command::SortChampions(key) => {
                self.require_section(Section::Champions, "Champion sorting")?;
                if key.is_cost() {
                    return Err(CatalogError::command(format!(
                        "champions cannot be sorted by '{}'",
                        key
                    )));
                }
                self.state.champion_sort = key;
                Ok(self.refresh())
            }
            Command::FilterChampions(filter) => {
                self.require_section(Section::Champions, "Class filtering")?;
                self.state.champion_filter = filter;
                Ok(self.refresh())
            }
            Command::OpenChampion(id) => self.open_champion(id),
            Command::Back => {
                self.require_section(Section::ChampionDetail, "Going back")?;
                self.enter_list(Section::Champions)
            }
        }
    }

    /// Applies a finished fetch. Returns the view to render, or `None` when the outcome
    /// belongs to a request that is no longer current and was dropped.
    pub fn complete(&mut self, token: RequestToken, outcome: FetchOutcome) -> Option<View> {
        let in_flight = match self.in_flight {
            Some(in_flight) if in_flight.token == token => in_flight,
            _ => {
                tracing::debug!(
                    "Discarding stale response for request {} (current generation {})",
                    token,
                    self.generation
                );
                return None;
            }
        };
        self.in_flight = None;

        if let Some(version) = outcome.version.clone() {
            self.state.versions.remember(version);
        }

        let view = match outcome.result {
            Ok(Fetched::Items(items)) => {
                self.state.data.replace_items(items);
                self.state.items_version = outcome.version;
                self.state.items_view()
            }
            Ok(Fetched::Champions(champions)) => {
                self.state.data.replace_champions(champions);
                self.state.champions_version = outcome.version;
                self.state.champions_view()
            }
            Ok(Fetched::ChampionDetail(id, detail)) => {
                self.state.details.insert(id, detail);
                self.state.detail_view()
            }
            Err(failure) => {
                tracing::error!(
                    "❌ Loading {} failed: {} (Category: {:?})",
                    in_flight.section.as_str(),
                    failure.error(),
                    failure.error().category()
                );
                Some(View::Error(ErrorView::from_failure(
                    in_flight.section,
                    self.state.current_champion.as_ref(),
                    &failure,
                )))
            }
        };

        let view = view.unwrap_or(View::Landing);
        self.view = view.clone();
        Some(view)
    }

    fn navigate(&mut self, section: Section) {
        self.generation += 1;
        self.in_flight = None;
        self.state.section = section;
    }

    fn present(&mut self, view: View) -> Dispatch {
        self.view = view.clone();
        Dispatch::Ready(view)
    }

    fn issue(&mut self, kind: FetchKind, loading: LoadingView) -> Dispatch {
        let token = self.generation;
        let section = loading.section;
        let job = FetchJob {
            kind,
            version: self.state.versions.cached().cloned(),
            product: self.state.versions.product().to_string(),
            primary_map: self.state.data.primary_map().to_string(),
        };

        tracing::debug!("Issuing request {} for {:?}", token, job.kind);
        self.in_flight = Some(InFlight { token, section });

        let view = View::Loading(loading);
        self.view = view.clone();
        Dispatch::Fetch {
            view,
            ticket: FetchTicket { token, job },
        }
    }

    /// Re-renders the active section with the current controls, or keeps the present view
    /// while its data is still loading.
    fn refresh(&mut self) -> Dispatch {
        match self.state.section_view() {
            Some(view) => self.present(view),
            None => Dispatch::Ready(self.view.clone()),
        }
    }

    fn require_section(&self, section: Section, action: &str) -> Result<()> {
        if self.state.section == section {
            Ok(())
        } else {
            Err(CatalogError::command(format!(
                "{} is only available in the {} section",
                action,
                section.as_str()
            )))
        }
    }

    fn enter_list(&mut self, section: Section) -> Result<Dispatch> {
        if let Some(in_flight) = self.in_flight {
            if in_flight.section == section && self.state.section == section {
                return Ok(Dispatch::Ready(self.view.clone()));
            }
        }

        self.navigate(section);

        if let Some(view) = self.state.section_view() {
            return Ok(self.present(view));
        }

        let loading = LoadingView::for_list(section, self.state.versions.cached());
        let kind = if section == Section::Items {
            FetchKind::Items
        } else {
            FetchKind::Champions
        };
        Ok(self.issue(kind, loading))
    }

    fn open_champion(&mut self, id: ChampionId) -> Result<Dispatch> {
        self.require_section(Section::Champions, "Opening a champion")?;
        if !self.state.is_loaded(Section::Champions) {
            return Err(CatalogError::command("the champion list has not loaded yet"));
        }
        if !self.state.data.champions().iter().any(|c| c.id == id) {
            return Err(CatalogError::command(format!("unknown champion '{}'", id)));
        }

        self.navigate(Section::ChampionDetail);
        self.state.current_champion = Some(id.clone());

        if let Some(view) = self.state.detail_view() {
            tracing::debug!("Detail cache hit for {}", id);
            return Ok(self.present(view));
        }

        let loading = LoadingView::for_detail(&id);
        Ok(self.issue(FetchKind::ChampionDetail(id), loading))
    }
}
