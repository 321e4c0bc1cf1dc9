use crate::app::commands::{parse_input, Input, HELP};
use crate::core::controller::{Command, Controller, Dispatch, FetchOutcome, FetchTicket, RequestToken};
use crate::core::pipeline::SortKey;
use crate::core::state::AppState;
use crate::core::view::Section;
use crate::domain::ports::{CatalogSource, ConfigProvider, Storage};
use crate::render::{headline, render_page, Markup, RenderSettings};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// File every rendered page is written to, relative to the storage root.
pub const INDEX_PAGE: &str = "index.html";

type Completion = (RequestToken, FetchOutcome);

enum Flow {
    Continue,
    Quit,
}

/// Interactive browsing session: reads commands, runs fetches as background tasks and writes
/// the current page after every change.
pub struct Session<S: CatalogSource + 'static, W: Storage> {
    source: Arc<S>,
    storage: W,
    controller: Controller,
    settings: RenderSettings,
    page: Markup,
    pending: usize,
    sender: UnboundedSender<Completion>,
    receiver: UnboundedReceiver<Completion>,
}

impl<S: CatalogSource + 'static, W: Storage> Session<S, W> {
    pub fn new<C: ConfigProvider + ?Sized>(source: Arc<S>, storage: W, config: &C) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            source,
            storage,
            controller: Controller::new(AppState::new(
                config.version_product(),
                config.primary_map(),
            )),
            settings: RenderSettings::from_config(config),
            page: Markup::default(),
            pending: 0,
            sender,
            receiver,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The page last written to storage.
    pub fn page(&self) -> &Markup {
        &self.page
    }

    /// Runs until `quit`, or until input ends and every outstanding fetch has reported back.
    pub async fn run<R, O>(&mut self, input: R, output: &mut O) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        tracing::info!("🚀 Session started");
        self.publish(output).await?;

        let mut input = input;
        // Bytes of a partially read line stay here when a fetch completion wins the select.
        let mut buffer = Vec::new();
        let mut input_open = true;

        loop {
            if !input_open && self.pending == 0 {
                break;
            }

            tokio::select! {
                read = input.read_until(b'\n', &mut buffer), if input_open => {
                    if read? == 0 {
                        input_open = false;
                        if self.pending > 0 {
                            tracing::info!("⏳ Input closed, waiting for {} fetch(es)", self.pending);
                        }
                    } else {
                        let line = String::from_utf8_lossy(&buffer).into_owned();
                        buffer.clear();
                        if let Flow::Quit = self.handle_line(&line, output).await? {
                            tracing::info!("👋 Quit requested");
                            break;
                        }
                    }
                }
                Some((token, outcome)) = self.receiver.recv(), if self.pending > 0 => {
                    self.pending -= 1;
                    if self.controller.complete(token, outcome).is_some() {
                        self.publish(output).await?;
                    }
                }
                else => break,
            }
        }

        tracing::info!("✅ Session finished");
        Ok(())
    }

    async fn handle_line<O: AsyncWrite + Unpin>(&mut self, line: &str, output: &mut O) -> Result<Flow> {
        let input = match parse_input(line) {
            Ok(Some(input)) => input,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                say(output, &format!("❌ {}", e.user_friendly_message())).await?;
                return Ok(Flow::Continue);
            }
        };

        match input {
            Input::Quit => return Ok(Flow::Quit),
            Input::Help => say(output, HELP).await?,
            Input::Show => self.summarize(output).await?,
            Input::Click(element_id) => match self.page.command_for(&element_id).cloned() {
                Some(command) => self.execute(command, output).await?,
                None => {
                    say(
                        output,
                        &format!("❌ No clickable element '{}' on this page.", element_id),
                    )
                    .await?
                }
            },
            Input::Sort(key) => {
                let command = self.sort_command(key);
                self.execute(command, output).await?
            }
            Input::Filter(filter) => {
                self.execute(Command::FilterChampions(filter), output).await?
            }
            Input::Command(command) => self.execute(command, output).await?,
        }

        Ok(Flow::Continue)
    }

    fn sort_command(&self, key: SortKey) -> Command {
        match self.controller.section() {
            Section::Champions => Command::SortChampions(key),
            _ => Command::SortItems(key),
        }
    }

    async fn execute<O: AsyncWrite + Unpin>(&mut self, command: Command, output: &mut O) -> Result<()> {
        match self.controller.dispatch(command) {
            Ok(Dispatch::Ready(_)) => self.publish(output).await,
            Ok(Dispatch::Fetch { ticket, .. }) => {
                self.spawn(ticket);
                self.publish(output).await
            }
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                say(output, &format!("❌ {}", e.user_friendly_message())).await
            }
        }
    }

    fn spawn(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        self.pending += 1;

        tokio::spawn(async move {
            let outcome = ticket.job.run(source.as_ref()).await;
            if sender.send((ticket.token, outcome)).is_err() {
                tracing::debug!("Session closed before request {} completed", ticket.token);
            }
        });
    }

    async fn publish<O: AsyncWrite + Unpin>(&mut self, output: &mut O) -> Result<()> {
        self.page = render_page(self.controller.current_view(), &self.settings);
        self.storage
            .write_file(INDEX_PAGE, self.page.html.as_bytes())
            .await?;
        self.summarize(output).await
    }

    async fn summarize<O: AsyncWrite + Unpin>(&self, output: &mut O) -> Result<()> {
        let view = self.controller.current_view();
        say(
            output,
            &format!(
                "📄 [{}] {}\n🔗 {} clickable element(s), see 'click <element-id>'",
                view.section().as_str(),
                headline(view, &self.settings),
                self.page.bindings.len()
            ),
        )
        .await
    }
}

async fn say<O: AsyncWrite + Unpin>(output: &mut O, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::View;
    use crate::domain::model::{
        ChampionDetail, ChampionId, ChampionSummary, Item, StatRatings, TagLabel, Version,
        VersionManifest,
    };
    use crate::utils::error::CatalogError;
    use async_trait::async_trait;
    use std::collections::{BTreeMap, BTreeSet, HashMap};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn page(&self) -> String {
            let files = self.files.lock().await;
            String::from_utf8(files.get(INDEX_PAGE).cloned().unwrap_or_default()).unwrap()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                CatalogError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct StubSource {
        manifest_calls: AtomicUsize,
        detail_calls: AtomicUsize,
    }

    fn item(name: &str, cost: u32) -> Item {
        Item {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: format!("{} description", name),
            plaintext: None,
            cost: Some(cost),
            icon: format!("{}.png", name),
            maps: BTreeSet::from(["11".to_string()]),
        }
    }

    fn champion(id: &str, tags: &[&str]) -> ChampionSummary {
        ChampionSummary {
            id: ChampionId::from(id),
            name: id.to_string(),
            title: format!("the {}", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: format!("{}.png", id),
        }
    }

    #[async_trait]
    impl CatalogSource for StubSource {
        async fn version_manifest(&self) -> Result<VersionManifest> {
            self.manifest_calls.fetch_add(1, Ordering::SeqCst);
            Ok(VersionManifest {
                products: BTreeMap::from([("item".to_string(), "14.1.1".to_string())]),
            })
        }

        async fn items(&self, _version: &Version) -> Result<Vec<Item>> {
            Ok(vec![item("Botas", 300), item("Gume", 3400), item("Anel", 400)])
        }

        async fn champions(&self, _version: &Version) -> Result<Vec<ChampionSummary>> {
            Ok(vec![
                champion("Lux", &["Mage", "Support"]),
                champion("Garen", &["Fighter", "Tank"]),
            ])
        }

        async fn champion_detail(&self, id: &ChampionId, _version: &Version) -> Result<ChampionDetail> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChampionDetail {
                summary: champion(id.as_str(), &["Fighter", "Tank"]),
                lore: "Demacia!".to_string(),
                ratings: StatRatings::default(),
                ally_tips: vec![],
            })
        }
    }

    struct TestConfig {
        labels: Vec<TagLabel>,
    }

    impl ConfigProvider for TestConfig {
        fn realms_url(&self) -> &str {
            "https://realms.test/br.json"
        }
        fn cdn_base_url(&self) -> &str {
            "https://cdn.test/cdn/"
        }
        fn locale(&self) -> &str {
            "pt_BR"
        }
        fn version_product(&self) -> &str {
            "item"
        }
        fn primary_map(&self) -> &str {
            "11"
        }
        fn output_path(&self) -> &str {
            "./out"
        }
        fn placeholder_image(&self) -> &str {
            "https://img.test/na.png"
        }
        fn tag_labels(&self) -> &[TagLabel] {
            &self.labels
        }
        fn timeout_seconds(&self) -> Option<u64> {
            None
        }
    }

    fn session(source: Arc<StubSource>, storage: MockStorage) -> Session<StubSource, MockStorage> {
        let config = TestConfig {
            labels: crate::config::default_tag_labels(),
        };
        Session::new(source, storage, &config)
    }

    async fn run_script(session: &mut Session<StubSource, MockStorage>, script: &str) -> String {
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_end_of_input_waits_for_fetch_and_keeps_sort() {
        let storage = MockStorage::default();
        let mut session = session(Arc::new(StubSource::default()), storage.clone());

        let output = run_script(&mut session, "items\nsort cost-desc\n").await;

        let View::Items(view) = session.controller().current_view() else {
            panic!("expected the item list, got {:?}", session.controller().current_view());
        };
        let names: Vec<&str> = view.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Gume", "Anel", "Botas"]);
        assert!(output.contains("Item Catalog (Total: 3, Version 14.1.1)"));

        let page = storage.page().await;
        assert!(page.contains("Item Catalog (Total: 3, Version 14.1.1)"));
        assert!(page.contains(r#"id="sort-cost-desc" class="nav-button sort-button active""#));
    }

    #[tokio::test]
    async fn test_click_uses_bindings_of_current_page() {
        let source = Arc::new(StubSource::default());
        let storage = MockStorage::default();
        let mut session = session(Arc::clone(&source), storage.clone());

        run_script(&mut session, "click landing-champions-link\n").await;
        assert!(matches!(session.controller().current_view(), View::Champions(_)));

        run_script(&mut session, "click champion-card-Garen\n").await;
        assert!(matches!(session.controller().current_view(), View::ChampionDetail(_)));
        assert!(storage.page().await.contains("<h1>Garen</h1>"));

        run_script(&mut session, "click back-to-list-top\nclick champion-card-Garen\n").await;
        assert_eq!(source.detail_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.manifest_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_is_reported_and_session_continues() {
        let mut session = session(Arc::new(StubSource::default()), MockStorage::default());

        let output = run_script(&mut session, "dance\nclick nowhere\nsort cost-asc\nhelp\n").await;

        assert!(output.contains("Unknown command 'dance'"));
        assert!(output.contains("No clickable element 'nowhere'"));
        assert!(output.contains("Item sorting is only available in the items section"));
        assert!(output.contains("Commands:"));
        assert_eq!(session.controller().current_view(), &View::Landing);
    }

    #[tokio::test]
    async fn test_undecodable_line_is_reported_and_session_continues() {
        let mut session = session(Arc::new(StubSource::default()), MockStorage::default());

        let mut output = Vec::new();
        session
            .run(&b"\xff\xfe\nitems\n"[..], &mut output)
            .await
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Unknown command"));
        assert!(matches!(session.controller().current_view(), View::Items(_)));
    }

    #[tokio::test]
    async fn test_last_line_without_newline_is_handled() {
        let mut session = session(Arc::new(StubSource::default()), MockStorage::default());

        run_script(&mut session, "champions").await;

        assert!(matches!(session.controller().current_view(), View::Champions(_)));
    }

    #[tokio::test]
    async fn test_quit_stops_reading_input() {
        let mut session = session(Arc::new(StubSource::default()), MockStorage::default());

        run_script(&mut session, "quit\nitems\n").await;

        assert_eq!(session.controller().current_view(), &View::Landing);
        assert!(!session.controller().is_fetching());
    }

    #[tokio::test]
    async fn test_champion_filter_through_session() {
        let storage = MockStorage::default();
        let mut session = session(Arc::new(StubSource::default()), storage.clone());

        run_script(&mut session, "champions\nfilter Tank\n").await;

        let page = storage.page().await;
        assert!(page.contains("Champions: Tanque (Total: 1, Version 14.1.1)"));
        assert!(page.contains("champion-card-Garen"));
        assert!(!page.contains("champion-card-Lux"));
    }
}
