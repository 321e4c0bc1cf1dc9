mod common;

use common::{config_for, mock_service, VERSION};
use ddragon_browser::app::snapshot::write_snapshot;
use ddragon_browser::domain::model::ChampionId;
use ddragon_browser::domain::ports::ConfigProvider;
use ddragon_browser::utils::validation::Validate;
use ddragon_browser::{DDragonClient, LocalStorage, TomlConfig};
use httpmock::prelude::*;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_snapshot_writes_list_and_detail_pages() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let server = MockServer::start();
    let mocks = mock_service(&server);
    let config = config_for(&server, &output_path);
    let client = DDragonClient::new(&config).unwrap();
    let storage = LocalStorage::new(output_path);

    let champions = vec![ChampionId::from("Garen"), ChampionId::from("Nobody")];
    let report = assert_ok!(write_snapshot(&client, &storage, &config, &champions).await);

    assert_eq!(report.version.as_str(), VERSION);
    assert_eq!(report.item_count, 3);
    assert_eq!(report.champion_count, 3);
    assert_eq!(
        report.pages,
        vec!["items.html", "champions.html", "champion-Garen.html"]
    );

    let items = std::fs::read_to_string(temp_dir.path().join("items.html")).unwrap();
    assert!(items.contains("Item Catalog (Total: 3, Version 14.1.1)"));

    let list = std::fs::read_to_string(temp_dir.path().join("champions.html")).unwrap();
    let garen = list.find("champion-card-Garen").unwrap();
    let lux = list.find("champion-card-Lux").unwrap();
    let zed = list.find("champion-card-Zed").unwrap();
    assert!(garen < lux && lux < zed);

    let detail = std::fs::read_to_string(temp_dir.path().join("champion-Garen.html")).unwrap();
    assert!(detail.contains("Lutador / Tanque"));

    mocks.realms.assert_hits(1);
    mocks.garen.assert_hits(1);
}

#[tokio::test]
async fn test_snapshot_stops_on_version_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let server = MockServer::start();
    let _realms = server.mock(|when, then| {
        when.method(GET).path("/realms/br.json");
        then.status(500);
    });
    let config = config_for(&server, &output_path);
    let client = DDragonClient::new(&config).unwrap();
    let storage = LocalStorage::new(output_path);

    let result = write_snapshot(&client, &storage, &config, &[]).await;

    assert_err!(&result);
    assert!(!temp_dir.path().join("items.html").exists());
}

#[tokio::test]
async fn test_snapshot_from_config_file_with_env_substitution() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap();
    let normalized_path = temp_path.replace('\\', "/");
    let server = MockServer::start();
    let mocks = mock_service(&server);

    std::env::set_var("DDRAGON_SNAPSHOT_TEST_CDN", server.url("/cdn/"));
    let config_content = format!(
        r#"
[source]
realms_url = "{}"
cdn_base_url = "${{DDRAGON_SNAPSHOT_TEST_CDN}}"

[render]
placeholder_image = "https://img.test/na.png"
tag_labels = [
  {{ tag = "Fighter", label = "Fighter" }},
  {{ tag = "Tank", label = "Tank" }},
]

[load]
output_path = "{}/pages"
"#,
        server.url("/realms/br.json"),
        normalized_path
    );

    let config_path = format!("{}/snapshot.toml", temp_path);
    tokio::fs::write(&config_path, config_content).await?;
    let config = TomlConfig::from_file(&config_path)?;
    assert_ok!(config.validate());

    let client = DDragonClient::new(&config)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let report = write_snapshot(&client, &storage, &config, &[ChampionId::from("Garen")]).await?;

    assert_eq!(report.pages.len(), 3);
    let detail = std::fs::read_to_string(temp_dir.path().join("pages/champion-Garen.html"))?;
    assert!(detail.contains("Fighter / Tank"));
    assert!(detail.contains("this.src=&#39;https://img.test/na.png&#39;"));

    mocks.items.assert();
    mocks.champions.assert();
    Ok(())
}
