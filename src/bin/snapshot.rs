use clap::Parser;
use ddragon_browser::app::snapshot::{champion_page, write_snapshot};
use ddragon_browser::domain::model::ChampionId;
use ddragon_browser::domain::ports::ConfigProvider;
use ddragon_browser::utils::error::ErrorSeverity;
use ddragon_browser::utils::{logger, validation::Validate};
use ddragon_browser::{DDragonClient, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "snapshot")]
#[command(about = "Render the item catalog and champion pages once, without an interactive session")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "ddragon.toml")]
    config: String,

    /// Champion id to render a detail page for (repeatable)
    #[arg(long = "champion")]
    champions: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be fetched and written without making any request
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting snapshot");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let champions: Vec<ChampionId> = args
        .champions
        .iter()
        .map(|id| ChampionId::from(id.trim()))
        .collect();

    display_config_summary(&config, &args, &champions);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No requests will be made");
        return Ok(());
    }

    let client = match DDragonClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let storage = LocalStorage::new(config.output_path().to_string());

    match write_snapshot(&client, &storage, &config, &champions).await {
        Ok(report) => {
            tracing::info!("✅ Snapshot completed for version {}", report.version);
            println!("✅ Snapshot completed (version {})", report.version);
            println!(
                "📊 {} items, {} champions",
                report.item_count, report.champion_count
            );
            for page in &report.pages {
                println!("📁 {}/{}", storage.base_path(), page);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Snapshot failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args, champions: &[ChampionId]) {
    println!("📋 Configuration Summary:");
    println!("  Realms: {}", config.realms_url());
    println!("  CDN: {}", config.cdn_base_url());
    println!("  Locale: {}", config.locale());
    println!("  Version product: {}", config.version_product());
    println!("  Primary map: {}", config.primary_map());
    println!("  Output: {}", config.output_path());

    if let Some(timeout) = config.timeout_seconds() {
        println!("  Timeout: {}s", timeout);
    }

    println!("  Pages:");
    println!("    items.html");
    println!("    champions.html");
    for id in champions {
        println!("    {}", champion_page(id));
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
