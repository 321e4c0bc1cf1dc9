use clap::Parser;
use ddragon_browser::domain::ports::ConfigProvider;
use ddragon_browser::utils::error::{CatalogError, ErrorSeverity};
use ddragon_browser::utils::{logger, validation::Validate};
use ddragon_browser::{CliConfig, DDragonClient, LocalStorage, Session, TomlConfig};
use std::sync::Arc;
use tokio::io::BufReader;

fn exit_code(error: &CatalogError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: &CatalogError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
    std::process::exit(exit_code(error).max(1));
}

/// Flags alone, or the TOML file named by `--config` with logging switches merged in.
fn load_config(cli: CliConfig) -> Result<(Box<dyn ConfigProvider>, bool, bool), CatalogError> {
    match &cli.config {
        Some(path) => {
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            let verbose = cli.verbose || toml.verbose();
            let json = cli.log_json || toml.json_logs();
            Ok((Box::new(toml), verbose, json))
        }
        None => {
            cli.validate()?;
            let (verbose, json) = (cli.verbose, cli.log_json);
            Ok((Box::new(cli), verbose, json))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();
    let config_path = cli.config.clone();

    let (config, verbose, json) = match load_config(cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            logger::init_cli_logger(false);
            if let Some(path) = &config_path {
                eprintln!("❌ Failed to load config file '{}'", path);
            }
            fail(&e);
        }
    };

    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting ddragon-browser");
    if let Some(path) = &config_path {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!(
        "Realms: {}, CDN: {}, locale: {}, output: {}",
        config.realms_url(),
        config.cdn_base_url(),
        config.locale(),
        config.output_path()
    );

    let source = match DDragonClient::new(config.as_ref()) {
        Ok(client) => Arc::new(client),
        Err(e) => fail(&e),
    };
    let storage = LocalStorage::new(config.output_path().to_string());
    let page_path = format!(
        "{}/{}",
        storage.base_path(),
        ddragon_browser::app::session::INDEX_PAGE
    );
    let mut session = Session::new(source, storage, config.as_ref());

    println!("🎮 Data Dragon browser. Type 'help' for commands.");
    println!("📁 Pages are written to: {}", page_path);

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    if let Err(e) = session.run(input, &mut output).await {
        let code = exit_code(&e);
        tracing::error!(
            "❌ Session ended with an error: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
