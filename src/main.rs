//! docsettings main entry point

use anyhow::Context;
use clap::Parser;
use docsettings_api::start_server;
use docsettings_config::Config;
use docsettings_core::{SettingsStore, YamlFileBackend};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "docsettings")]
#[command(author = "docsettings contributors")]
#[command(version = "0.1.0")]
#[command(about = "Settings service for the document question-answering pipeline", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Settings document path (overrides storage.settings_path)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Bind host (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config_found = args.config.exists();
    let mut config = if config_found {
        Config::load(&args.config)
            .map_err(|e| anyhow::anyhow!("[{}] {}", e.code(), e))
            .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?
    } else {
        Config::default()
    };
    if let Some(settings) = args.settings {
        config.storage.settings_path = settings;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.code(), e))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if !config_found {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }
    log::info!(
        "Config loaded: settings path={}, bind={}",
        config.storage.settings_path.display(),
        config.bind_address()
    );

    let rt = Runtime::new()?;
    rt.block_on(async {
        let backend = Arc::new(YamlFileBackend::new(config.storage.settings_path.clone()));
        let store = SettingsStore::open(backend)
            .await
            .context("Failed to load settings")?;

        for problem in store.validate_paths() {
            log::warn!("{}", problem);
        }

        start_server(config, Arc::new(RwLock::new(store))).await
    })
}
