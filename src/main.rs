use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zipsvr::{
    config::Config,
    index::CityIndex,
    ingestor::{DatasetFormat, DatasetLoader},
    services::ZipLookupService,
    web::{AppState, WebServer},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "zipsvr")]
#[command(version)]
#[command(about = "Look up postal codes by city name over HTTP")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Listening address, e.g. localhost:8000 (overrides ADDR)
    #[arg(short, long, value_name = "ADDR")]
    addr: Option<String>,

    /// Dataset file path
    #[arg(short, long, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// Dataset format (csv or json); inferred from the extension when omitted
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<DatasetFormat>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

impl Cli {
    fn apply_to(&self, config: &mut Config) {
        if let Some(addr) = &self.addr {
            config.web.addr = Some(addr.clone());
        }
        if let Some(dataset) = &self.dataset {
            config.dataset.path = dataset.clone();
        }
        if let Some(format) = self.format {
            config.dataset.format = Some(format);
        }
    }
}

fn init_tracing(cli: &Cli) {
    let log_filter = if cli.log_level == "trace" {
        format!("zipsvr={},tower_http=trace", cli.log_level)
    } else {
        format!("zipsvr={}", cli.log_level)
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    info!("Starting zipsvr v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env()?;
    cli.apply_to(&mut config);

    config.bind_addr()?;

    let loader = DatasetLoader::from_config(&config.dataset)?;
    info!(
        "Loading {} dataset from {}",
        loader.format(),
        config.dataset.path.display()
    );
    let records = loader
        .load_from_path(&config.dataset.path)
        .with_context(|| format!("failed to load {}", config.dataset.path.display()))?;
    info!("loaded {} zips", records.len());

    let index = CityIndex::build(records);
    let stats = index.stats();
    info!(
        records = stats.records,
        cities = stats.cities,
        largest_group = stats.largest_group,
        "City index built"
    );

    let state = AppState::new(ZipLookupService::new(index));
    let server = WebServer::new(&config, state)?;

    info!("Binding to {}", server.addr());
    server.serve().await?;

    Ok(())
}
