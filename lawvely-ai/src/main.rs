//! lawvely-seed - Legislation summarization seeder
//!
//! Fetches legislation texts, runs each through the summarization
//! pipeline (title, summaries, categories, enactment date), and upserts
//! the resulting records into the lawvely database. URLs that fail are
//! logged and skipped; the batch continues.

use anyhow::Result;
use clap::Parser;
use lawvely_common::config::{self, OpenAiConfig};
use lawvely_common::db;
use lawvely_ai::SummarizePipeline;
use std::path::PathBuf;
use tracing::{error, info};

/// UK public acts seeded when no URL list is supplied
const DEFAULT_URLS: [&str; 4] = [
    "https://www.legislation.gov.uk/ukpga/Geo6/14-15/35/contents",
    "https://www.legislation.gov.uk/ukpga/2019/4/contents",
    "https://www.legislation.gov.uk/uksi/1992/3013/made/data.xht?view=snippet&wrap=true",
    "https://www.legislation.gov.uk/ukpga/2018/21/data.xht?view=snippet&wrap=true",
];

#[derive(Parser, Debug)]
#[command(name = "lawvely-seed", about = "Summarize legislation URLs into the lawvely database")]
struct Args {
    /// Root folder holding the lawvely database
    #[arg(long)]
    root_folder: Option<String>,

    /// OpenAI API key (falls back to config file when unset)
    #[arg(long, env = config::OPENAI_API_KEY_ENV)]
    api_key: Option<String>,

    /// TOML file with a top-level `urls` array to seed from
    #[arg(long)]
    urls_file: Option<PathBuf>,

    /// Legislation URLs to seed (overrides the built-in default list)
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting lawvely-seed v{}", env!("CARGO_PKG_VERSION"));

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    let db_path = config::database_path(&root_folder)?;
    info!("Database: {}", db_path.display());

    let pool = db::init_database(&db_path).await?;

    let openai_config = OpenAiConfig::resolve(args.api_key.as_deref())?;
    let pipeline = SummarizePipeline::new(openai_config)?;

    let urls = load_urls(&args)?;
    info!("Seeding {} legislation URLs", urls.len());

    let results = futures::future::join_all(
        urls.iter().map(|url| pipeline.summarize_url(url)),
    )
    .await;

    let mut stored = 0usize;
    let mut skipped = 0usize;

    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(record) => {
                db::upsert_legislation(&pool, &record).await?;
                info!("Stored legislation: {}", record.title);
                stored += 1;
            }
            Err(e) => {
                error!(url = %url, "Skipping legislation: {}", e);
                skipped += 1;
            }
        }
    }

    info!("Seeding complete: {} stored, {} skipped", stored, skipped);

    Ok(())
}

/// URL list priority: explicit CLI URLs, then a `urls` array from the
/// TOML file, then the built-in default list.
fn load_urls(args: &Args) -> Result<Vec<String>> {
    if !args.urls.is_empty() {
        return Ok(args.urls.clone());
    }

    if let Some(path) = &args.urls_file {
        let content = std::fs::read_to_string(path)?;
        let value: toml::Value = toml::from_str(&content)?;
        let urls: Vec<String> = value
            .get("urls")
            .and_then(|v| v.as_array())
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            anyhow::bail!("No `urls` array found in {}", path.display());
        }
        return Ok(urls);
    }

    Ok(DEFAULT_URLS.iter().map(|u| u.to_string()).collect())
}
