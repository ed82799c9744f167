use anyhow::Result;
use clap::{Parser, ValueEnum};
use movie_scout::{
    format_movie_result, format_trending_entry, logging, record_candidate, InteractiveSearch,
    MetadataClient, MetadataConfig, TrendStoreClient, TrendStoreConfig,
};
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "movie-scout",
    version,
    about = "Terminal client for discovering movies and tracking trending searches",
    long_about = None
)]
struct Cli {
    /// Search query; omit it to list the most popular movies instead
    query: Option<String>,

    /// Bearer token for the movie metadata API
    #[arg(long, env = "TMDB_API_TOKEN")]
    api_token: String,

    /// Override the metadata API base URL
    #[arg(long, env = "TMDB_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Base URL of the trend counter store (optional; trending features are
    /// disabled without it)
    #[arg(long, env = "TREND_STORE_URL")]
    trend_store_url: Option<String>,

    /// API key for the trend counter store
    #[arg(long, env = "TREND_STORE_KEY")]
    trend_store_key: Option<String>,

    /// Maximum number of results to print
    #[arg(short = 'n', long, default_value = "20")]
    limit: usize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Interactive search mode (search-as-you-type TUI)
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Print the current top trending searches and exit
    #[arg(long)]
    trending: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn build_trend_store(cli: &Cli) -> Option<TrendStoreClient> {
    match (&cli.trend_store_url, &cli.trend_store_key) {
        (Some(url), Some(key)) => Some(TrendStoreClient::new(TrendStoreConfig {
            base_url: url.clone(),
            api_key: key.clone(),
        })),
        (Some(_), None) | (None, Some(_)) => {
            warn!("trend store needs both --trend-store-url and --trend-store-key; disabled");
            None
        }
        (None, None) => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing();

    let mut config = MetadataConfig::new(cli.api_token.clone());
    if let Some(base_url) = &cli.api_base_url {
        config = config.with_base_url(base_url.clone());
    }
    let metadata = MetadataClient::new(config);
    let trend_store = build_trend_store(&cli);

    if cli.interactive {
        let mut interactive = InteractiveSearch::new(metadata, trend_store);
        return interactive.run();
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if cli.trending {
        return runtime.block_on(print_trending(&cli, trend_store.as_ref()));
    }

    runtime.block_on(run_query(&cli, &metadata, trend_store.as_ref()))
}

async fn run_query(
    cli: &Cli,
    metadata: &MetadataClient,
    trend_store: Option<&TrendStoreClient>,
) -> Result<()> {
    let query = cli.query.as_deref().unwrap_or("");

    let mut results = metadata
        .fetch(query)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.user_message()))?;

    // Record the search before trimming for display; the counter is keyed by
    // the query and cached from the top-ranked result. Failures only warn.
    if let (Some(store), Some(top)) = (trend_store, record_candidate(query, &results)) {
        if let Err(err) = store.record_search(query, top).await {
            warn!(%query, %err, "failed to record search count");
        }
    }

    results.truncate(cli.limit);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No movies found.");
            } else {
                for movie in &results {
                    println!("{}", format_movie_result(movie, !cli.no_color));
                }
            }
        }
    }

    Ok(())
}

async fn print_trending(cli: &Cli, trend_store: Option<&TrendStoreClient>) -> Result<()> {
    let store = trend_store.ok_or_else(|| {
        anyhow::anyhow!("no trend store configured (set TREND_STORE_URL and TREND_STORE_KEY)")
    })?;

    let entries = store
        .top_entries(cli.limit)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.user_message()))?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No trending searches yet.");
            } else {
                for (i, entry) in entries.iter().enumerate() {
                    println!("{}", format_trending_entry(i + 1, entry, !cli.no_color));
                }
            }
        }
    }

    Ok(())
}
