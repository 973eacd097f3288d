//! Hearthstone Card Search - web UI
//!
//! Serves the search page and JSON API on the given port.

use clap::Parser;
use hearthstone_search::config::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use hearthstone_search::web::{self, AppState};
use hearthstone_search::{InMemorySearchStore, SearchConfig, DEFAULT_PER_PAGE};
use std::sync::Arc;

/// Hearthstone card search server - looks up card names or IDs in the HearthstoneJSON catalog
#[derive(Parser, Debug)]
#[command(name = "hearthstone_search")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port for the web UI
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Card catalog endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// User-Agent header sent to the catalog endpoint
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Search results shown per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    per_page: usize,
}

impl From<Args> for SearchConfig {
    fn from(args: Args) -> Self {
        Self {
            api_url: args.api_url,
            user_agent: args.user_agent,
            per_page: args.per_page,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let port = args.port;
    let config = SearchConfig::from(args);

    log::info!("Starting hearthstone_search...");
    log::info!("Card catalog: {}", config.api_url);

    let state = AppState::new(&config, Arc::new(InMemorySearchStore::new()));

    if let Err(e) = web::serve(state, port).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
