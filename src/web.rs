//! Web server for the card search UI
//!
//! Serves the static pages and a small JSON API the search page talks to.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::hearthstone::CardFetcher;
use crate::paginate::paginate;
use crate::search::{parse_queries, search_cards};
use crate::store::SearchStore;

/// Shared application state (catalog client + saved-search store)
#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<CardFetcher>,
    store: Arc<dyn SearchStore>,
    per_page: usize,
}

impl AppState {
    pub fn new(config: &SearchConfig, store: Arc<dyn SearchStore>) -> Self {
        Self {
            fetcher: Arc::new(CardFetcher::new(config)),
            store,
            per_page: config.per_page,
        }
    }
}

/// Search form submission
#[derive(Debug, Deserialize)]
struct SearchRequest {
    /// Newline-separated card names or IDs
    #[serde(default)]
    queries: String,
    #[serde(default)]
    page: Option<i64>,
    /// Saves the submission under this key when present
    #[serde(default)]
    user: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    user: String,
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// One page of formatted card blocks
#[derive(Debug, Serialize)]
struct SearchPage {
    cards: Vec<String>,
    page: usize,
    total_pages: usize,
    total_results: usize,
}

impl SearchPage {
    fn empty() -> Self {
        Self {
            cards: Vec::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// GET / - Serve the search page
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /about
async fn about_handler() -> Html<&'static str> {
    Html(include_str!("../static/about.html"))
}

/// GET /contact
async fn contact_handler() -> Html<&'static str> {
    Html(include_str!("../static/contact.html"))
}

/// Fetch the catalog and run every query against it
async fn run_search(fetcher: &CardFetcher, queries: &[String]) -> Result<Vec<String>, SearchError> {
    let cards = fetcher.fetch_all_cards().await?;
    let results = search_cards(&cards, queries);

    if results.is_empty() {
        return Err(SearchError::NoMatches);
    }

    Ok(results)
}

/// POST /api/search
async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> (StatusCode, Json<ApiResponse<SearchPage>>) {
    let queries = parse_queries(&request.queries);
    if queries.is_empty() {
        return (StatusCode::OK, Json(ApiResponse::ok(SearchPage::empty())));
    }

    let requested = usize::try_from(request.page.unwrap_or(1)).unwrap_or(1).max(1);

    // Later pages re-post the same submission; only the first page is saved.
    if requested == 1 {
        if let Some(user) = request.user.as_deref().filter(|u| !u.trim().is_empty()) {
            state.store.append(user.trim(), request.queries.clone());
        }
    }

    log::info!("Searching for {} queries (page {})", queries.len(), requested);

    match run_search(&state.fetcher, &queries).await {
        Ok(results) => {
            let page = paginate(&results, requested, state.per_page);

            (
                StatusCode::OK,
                Json(ApiResponse::ok(SearchPage {
                    cards: page.items.to_vec(),
                    page: page.page,
                    total_pages: page.total_pages,
                    total_results: results.len(),
                })),
            )
        }
        Err(SearchError::NoMatches) => {
            log::info!("No cards matched {:?}", queries);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::err(SearchError::NoMatches.to_string())),
            )
        }
        Err(e) => {
            log::error!("Search error: {}", e);
            (StatusCode::BAD_GATEWAY, Json(ApiResponse::err(e.to_string())))
        }
    }
}

/// GET /api/history?user={user}
async fn history_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::ok(state.store.get(params.user.trim())))
}

/// Build the web server router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/contact", get(contact_handler))
        .route("/api/search", post(search_handler))
        .route("/api/history", get(history_handler))
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces) to work with Docker port mapping.
pub async fn serve(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Web UI listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Web UI stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
#[path = "web_tests.rs"]
mod tests;
