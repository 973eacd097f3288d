//! HearthstoneJSON client for fetching the full card catalog
//!
//! Every call is a fresh request; nothing is cached or retried.

use crate::card::CardRecord;
use crate::config::SearchConfig;
use crate::error::{FetchError, Result};
use reqwest::StatusCode;
use serde::Deserialize;

/// Top-level catalog payload.
///
/// The live endpoint serves a bare array of cards; mirrors that wrap the
/// array in an object expose it under `cards`. Entries are decoded one by
/// one so a single malformed record cannot sink the whole catalog.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogEnvelope {
    Bare(Vec<serde_json::Value>),
    Wrapped { cards: Vec<serde_json::Value> },
}

impl CatalogEnvelope {
    fn into_cards(self) -> Vec<CardRecord> {
        let entries = match self {
            CatalogEnvelope::Bare(entries) => entries,
            CatalogEnvelope::Wrapped { cards } => cards,
        };

        let total = entries.len();
        let cards: Vec<CardRecord> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(card) => Some(card),
                Err(e) => {
                    log::debug!("Skipping malformed catalog entry: {}", e);
                    None
                }
            })
            .collect();

        if cards.len() < total {
            log::warn!("Skipped {} malformed catalog entries", total - cards.len());
        }

        cards
    }
}

/// Fetches the card catalog from a fixed endpoint
#[derive(Debug, Clone)]
pub struct CardFetcher {
    client: reqwest::Client,
    api_url: String,
    user_agent: String,
}

impl CardFetcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Fetch every card in the catalog (async)
    pub async fn fetch_all_cards(&self) -> Result<Vec<CardRecord>> {
        log::info!("Fetching card catalog from {}", self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Card catalog request returned {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            log::warn!("Card catalog response was empty");
            return Err(FetchError::EmptyBody);
        }

        let envelope: CatalogEnvelope = serde_json::from_str(&body)?;
        let cards = envelope.into_cards();

        log::info!("Fetched {} cards", cards.len());

        Ok(cards)
    }
}

#[cfg(test)]
#[path = "hearthstone_tests.rs"]
mod tests;
