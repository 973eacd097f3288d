//! Hearthstone Card Search
//!
//! Looks up pasted card names or IDs against the HearthstoneJSON catalog and
//! renders the matching cards as plain text blocks.

pub mod card;
pub mod config;
pub mod error;
pub mod hearthstone;
pub mod paginate;
pub mod search;
pub mod store;
pub mod web;

pub use card::CardRecord;
pub use config::SearchConfig;
pub use error::{FetchError, SearchError};
pub use hearthstone::CardFetcher;
pub use paginate::{paginate, Page, DEFAULT_PER_PAGE};
pub use search::{clean_text, format_card, parse_queries, search_cards};
pub use store::{InMemorySearchStore, SearchStore};
