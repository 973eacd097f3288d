//! Runtime configuration for the search service

use crate::paginate::DEFAULT_PER_PAGE;

/// HearthstoneJSON full card catalog (latest build, English)
pub const DEFAULT_API_URL: &str = "https://api.hearthstonejson.com/v1/latest/enUS/cards.json";

/// User-Agent sent with every catalog request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; HearthstoneCardSearch/1.0)";

/// Settings shared by the fetcher and the web layer
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_url: String,
    pub user_agent: String,
    pub per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
