//! Card matching, rules-text cleanup and display formatting

use crate::card::{display_or_na, CardRecord, NOT_AVAILABLE};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[x]`, `[b]`, `[/b]` style markup
    static ref BRACKET_TAG: Regex = Regex::new(r"\[/?[^\]]+\]").unwrap();
    /// `<b>`, `</i>` style markup
    static ref ANGLE_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Split pasted input into trimmed, non-empty query lines
pub fn parse_queries(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip markup and `$` placeholders from card rules text
pub fn clean_text(raw: &str) -> String {
    let without_brackets = BRACKET_TAG.replace_all(raw, "");
    let without_tags = ANGLE_TAG.replace_all(&without_brackets, "");
    without_tags.replace('$', "").trim().to_string()
}

/// Render one card as its six-line display block
pub fn format_card(card: &CardRecord) -> String {
    let text = clean_text(card.text.as_deref().unwrap_or(NOT_AVAILABLE));

    format!(
        "Card id: {}\nName: {}\nAttack: {}\nHealth: {}\nMana Cost: {}\nCard Text: {}\n",
        display_or_na(card.id.as_deref()),
        display_or_na(card.name.as_deref()),
        display_or_na(card.attack),
        display_or_na(card.health),
        display_or_na(card.cost),
        text,
    )
}

fn query_matches(query: &str, name_key: &str, id_key: &str) -> bool {
    query == name_key || query == id_key || name_key.contains(query) || id_key.contains(query)
}

/// Find every card matched by at least one query.
///
/// Results follow catalog order. A card is formatted once, for the first
/// query that matches it. Callers must drop empty queries first: an empty
/// query matches every card.
pub fn search_cards(cards: &[CardRecord], queries: &[String]) -> Vec<String> {
    let queries_lower: Vec<String> = queries.iter().map(|q| q.to_lowercase()).collect();

    let results: Vec<String> = cards
        .iter()
        .filter(|card| {
            let name_key = card.name_key();
            let id_key = card.id_key();
            queries_lower
                .iter()
                .any(|q| query_matches(q, &name_key, &id_key))
        })
        .map(format_card)
        .collect();

    log::debug!(
        "{} of {} cards matched {} queries",
        results.len(),
        cards.len(),
        queries_lower.len()
    );

    results
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
