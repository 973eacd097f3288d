//! Tests for query parsing, matching, cleanup and formatting.

use crate::card::CardRecord;
use crate::search::{clean_text, format_card, parse_queries, search_cards};

fn make_card(id: &str, name: &str) -> CardRecord {
    CardRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        attack: Some(1),
        health: Some(1),
        cost: Some(1),
        text: None,
    }
}

fn fireball() -> CardRecord {
    serde_json::from_str(
        r#"{"id":"CS2_029","name":"Fireball","attack":null,"health":null,"cost":4,"text":"Deal $6 damage."}"#,
    )
    .unwrap()
}

fn queries(items: &[&str]) -> Vec<String> {
    items.iter().map(|q| q.to_string()).collect()
}

// ── parse_queries ────────────────────────────────────────────────────

#[test]
fn parse_queries_trims_and_drops_blank_lines() {
    let parsed = parse_queries("  Fireball \n\n   \r\nEX1_116\n\tfrostbolt\t");
    assert_eq!(parsed, vec!["Fireball", "EX1_116", "frostbolt"]);
}

#[test]
fn parse_queries_empty_input() {
    assert!(parse_queries("").is_empty());
    assert!(parse_queries("\n  \n").is_empty());
}

// ── clean_text ───────────────────────────────────────────────────────

#[test]
fn clean_text_removes_bracket_tags() {
    assert_eq!(clean_text("[x]Taunt. [b]Bold[/b]"), "Taunt. Bold");
}

#[test]
fn clean_text_removes_html_tags() {
    assert_eq!(
        clean_text("<b>Battlecry:</b> Deal <i>2</i> damage."),
        "Battlecry: Deal 2 damage."
    );
}

#[test]
fn clean_text_removes_dollar_signs_and_trims() {
    assert_eq!(clean_text("  Deal $6 damage.  "), "Deal 6 damage.");
}

#[test]
fn clean_text_mixed_markup() {
    assert_eq!(
        clean_text("[x]<b>Taunt</b>\nDeal $3 damage to all minions."),
        "Taunt\nDeal 3 damage to all minions."
    );
}

#[test]
fn clean_text_is_idempotent() {
    let samples = [
        "[x]<b>Taunt</b> Deal $6 damage.",
        "<<b>>nested [[x]] tags$$",
        "<a[b]> and [<i>] and $[c]$",
        "plain text",
        "",
    ];
    for sample in samples {
        let once = clean_text(sample);
        assert_eq!(clean_text(&once), once, "not idempotent for {sample:?}");
    }
}

// ── format_card ──────────────────────────────────────────────────────

#[test]
fn format_card_exact_shape() {
    let block = format_card(&CardRecord {
        id: Some("EX1_116".to_string()),
        name: Some("Leeroy Jenkins".to_string()),
        attack: Some(6),
        health: Some(2),
        cost: Some(5),
        text: Some("<b>Charge</b>".to_string()),
    });

    assert_eq!(
        block,
        "Card id: EX1_116\nName: Leeroy Jenkins\nAttack: 6\nHealth: 2\nMana Cost: 5\nCard Text: Charge\n"
    );
}

#[test]
fn format_card_missing_fields_render_na() {
    let block = format_card(&CardRecord {
        id: Some("GAME_005".to_string()),
        name: Some("The Coin".to_string()),
        ..Default::default()
    });

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "Attack: N/A");
    assert_eq!(lines[3], "Health: N/A");
    assert_eq!(lines[4], "Mana Cost: N/A");
    assert_eq!(lines[5], "Card Text: N/A");
}

#[test]
fn format_card_without_id_or_name() {
    let block = format_card(&CardRecord::default());
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], "Card id: N/A");
    assert_eq!(lines[1], "Name: N/A");
}

// ── search_cards ─────────────────────────────────────────────────────

#[test]
fn search_fireball_scenario() {
    let results = search_cards(&[fireball()], &queries(&["fireball"]));

    assert_eq!(results.len(), 1);
    let block = &results[0];
    assert!(block.contains("Mana Cost: 4"));
    assert!(block.contains("Attack: N/A"));
    assert!(block.contains("Health: N/A"));
    assert!(block.contains("Card Text: Deal 6 damage."));
}

#[test]
fn search_exact_name_is_case_insensitive() {
    let cards = vec![make_card("CS2_024", "Frostbolt"), fireball()];
    let results = search_cards(&cards, &queries(&["FIREBALL"]));

    assert_eq!(results.len(), 1);
    assert!(results[0].starts_with("Card id: CS2_029\nName: Fireball\n"));
}

#[test]
fn search_substring_of_name_or_id() {
    let cards = vec![
        make_card("CS2_024", "Frostbolt"),
        make_card("EX1_275", "Cone of Cold"),
        make_card("NEW1_021", "Doomsayer"),
    ];

    let by_name = search_cards(&cards, &queries(&["bolt"]));
    assert_eq!(by_name.len(), 1);
    assert!(by_name[0].contains("Name: Frostbolt"));

    let by_id = search_cards(&cards, &queries(&["ex1_"]));
    assert_eq!(by_id.len(), 1);
    assert!(by_id[0].contains("Name: Cone of Cold"));
}

#[test]
fn search_card_matching_two_queries_appears_once() {
    let cards = vec![fireball()];
    let results = search_cards(&cards, &queries(&["fire", "ball", "CS2_029"]));
    assert_eq!(results.len(), 1);
}

#[test]
fn search_preserves_catalog_order() {
    let cards = vec![
        make_card("A_1", "Zombie Chow"),
        make_card("B_2", "Abomination"),
        make_card("C_3", "Mad Scientist"),
    ];
    let results = search_cards(&cards, &queries(&["mad", "zombie", "abom"]));

    assert_eq!(results.len(), 3);
    assert!(results[0].contains("Zombie Chow"));
    assert!(results[1].contains("Abomination"));
    assert!(results[2].contains("Mad Scientist"));
}

#[test]
fn search_card_without_name_matches_on_id() {
    let cards = vec![CardRecord {
        id: Some("HERO_08".to_string()),
        ..Default::default()
    }];

    assert_eq!(search_cards(&cards, &queries(&["hero_08"])).len(), 1);
    assert!(search_cards(&cards, &queries(&["jaina"])).is_empty());
}

#[test]
fn search_no_matches_returns_empty() {
    let cards = vec![fireball(), make_card("CS2_024", "Frostbolt")];
    assert!(search_cards(&cards, &queries(&["pyroblast"])).is_empty());
}

#[test]
fn search_no_queries_returns_empty() {
    assert!(search_cards(&[fireball()], &[]).is_empty());
}
