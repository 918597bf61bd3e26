//! Tests for rules-model types.

use rules_model::{LeagueConfig, RulesDocument, SOURCE, Section, SectionId};

#[test]
fn league_config_parses_minimal_export() {
    let json = r#"{
        "name": "Test League",
        "season": "2025",
        "status": "in_season"
    }"#;
    let config: LeagueConfig = serde_json::from_str(json).expect("parse config");
    assert_eq!(config.name, "Test League");
    assert_eq!(config.season, "2025");
    assert!(config.roster_positions.is_empty());
    assert!(config.settings.num_teams.is_none());
    assert!(config.scoring_settings.pass_td.is_none());
}

#[test]
fn flags_accept_bool_and_int_encodings() {
    let json = r#"{
        "name": "L", "season": "2025", "status": "complete",
        "settings": {
            "disable_trades": 1,
            "daily_waivers": true,
            "veto_show_votes": 0,
            "pick_trading": false
        }
    }"#;
    let config: LeagueConfig = serde_json::from_str(json).expect("parse config");
    assert_eq!(config.settings.disable_trades, Some(true));
    assert_eq!(config.settings.daily_waivers, Some(true));
    assert_eq!(config.settings.veto_show_votes, Some(false));
    assert_eq!(config.settings.pick_trading, Some(false));
}

#[test]
fn unknown_export_fields_are_ignored() {
    let json = r#"{
        "name": "L", "season": "2025", "status": "drafting",
        "total_rosters": 12,
        "settings": {"num_teams": 12, "league_average_match": 0},
        "scoring_settings": {"pass_td": 4.0, "bonus_rec_te": 0.5}
    }"#;
    let config: LeagueConfig = serde_json::from_str(json).expect("parse config");
    assert_eq!(config.settings.num_teams, Some(12));
    assert_eq!(config.scoring_settings.pass_td, Some(4.0));
}

#[test]
fn section_ids_are_unique_and_ordered() {
    let ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "league", "rosters", "scoring", "waivers", "trades", "playoffs", "policies",
        ]
    );
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn section_new_fills_canonical_title() {
    let section = Section::new(SectionId::Waivers, vec!["Type: FAAB".to_string()]);
    assert_eq!(section.title, "Waivers & FAAB");
    assert_eq!(section.items.len(), 1);
}

#[test]
fn document_serializes_with_lowercase_ids() {
    let doc = RulesDocument {
        source: SOURCE.to_string(),
        source_snapshot: "2026-08-29".to_string(),
        season: "2025".to_string(),
        sections: vec![Section::new(SectionId::League, vec![])],
    };
    let json = serde_json::to_string(&doc).expect("serialize document");
    assert!(json.contains("\"id\":\"league\""));
    assert!(json.contains("\"source\":\"sleeper\""));
    let round: RulesDocument = serde_json::from_str(&json).expect("deserialize document");
    assert_eq!(round, doc);
}
