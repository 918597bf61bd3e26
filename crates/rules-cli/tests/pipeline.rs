//! Integration tests for the generate pipeline.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use rules_cli::pipeline::generate;
use rules_model::RulesDocument;

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("rules_cli_{stamp}"));
    dir
}

fn snapshot_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

const EXPORT: &str = r#"{
    "name": "Pipeline League",
    "season": "2025",
    "status": "in_season",
    "roster_positions": ["QB", "RB", "WR", "BN", "BN"],
    "settings": {
        "num_teams": 10,
        "waiver_type": 1,
        "playoff_teams": 6,
        "playoff_week_start": 15
    },
    "scoring_settings": {
        "pass_td": 4.0, "pass_yd": 0.04, "pass_int": -2.0, "pass_2pt": 2.0,
        "rush_td": 6.0, "rush_yd": 0.1, "rush_2pt": 2.0,
        "rec_td": 6.0, "rec_yd": 0.1, "rec": 1.0,
        "fum_lost": -2.0,
        "xpm": 1.0, "xpmiss": -1.0,
        "fgm_0_19": 3.0, "fgm_20_29": 3.0, "fgm_30_39": 3.0,
        "fgm_40_49": 4.0, "fgm_50_59": 5.0, "fgm_60p": 5.0,
        "fgmiss": -1.0,
        "sack": 1.0, "int": 2.0, "ff": 1.0, "fum_rec": 2.0,
        "def_td": 6.0, "def_st_td": 6.0, "safe": 2.0,
        "pts_allow_0": 10.0, "pts_allow_1_6": 7.0, "pts_allow_7_13": 4.0,
        "pts_allow_14_20": 1.0, "pts_allow_21_27": 0.0,
        "pts_allow_28_34": -1.0, "pts_allow_35p": -4.0
    }
}"#;

#[test]
fn generate_writes_the_rules_document() {
    let dir = temp_dir();
    let input = dir.join("sleeper_league.json");
    let output = dir.join("content").join("rules.json");
    fs::create_dir_all(&dir).expect("create temp dir");
    fs::write(&input, EXPORT).expect("write export");

    let outcome = generate(&input, &output, snapshot_date(), false).expect("generate");
    assert!(outcome.written);
    assert_eq!(outcome.output, output);

    let text = fs::read_to_string(&output).expect("read output");
    let document: RulesDocument = serde_json::from_str(&text).expect("parse output");
    assert_eq!(document, outcome.document);
    assert_eq!(document.season, "2025");
    assert_eq!(document.source_snapshot, "2025-09-01");
    assert_eq!(document.sections.len(), 7);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn dry_run_skips_the_write() {
    let dir = temp_dir();
    let input = dir.join("sleeper_league.json");
    let output = dir.join("rules.json");
    fs::create_dir_all(&dir).expect("create temp dir");
    fs::write(&input, EXPORT).expect("write export");

    let outcome = generate(&input, &output, snapshot_date(), true).expect("generate");
    assert!(!outcome.written);
    assert_eq!(outcome.document.sections.len(), 7);
    assert!(!output.exists());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_fails_without_creating_output() {
    let dir = temp_dir();
    let input = dir.join("absent.json");
    let output = dir.join("rules.json");

    let error = generate(&input, &output, snapshot_date(), false).expect_err("must fail");
    assert!(error.to_string().contains("failed to read"));
    assert!(!output.exists());
}
