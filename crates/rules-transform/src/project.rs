//! Projection from a league export to the display rules document.
//!
//! Pure aside from the injected snapshot date: the same config and date
//! always produce byte-identical output. Sections are built in the fixed
//! [`SectionId::ALL`] order regardless of input content.

use chrono::NaiveDate;
use tracing::debug;

use rules_model::{
    LeagueConfig, LeagueSettings, Result, RulesDocument, RulesError, SOURCE, ScoringSettings,
    Section, SectionId,
};

use crate::format::{
    bench_slots, is_set, join_positions, or_na, or_zero, points_display, undef, waiver_type_label,
};

/// Build the rules document for `config`, stamped with `snapshot`.
///
/// # Errors
///
/// Returns [`RulesError::Access`] on the first absent scoring field. The
/// scoring settings are mandatory in the export; nothing is defaulted there.
pub fn project(config: &LeagueConfig, snapshot: NaiveDate) -> Result<RulesDocument> {
    let sections = vec![
        league_section(config),
        rosters_section(config),
        scoring_section(&config.scoring_settings)?,
        waivers_section(&config.settings),
        trades_section(&config.settings),
        playoffs_section(&config.settings),
        policies_section(&config.settings),
    ];
    for section in &sections {
        debug!(id = section.id.as_str(), items = section.items.len(), "built section");
    }
    Ok(RulesDocument {
        source: SOURCE.to_string(),
        source_snapshot: snapshot.format("%Y-%m-%d").to_string(),
        season: config.season.clone(),
        sections,
    })
}

fn league_section(config: &LeagueConfig) -> Section {
    Section::new(
        SectionId::League,
        vec![
            format!("Name: {}", config.name),
            format!("Season: {}", config.season),
            format!("Teams: {}", or_na(config.settings.num_teams)),
            format!("Status: {}", config.status),
        ],
    )
}

fn rosters_section(config: &LeagueConfig) -> Section {
    Section::new(
        SectionId::Rosters,
        vec![
            format!("Positions: {}", join_positions(&config.roster_positions)),
            format!("Bench slots: {}", bench_slots(&config.roster_positions)),
            format!(
                "Max substitutions per week: {}",
                or_zero(config.settings.max_subs)
            ),
        ],
    )
}

fn scoring_section(scoring: &ScoringSettings) -> Result<Section> {
    // Required at point of use: fail on the first absent field rather than
    // pre-validating the whole record.
    let p = |value: Option<f64>, field: &'static str| -> Result<String> {
        value
            .map(points_display)
            .ok_or(RulesError::Access { field })
    };
    Ok(Section::new(
        SectionId::Scoring,
        vec![
            format!(
                "Passing: {} per pass TD, {} per pass yard, {} per INT, +{} for 2PT",
                p(scoring.pass_td, "scoring_settings.pass_td")?,
                p(scoring.pass_yd, "scoring_settings.pass_yd")?,
                p(scoring.pass_int, "scoring_settings.pass_int")?,
                p(scoring.pass_2pt, "scoring_settings.pass_2pt")?,
            ),
            format!(
                "Rushing: {} per rush TD, {} per rush yard, +{} for 2PT",
                p(scoring.rush_td, "scoring_settings.rush_td")?,
                p(scoring.rush_yd, "scoring_settings.rush_yd")?,
                p(scoring.rush_2pt, "scoring_settings.rush_2pt")?,
            ),
            format!(
                "Receiving: {} per rec TD, {} per rec yard, PPR = {}",
                p(scoring.rec_td, "scoring_settings.rec_td")?,
                p(scoring.rec_yd, "scoring_settings.rec_yd")?,
                p(scoring.rec, "scoring_settings.rec")?,
            ),
            format!(
                "Turnovers: Fumble lost {}",
                p(scoring.fum_lost, "scoring_settings.fum_lost")?,
            ),
            format!(
                "Kicking: XP {}, XP miss {}, FG 0–19:{}, 20–29:{}, 30–39:{}, 40–49:{}, 50–59:{}, 60+:{}, FG miss {}",
                p(scoring.xpm, "scoring_settings.xpm")?,
                p(scoring.xpmiss, "scoring_settings.xpmiss")?,
                p(scoring.fgm_0_19, "scoring_settings.fgm_0_19")?,
                p(scoring.fgm_20_29, "scoring_settings.fgm_20_29")?,
                p(scoring.fgm_30_39, "scoring_settings.fgm_30_39")?,
                p(scoring.fgm_40_49, "scoring_settings.fgm_40_49")?,
                p(scoring.fgm_50_59, "scoring_settings.fgm_50_59")?,
                p(scoring.fgm_60p, "scoring_settings.fgm_60p")?,
                p(scoring.fgmiss, "scoring_settings.fgmiss")?,
            ),
            format!(
                "Defense/ST: Sack {}, INT {}, FF {}, FR {}, TD {}, ST/DEF TD {}, Safety {}",
                p(scoring.sack, "scoring_settings.sack")?,
                p(scoring.int, "scoring_settings.int")?,
                p(scoring.ff, "scoring_settings.ff")?,
                p(scoring.fum_rec, "scoring_settings.fum_rec")?,
                p(scoring.def_td, "scoring_settings.def_td")?,
                p(scoring.def_st_td, "scoring_settings.def_st_td")?,
                p(scoring.safe, "scoring_settings.safe")?,
            ),
            format!(
                "Points allowed: 0={}, 1–6={}, 7–13={}, 14–20={}, 21–27={}, 28–34={}, 35+={}",
                p(scoring.pts_allow_0, "scoring_settings.pts_allow_0")?,
                p(scoring.pts_allow_1_6, "scoring_settings.pts_allow_1_6")?,
                p(scoring.pts_allow_7_13, "scoring_settings.pts_allow_7_13")?,
                p(scoring.pts_allow_14_20, "scoring_settings.pts_allow_14_20")?,
                p(scoring.pts_allow_21_27, "scoring_settings.pts_allow_21_27")?,
                p(scoring.pts_allow_28_34, "scoring_settings.pts_allow_28_34")?,
                p(scoring.pts_allow_35p, "scoring_settings.pts_allow_35p")?,
            ),
        ],
    ))
}

fn waivers_section(settings: &LeagueSettings) -> Section {
    Section::new(
        SectionId::Waivers,
        vec![
            format!("Type: {}", waiver_type_label(settings.waiver_type)),
            format!(
                "Budget: ${} (min bid ${})",
                or_zero(settings.waiver_budget),
                or_zero(settings.waiver_bid_min),
            ),
            format!(
                "Daily waivers: {}; processing hour: {}:00",
                if is_set(settings.daily_waivers) { "on" } else { "off" },
                undef(settings.daily_waivers_hour),
            ),
            format!("Clear time (days): {}", or_na(settings.waiver_clear_days)),
        ],
    )
}

fn trades_section(settings: &LeagueSettings) -> Section {
    // Trades are allowed unless the export explicitly disables them.
    let trades_allowed = !is_set(settings.disable_trades);
    Section::new(
        SectionId::Trades,
        vec![
            format!(
                "Trades allowed: {}",
                if trades_allowed { "yes" } else { "no" }
            ),
            format!("Veto votes needed: {}", undef(settings.veto_votes_needed)),
            format!(
                "Veto vote visibility: {}",
                if is_set(settings.veto_show_votes) {
                    "shown"
                } else {
                    "hidden"
                }
            ),
            format!(
                "Trade review window (days): {}",
                undef(settings.trade_review_days)
            ),
            format!("Trade deadline: week {}", undef(settings.trade_deadline)),
        ],
    )
}

fn playoffs_section(settings: &LeagueSettings) -> Section {
    Section::new(
        SectionId::Playoffs,
        vec![
            format!("Teams: {}", undef(settings.playoff_teams)),
            format!("Start week: {}", undef(settings.playoff_week_start)),
        ],
    )
}

fn policies_section(settings: &LeagueSettings) -> Section {
    Section::new(
        SectionId::Policies,
        vec![
            format!(
                "Pick trading: {}",
                if is_set(settings.pick_trading) {
                    "enabled"
                } else {
                    "disabled"
                }
            ),
            format!("Keepers max: {}", undef(settings.max_keepers)),
            format!("Draft rounds: {}", undef(settings.draft_rounds)),
        ],
    )
}
