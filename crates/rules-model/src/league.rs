//! Input model for a Sleeper league export.
//!
//! The export is consumed as-is: optional fields deserialize to `None` and
//! unknown fields are ignored. Absence means "unknown", never zero; any
//! default substitution happens later, in the projection.

use serde::{Deserialize, Deserializer};

/// League configuration as exported by the Sleeper platform.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    /// Display name of the league.
    pub name: String,
    /// Season identifier, carried verbatim into the output.
    pub season: String,
    /// League status (e.g. "in_season", "complete").
    pub status: String,
    /// Roster position codes in lineup order; `"BN"` marks a bench slot.
    #[serde(default)]
    pub roster_positions: Vec<String>,
    /// League-level settings, all optional in the export.
    #[serde(default)]
    pub settings: LeagueSettings,
    /// Per-statistic point values. Required at point of use.
    #[serde(default)]
    pub scoring_settings: ScoringSettings,
}

/// Optional league settings.
///
/// Sleeper encodes boolean settings as `0`/`1` integers; the flag fields
/// accept either representation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSettings {
    pub num_teams: Option<i64>,
    pub max_subs: Option<i64>,
    /// Waiver mode code: 0 none, 1 waivers, 2 FAAB. Unknown codes are
    /// rendered, never rejected.
    pub waiver_type: Option<i64>,
    pub waiver_budget: Option<i64>,
    pub waiver_bid_min: Option<i64>,
    #[serde(default, deserialize_with = "flag")]
    pub daily_waivers: Option<bool>,
    pub daily_waivers_hour: Option<i64>,
    pub waiver_clear_days: Option<i64>,
    #[serde(default, deserialize_with = "flag")]
    pub disable_trades: Option<bool>,
    pub veto_votes_needed: Option<i64>,
    #[serde(default, deserialize_with = "flag")]
    pub veto_show_votes: Option<bool>,
    pub trade_review_days: Option<i64>,
    pub trade_deadline: Option<i64>,
    pub playoff_teams: Option<i64>,
    pub playoff_week_start: Option<i64>,
    #[serde(default, deserialize_with = "flag")]
    pub pick_trading: Option<bool>,
    pub max_keepers: Option<i64>,
    pub draft_rounds: Option<i64>,
}

/// Per-statistic point values.
///
/// Every field is optional at the parse level so a partial export still
/// loads, but the projection requires each one it reads and fails with an
/// access error on the first absent field rather than inventing a default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    pub pass_td: Option<f64>,
    pub pass_yd: Option<f64>,
    pub pass_int: Option<f64>,
    pub pass_2pt: Option<f64>,
    pub rush_td: Option<f64>,
    pub rush_yd: Option<f64>,
    pub rush_2pt: Option<f64>,
    pub rec_td: Option<f64>,
    pub rec_yd: Option<f64>,
    pub rec: Option<f64>,
    pub fum_lost: Option<f64>,
    pub xpm: Option<f64>,
    pub xpmiss: Option<f64>,
    pub fgm_0_19: Option<f64>,
    pub fgm_20_29: Option<f64>,
    pub fgm_30_39: Option<f64>,
    pub fgm_40_49: Option<f64>,
    pub fgm_50_59: Option<f64>,
    pub fgm_60p: Option<f64>,
    pub fgmiss: Option<f64>,
    pub sack: Option<f64>,
    pub int: Option<f64>,
    pub ff: Option<f64>,
    pub fum_rec: Option<f64>,
    pub def_td: Option<f64>,
    pub def_st_td: Option<f64>,
    pub safe: Option<f64>,
    pub pts_allow_0: Option<f64>,
    pub pts_allow_1_6: Option<f64>,
    pub pts_allow_7_13: Option<f64>,
    pub pts_allow_14_20: Option<f64>,
    pub pts_allow_21_27: Option<f64>,
    pub pts_allow_28_34: Option<f64>,
    pub pts_allow_35p: Option<f64>,
}

/// Accepts `true`/`false`, `0`/`1`, or absent.
fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(i64),
    }

    let value = Option::<Repr>::deserialize(deserializer)?;
    Ok(value.map(|repr| match repr {
        Repr::Bool(b) => b,
        Repr::Int(n) => n != 0,
    }))
}
