//! Output model consumed by the site's display layer.
//!
//! The display layer reads `sections` and renders each as a titled list of
//! strings; it may also build a table of contents from `{id, title}` pairs.
//! Items are opaque pre-formatted text, not structured data.

use serde::{Deserialize, Serialize};

/// Provenance tag embedded in every generated document.
pub const SOURCE: &str = "sleeper";

/// Display-oriented rules document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesDocument {
    /// Fixed provenance tag, always [`SOURCE`].
    pub source: String,
    /// ISO calendar date the transform ran.
    pub source_snapshot: String,
    /// Season identifier, copied verbatim from the input.
    pub season: String,
    /// The seven fixed sections, in [`SectionId::ALL`] order.
    pub sections: Vec<Section>,
}

/// One titled block of display facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub items: Vec<String>,
}

impl Section {
    /// Create a section with its canonical title.
    pub fn new(id: SectionId, items: Vec<String>) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            items,
        }
    }
}

/// Closed set of section anchors.
///
/// Downstream consumers key on these ids, so the set and its order are part
/// of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    League,
    Rosters,
    Scoring,
    Waivers,
    Trades,
    Playoffs,
    Policies,
}

impl SectionId {
    /// Every section, in display order.
    pub const ALL: [SectionId; 7] = [
        SectionId::League,
        SectionId::Rosters,
        SectionId::Scoring,
        SectionId::Waivers,
        SectionId::Trades,
        SectionId::Playoffs,
        SectionId::Policies,
    ];

    /// Anchor string used in the serialized document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::League => "league",
            SectionId::Rosters => "rosters",
            SectionId::Scoring => "scoring",
            SectionId::Waivers => "waivers",
            SectionId::Trades => "trades",
            SectionId::Playoffs => "playoffs",
            SectionId::Policies => "policies",
        }
    }

    /// Display label for the section.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionId::League => "League Info",
            SectionId::Rosters => "Rosters & Lineups",
            SectionId::Scoring => "Scoring Settings",
            SectionId::Waivers => "Waivers & FAAB",
            SectionId::Trades => "Trades & Veto",
            SectionId::Playoffs => "Playoffs",
            SectionId::Policies => "Policies & Misc",
        }
    }
}
