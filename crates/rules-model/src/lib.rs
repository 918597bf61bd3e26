pub mod document;
pub mod error;
pub mod league;

pub use document::{RulesDocument, SOURCE, Section, SectionId};
pub use error::{Result, RulesError};
pub use league::{LeagueConfig, LeagueSettings, ScoringSettings};
