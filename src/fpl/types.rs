//! Serde models of the FPL API responses.
//!
//! Only the fields the extractor copies are modelled; serde ignores the rest.

use crate::cli::types::{decimal::DecimalVisitor, Decimal, Gameweek, PlayerId, TeamId};
use serde::{Deserialize, Deserializer, Serialize};


/// The API sends decimal metrics (`"0.45"`) as strings. Accept numbers too.
fn de_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

/// Top-level envelope of `bootstrap-static/`
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapStatic {
    pub elements: Vec<Element>,
}

/// One player from the bootstrap roster
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    pub team: TeamId,
    pub element_type: u8,
}

/// Top-level envelope of `element-summary/{id}/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementSummary {
    #[serde(default)]
    pub history: Vec<GameweekHistory>,
}

/// One fixture's statistics for one player
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekHistory {
    pub fixture: u32,
    pub opponent_team: TeamId,
    pub total_points: i32,
    pub was_home: bool,
    pub kickoff_time: Option<String>,
    pub team_h_score: Option<u32>,
    pub team_a_score: Option<u32>,
    pub round: Gameweek,
    pub minutes: u32,
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub own_goals: u32,
    pub penalties_saved: u32,
    pub penalties_missed: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub bonus: u32,
    pub bps: i32,
    #[serde(deserialize_with = "de_decimal")]
    pub influence: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub creativity: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub threat: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub ict_index: Decimal,
    pub starts: u32,
    #[serde(deserialize_with = "de_decimal")]
    pub expected_goals: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub expected_assists: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub expected_goal_involvements: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub expected_goals_conceded: Decimal,
    /// Price in tenths of a million (e.g. 125 = £12.5m)
    pub value: i32,
    pub transfers_balance: i64,
    pub selected: u64,
    pub transfers_in: u64,
    pub transfers_out: u64,
}
