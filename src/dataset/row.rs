//! The flattened (player, gameweek) row written to the CSV.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{Decimal, Gameweek, PlayerId, Position, TeamId},
    fpl::types::{Element, ElementSummary, GameweekHistory},
};

/// One row per (player id, gameweek). Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameweekRow {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    pub team: TeamId,
    pub position: Position,
    pub fixture: u32,
    pub opponent_team: TeamId,
    pub total_points: i32,
    #[serde(with = "title_case_bool")]
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
    pub influence: Decimal,
    pub creativity: Decimal,
    pub threat: Decimal,
    pub ict_index: Decimal,
    pub starts: u32,
    pub expected_goals: Decimal,
    pub expected_assists: Decimal,
    pub expected_goal_involvements: Decimal,
    pub expected_goals_conceded: Decimal,
    pub value: i32,
    pub transfers_balance: i64,
    pub selected: u64,
    pub transfers_in: u64,
    pub transfers_out: u64,
}

impl GameweekRow {
    /// CSV header, in field order.
    pub const COLUMNS: [&'static str; 40] = [
        "id",
        "first_name",
        "second_name",
        "team",
        "position",
        "fixture",
        "opponent_team",
        "total_points",
        "was_home",
        "kickoff_time",
        "team_h_score",
        "team_a_score",
        "round",
        "minutes",
        "goals_scored",
        "assists",
        "clean_sheets",
        "goals_conceded",
        "own_goals",
        "penalties_saved",
        "penalties_missed",
        "yellow_cards",
        "red_cards",
        "saves",
        "bonus",
        "bps",
        "influence",
        "creativity",
        "threat",
        "ict_index",
        "starts",
        "expected_goals",
        "expected_assists",
        "expected_goal_involvements",
        "expected_goals_conceded",
        "value",
        "transfers_balance",
        "selected",
        "transfers_in",
        "transfers_out",
    ];

    /// Copy one gameweek record, tagged with the player's metadata.
    pub fn from_history(player: &Element, gw: &GameweekHistory) -> Self {
        Self {
            id: player.id,
            first_name: player.first_name.clone(),
            second_name: player.second_name.clone(),
            team: player.team,
            position: Position::from_element_type(player.element_type),
            fixture: gw.fixture,
            opponent_team: gw.opponent_team,
            total_points: gw.total_points,
            was_home: gw.was_home,
            kickoff_time: gw.kickoff_time.clone(),
            team_h_score: gw.team_h_score,
            team_a_score: gw.team_a_score,
            round: gw.round,
            minutes: gw.minutes,
            goals_scored: gw.goals_scored,
            assists: gw.assists,
            clean_sheets: gw.clean_sheets,
            goals_conceded: gw.goals_conceded,
            own_goals: gw.own_goals,
            penalties_saved: gw.penalties_saved,
            penalties_missed: gw.penalties_missed,
            yellow_cards: gw.yellow_cards,
            red_cards: gw.red_cards,
            saves: gw.saves,
            bonus: gw.bonus,
            bps: gw.bps,
            influence: gw.influence.clone(),
            creativity: gw.creativity.clone(),
            threat: gw.threat.clone(),
            ict_index: gw.ict_index.clone(),
            starts: gw.starts,
            expected_goals: gw.expected_goals.clone(),
            expected_assists: gw.expected_assists.clone(),
            expected_goal_involvements: gw.expected_goal_involvements.clone(),
            expected_goals_conceded: gw.expected_goals_conceded.clone(),
            value: gw.value,
            transfers_balance: gw.transfers_balance,
            selected: gw.selected,
            transfers_in: gw.transfers_in,
            transfers_out: gw.transfers_out,
        }
    }

    /// Goals + assists.
    pub fn goal_involvement(&self) -> f64 {
        f64::from(self.goals_scored + self.assists)
    }

    /// xGI: expected goals + expected assists.
    pub fn xgi(&self) -> f64 {
        self.expected_goals.value() + self.expected_assists.value()
    }

    /// Points per million; `None` when the price is not positive.
    pub fn points_per_million(&self) -> Option<f64> {
        (self.value > 0).then(|| f64::from(self.total_points) / (f64::from(self.value) / 10.0))
    }
}

/// Booleans as `True`/`False`, the spelling pandas writes. Lower case is read too.
mod title_case_bool {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.as_str() {
            "True" | "true" => Ok(true),
            "False" | "false" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean `{}`", other))),
        }
    }
}

/// Flatten one player's summary into rows, in API order.
pub fn flatten_player(player: &Element, summary: &ElementSummary) -> Vec<GameweekRow> {
    summary
        .history
        .iter()
        .map(|gw| GameweekRow::from_history(player, gw))
        .collect()
}
