//! Unit tests for the flattening step, the CSV sink and the aggregations

use super::{analysis::*, *};
use crate::{
    cli::types::{Decimal, Gameweek, PlayerId, Position, TeamId},
    fpl::types::{tests::sample_history_json, Element, ElementSummary, GameweekHistory},
};

pub(crate) fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

/// A zeroed row for one player and gameweek.
pub(crate) fn sample_row(
    first_name: &str,
    second_name: &str,
    position: Position,
    round: u16,
    total_points: i32,
) -> GameweekRow {
    GameweekRow {
        id: PlayerId::new(1),
        first_name: first_name.to_string(),
        second_name: second_name.to_string(),
        team: TeamId::new(1),
        position,
        fixture: u32::from(round),
        opponent_team: TeamId::new(2),
        total_points,
        was_home: true,
        kickoff_time: None,
        team_h_score: None,
        team_a_score: None,
        round: Gameweek::new(round),
        minutes: 90,
        goals_scored: 0,
        assists: 0,
        clean_sheets: 0,
        goals_conceded: 0,
        own_goals: 0,
        penalties_saved: 0,
        penalties_missed: 0,
        yellow_cards: 0,
        red_cards: 0,
        saves: 0,
        bonus: 0,
        bps: 0,
        influence: dec("0.0"),
        creativity: dec("0.0"),
        threat: dec("0.0"),
        ict_index: dec("0.0"),
        starts: 1,
        expected_goals: dec("0.00"),
        expected_assists: dec("0.00"),
        expected_goal_involvements: dec("0.00"),
        expected_goals_conceded: dec("0.00"),
        value: 50,
        transfers_balance: 0,
        selected: 1000,
        transfers_in: 0,
        transfers_out: 0,
    }
}

fn salah() -> Element {
    Element {
        id: PlayerId::new(328),
        first_name: "Mohamed".to_string(),
        second_name: "Salah".to_string(),
        team: TeamId::new(12),
        element_type: 3,
    }
}

fn history() -> GameweekHistory {
    serde_json::from_value(sample_history_json()).unwrap()
}

#[cfg(test)]
mod flatten_tests {
    use super::*;

    #[test]
    fn test_row_copies_fields_verbatim() {
        let gw = history();
        let row = GameweekRow::from_history(&salah(), &gw);

        assert_eq!(row.id, PlayerId::new(328));
        assert_eq!(row.first_name, "Mohamed");
        assert_eq!(row.second_name, "Salah");
        assert_eq!(row.team, TeamId::new(12));
        assert_eq!(row.position, Position::Midfielder);
        assert_eq!(row.fixture, gw.fixture);
        assert_eq!(row.opponent_team, gw.opponent_team);
        assert_eq!(row.total_points, gw.total_points);
        assert_eq!(row.was_home, gw.was_home);
        assert_eq!(row.kickoff_time, gw.kickoff_time);
        assert_eq!(row.round, gw.round);
        assert_eq!(row.bps, gw.bps);
        assert_eq!(row.expected_goals, gw.expected_goals);
        assert_eq!(row.expected_goals_conceded, gw.expected_goals_conceded);
        assert_eq!(row.value, gw.value);
        assert_eq!(row.transfers_balance, gw.transfers_balance);
        assert_eq!(row.transfers_out, gw.transfers_out);
    }

    #[test]
    fn test_unknown_element_type_maps_to_unknown() {
        let mut manager = salah();
        manager.element_type = 5;

        let row = GameweekRow::from_history(&manager, &history());
        assert_eq!(row.position, Position::Unknown);
    }

    #[test]
    fn test_flatten_player_one_row_per_gameweek() {
        let mut second = history();
        second.round = Gameweek::new(2);
        second.fixture = 20;

        let summary = ElementSummary {
            history: vec![history(), second],
        };
        let rows = flatten_player(&salah(), &summary);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].round, Gameweek::new(1));
        assert_eq!(rows[1].round, Gameweek::new(2));
        assert!(rows.iter().all(|r| r.id == PlayerId::new(328)));
    }

    #[test]
    fn test_flatten_player_without_history() {
        let rows = flatten_player(&salah(), &ElementSummary::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_derived_metrics() {
        let mut row = sample_row("Cole", "Palmer", Position::Midfielder, 1, 8);
        row.goals_scored = 1;
        row.assists = 2;
        row.expected_goals = dec("0.50");
        row.expected_assists = dec("0.25");
        row.value = 80;

        assert_eq!(row.goal_involvement(), 3.0);
        assert_eq!(row.xgi(), 0.75);
        assert_eq!(row.points_per_million(), Some(1.0));

        row.value = 0;
        assert_eq!(row.points_per_million(), None);
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_header_lists_exactly_the_columns() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), GameweekRow::COLUMNS.join(","));
        assert_eq!(GameweekRow::COLUMNS.len(), 40);
    }

    #[test]
    fn test_header_matches_serialized_field_order() {
        // csv's own header generation follows the struct's field order
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(sample_row("A", "B", Position::Forward, 1, 2))
            .unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(header, GameweekRow::COLUMNS.join(","));
    }

    #[test]
    fn test_row_values_written_verbatim() {
        let row = GameweekRow::from_history(&salah(), &history());
        let mut buf = Vec::new();
        write_rows(&mut buf, &[row]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "328,Mohamed,Salah,12,Midfielder,12,4,13,True,2024-08-17T11:30:00Z,2,0,1,90,\
             1,1,1,0,0,0,0,0,0,0,3,47,55.8,27.4,61.0,14.4,1,0.74,0.31,1.05,0.52,\
             125,-10234,4512300,120,10354"
        );
    }

    #[test]
    fn test_decimal_text_kept_with_trailing_zeros() {
        let mut json = sample_history_json();
        json["expected_goals"] = serde_json::json!("0.00");
        json["expected_assists"] = serde_json::json!("0.10");
        json["expected_goal_involvements"] = serde_json::json!("0.10");
        json["expected_goals_conceded"] = serde_json::json!("1.20");
        let gw: GameweekHistory = serde_json::from_value(json).unwrap();

        let mut buf = Vec::new();
        write_rows(&mut buf, &[GameweekRow::from_history(&salah(), &gw)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(",1,0.00,0.10,0.10,1.20,125,"));

        let loaded = read_rows(text.as_bytes()).unwrap();
        assert_eq!(loaded[0].expected_goals.as_str(), "0.00");
        assert_eq!(loaded[0].expected_goals_conceded.as_str(), "1.20");
        assert!(loaded[0].was_home);
    }

    #[test]
    fn test_was_home_reads_either_case() {
        let mut buf = Vec::new();
        let mut away = sample_row("A", "B", Position::Forward, 1, 2);
        away.was_home = false;
        write_rows(&mut buf, &[away]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(",2,False,"));

        let lower = text.replace(",False,", ",false,");
        assert!(!read_rows(lower.as_bytes()).unwrap()[0].was_home);
        let bad = text.replace(",False,", ",no,");
        assert!(read_rows(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_csv_file_round_trip_with_nulls() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("gameweeks.csv");

        let played = GameweekRow::from_history(&salah(), &history());
        let mut unplayed = sample_row("Mohamed", "Salah", Position::Midfielder, 2, 0);
        unplayed.team_h_score = None;
        unplayed.kickoff_time = None;

        write_csv(&path, &[played.clone(), unplayed.clone()]).unwrap();
        let loaded = read_csv(&path).unwrap();

        assert_eq!(loaded, vec![played, unplayed]);
    }

    #[test]
    fn test_read_csv_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_csv(&tmp.path().join("missing.csv"));
        assert!(matches!(result, Err(crate::FplError::Io(_))));
    }

    #[test]
    fn test_dataset_load_and_player_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.csv");
        write_csv(
            &path,
            &[
                sample_row("Bukayo", "Saka", Position::Midfielder, 3, 2),
                sample_row("Bukayo", "Saka", Position::Midfielder, 1, 10),
                sample_row("Erling", "Haaland", Position::Forward, 1, 13),
            ],
        )
        .unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.ensure_not_empty().is_ok());

        let saka = dataset.player_rows("Bukayo", "Saka").unwrap();
        let rounds: Vec<u16> = saka.iter().map(|r| r.round.as_u16()).collect();
        assert_eq!(rounds, vec![1, 3]);

        match dataset.player_rows("Bukayo", "Nobody") {
            Err(crate::FplError::PlayerNotFound { name }) => assert_eq!(name, "Bukayo Nobody"),
            _ => panic!("Expected PlayerNotFound"),
        }
    }

    #[test]
    fn test_empty_dataset_is_no_data() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(matches!(
            dataset.ensure_not_empty(),
            Err(crate::FplError::NoData)
        ));
    }
}

#[cfg(test)]
mod analysis_tests {
    use super::*;

    fn rows() -> Vec<GameweekRow> {
        let mut rows = vec![
            sample_row("Erling", "Haaland", Position::Forward, 1, 13),
            sample_row("Erling", "Haaland", Position::Forward, 2, 2),
            sample_row("Mohamed", "Salah", Position::Midfielder, 1, 8),
            sample_row("Mohamed", "Salah", Position::Midfielder, 2, 12),
            sample_row("Gabriel", "Magalhães", Position::Defender, 1, 6),
            sample_row("Gabriel", "Magalhães", Position::Defender, 2, 1),
            sample_row("David", "Raya", Position::Goalkeeper, 1, 6),
            sample_row("David", "Raya", Position::Goalkeeper, 2, 6),
        ];
        rows[4].clean_sheets = 1;
        rows[6].clean_sheets = 1;
        rows[7].clean_sheets = 1;
        rows[0].team = TeamId::new(13);
        rows[1].team = TeamId::new(13);
        rows
    }

    #[test]
    fn test_top_players_by_sum_orders_and_truncates() {
        let top = top_players_by_sum(&rows(), 2, |r| f64::from(r.total_points));

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].key, PlayerKey::new("Mohamed", "Salah"));
        assert_eq!(top[0].value, 20.0);
        assert_eq!(top[1].key, PlayerKey::new("Erling", "Haaland"));
        assert_eq!(top[1].value, 15.0);
    }

    #[test]
    fn test_ties_break_by_name() {
        let rows = vec![
            sample_row("Zed", "Zulu", Position::Forward, 1, 5),
            sample_row("Abe", "Alpha", Position::Forward, 1, 5),
        ];
        let top = top_players_by_sum(&rows, 10, |r| f64::from(r.total_points));
        assert_eq!(top[0].key.second_name, "Alpha");
        assert_eq!(top[1].key.second_name, "Zulu");
    }

    #[test]
    fn test_top_players_by_mean_skips_missing_values() {
        let mut rows = rows();
        rows[2].value = 0; // Salah gw1 is skipped, leaving 12 points at £5.0m

        let top = top_players_by_mean(&rows, 1, |r| r.points_per_million());
        assert_eq!(top[0].key, PlayerKey::new("Mohamed", "Salah"));
        assert_eq!(top[0].value, 12.0 / 5.0);
    }

    #[test]
    fn test_clean_sheet_leaders_only_defensive() {
        let leaders = clean_sheet_leaders(&rows(), 10);

        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].key.player, PlayerKey::new("David", "Raya"));
        assert_eq!(leaders[0].key.position, Position::Goalkeeper);
        assert_eq!(leaders[0].value, 2.0);
        assert_eq!(leaders[1].key.position, Position::Defender);
        assert!(leaders.iter().all(|l| l.key.position.is_defensive()));
    }

    #[test]
    fn test_top_players_per_position() {
        let mut rows = rows();
        rows.push(sample_row("Bukayo", "Saka", Position::Midfielder, 1, 4));

        let top = top_players_per_position(&rows, 1);
        let positions: Vec<Position> = top.iter().map(|t| t.key.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::Goalkeeper,
                Position::Defender,
                Position::Midfielder,
                Position::Forward
            ]
        );
        assert_eq!(top[2].key.player, PlayerKey::new("Mohamed", "Salah"));
    }

    #[test]
    fn test_team_totals_in_team_order() {
        let totals = team_totals(&rows());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].key, TeamId::new(1));
        assert_eq!(totals[0].value, 39.0);
        assert_eq!(totals[1].key, TeamId::new(13));
        assert_eq!(totals[1].value, 15.0);
    }

    #[test]
    fn test_gameweek_series_and_cumulative() {
        let mut rows = vec![
            sample_row("Cole", "Palmer", Position::Midfielder, 2, 4),
            sample_row("Cole", "Palmer", Position::Midfielder, 1, 10),
            // double gameweek
            sample_row("Cole", "Palmer", Position::Midfielder, 2, 6),
        ];
        rows[0].value = 100;
        rows[2].value = 102;

        let points = gameweek_series(&rows, |r| f64::from(r.total_points), Aggregate::Sum);
        assert_eq!(points, vec![(Gameweek::new(1), 10.0), (Gameweek::new(2), 10.0)]);

        let value = gameweek_series(&rows, |r| f64::from(r.value), Aggregate::Mean);
        assert_eq!(value, vec![(Gameweek::new(1), 50.0), (Gameweek::new(2), 101.0)]);

        let running = cumulative(&points);
        assert_eq!(running, vec![(Gameweek::new(1), 10.0), (Gameweek::new(2), 20.0)]);
    }

    #[test]
    fn test_points_grid_limits_players_and_fills_gaps() {
        let mut rows = rows();
        rows.push(sample_row("Cole", "Palmer", Position::Midfielder, 3, 9));

        let grid = points_grid(&rows, 2);
        assert_eq!(
            grid.players,
            vec![PlayerKey::new("Mohamed", "Salah"), PlayerKey::new("Erling", "Haaland")]
        );
        assert_eq!(
            grid.gameweeks,
            vec![Gameweek::new(1), Gameweek::new(2), Gameweek::new(3)]
        );
        assert_eq!(grid.cells[0], vec![Some(8.0), Some(12.0), None]);
        assert_eq!(grid.cells[1], vec![Some(13.0), Some(2.0), None]);
        assert_eq!(grid.range(), Some((2.0, 13.0)));
    }

    #[test]
    fn test_points_grid_empty() {
        let grid = points_grid(&[], 30);
        assert!(grid.players.is_empty());
        assert_eq!(grid.range(), None);
    }

    #[test]
    fn test_xgi_summaries() {
        let mut rows = rows();
        rows[2].expected_goals = dec("0.5");
        rows[3].expected_assists = dec("0.5");
        rows[3].goals_scored = 2;
        rows[0].expected_goals = dec("0.25");
        rows[0].assists = 1;

        let summaries = xgi_summaries(&rows, 2);
        assert_eq!(summaries.len(), 2);

        let salah = &summaries[0];
        assert_eq!(salah.player, PlayerKey::new("Mohamed", "Salah"));
        assert_eq!(salah.xgi, 1.0);
        assert_eq!(salah.actual(), 2.0);
        assert_eq!(salah.over_under(), 1.0);

        let haaland = &summaries[1];
        assert_eq!(haaland.player, PlayerKey::new("Erling", "Haaland"));
        assert_eq!(haaland.over_under(), 0.75);
    }
}
