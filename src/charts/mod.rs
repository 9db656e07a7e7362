//! Exploratory charts rendered from the gameweek CSV.
//!
//! Every chart is an SVG written with `plotters`. [`render`] maps a [`Chart`]
//! to the aggregation it needs and the drawing routine for its kind:
//! - `bar`: horizontal rankings, optionally coloured by position
//! - `scatter`: per-row scatter coloured by position
//! - `line`: one player's metric across gameweeks
//! - `heatmap`: points per player and gameweek
//! - `involvement`: xGI versus actual goals and assists

pub mod bar;
pub mod heatmap;
pub mod involvement;
pub mod line;
pub mod palette;
pub mod scatter;


use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use plotters::style::{RGBColor, BLUE, GREEN};
use tracing::{debug, info};

use crate::{
    cli::types::Position,
    core::chart_path,
    dataset::{
        analysis::{self, Aggregate, PlayerKey, PositionedPlayer, Ranked},
        Dataset, GameweekRow,
    },
    Result,
};

use bar::{draw_horizontal_bars, Bar, BarChart};
use heatmap::draw_points_heatmap;
use involvement::draw_xgi_vs_actual;
use line::{draw_gameweek_line, LineChart};
use palette::Palette;
use scatter::{draw_scatter, ScatterChart, ScatterPoint};

pub(crate) const FIGURE_SIZE: (u32, u32) = (1000, 600);
pub(crate) const FONT: &str = "sans-serif";

/// Players shown in the "top N" rankings.
pub const TOP_N: usize = 10;
/// Players shown per position in `top-by-position`.
pub const TOP_PER_POSITION: usize = 5;
/// Default number of heatmap rows.
pub const DEFAULT_HEATMAP_PLAYERS: usize = 30;

/// Charts the CLI can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chart {
    TopPoints,
    GoalsVsAssists,
    PlayerValue(PlayerKey),
    PlayerPoints(PlayerKey),
    ValueForMoney,
    MostSelected,
    CumulativePoints(PlayerKey),
    CleanSheets,
    GoalInvolvement,
    Bps,
    XgVsGoals,
    PointsHeatmap { players: usize },
    TopByPosition,
    TeamPerformance,
    XgiTop,
    XgiVsActual,
}

impl Chart {
    /// Every chart that needs no player argument.
    pub fn all_standalone(heatmap_players: usize) -> Vec<Chart> {
        vec![
            Chart::TopPoints,
            Chart::GoalsVsAssists,
            Chart::ValueForMoney,
            Chart::MostSelected,
            Chart::CleanSheets,
            Chart::GoalInvolvement,
            Chart::Bps,
            Chart::XgVsGoals,
            Chart::PointsHeatmap {
                players: heatmap_players,
            },
            Chart::TopByPosition,
            Chart::TeamPerformance,
            Chart::XgiTop,
            Chart::XgiVsActual,
        ]
    }

    /// File stem of the rendered SVG.
    pub fn slug(&self) -> &'static str {
        match self {
            Chart::TopPoints => "top-points",
            Chart::GoalsVsAssists => "goals-vs-assists",
            Chart::PlayerValue(_) => "player-value",
            Chart::PlayerPoints(_) => "player-points",
            Chart::ValueForMoney => "value-for-money",
            Chart::MostSelected => "most-selected",
            Chart::CumulativePoints(_) => "cumulative-points",
            Chart::CleanSheets => "clean-sheets",
            Chart::GoalInvolvement => "goal-involvement",
            Chart::Bps => "bps",
            Chart::XgVsGoals => "xg-vs-goals",
            Chart::PointsHeatmap { .. } => "points-heatmap",
            Chart::TopByPosition => "top-by-position",
            Chart::TeamPerformance => "team-performance",
            Chart::XgiTop => "xgi-top",
            Chart::XgiVsActual => "xgi-vs-actual",
        }
    }
}

/// Axis range covering zero and every value, padded by 5%.
pub(crate) fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = if hi > lo { hi - lo } else { 1.0 };
    let pad = span * 0.05;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    lo..hi + pad
}

/// Render `chart` from `dataset` into `out_dir`, returning the files written.
pub fn render(dataset: &Dataset, chart: &Chart, out_dir: &Path) -> Result<Vec<PathBuf>> {
    dataset.ensure_not_empty()?;
    fs::create_dir_all(out_dir)?;

    let rows = dataset.rows();
    let path = chart_path(out_dir, chart.slug());
    debug!(chart = chart.slug(), rows = rows.len(), "rendering chart");

    let written = match chart {
        Chart::TopPoints => {
            let top = analysis::top_players_by_sum(rows, TOP_N, |r| f64::from(r.total_points));
            ranking_bars(&path, "Top 10 Players by Total Points", "Total Points", top, Palette::Viridis)?
        }
        Chart::GoalsVsAssists => position_scatter(
            &path,
            "Goals Scored vs Assists by Player Position",
            "Goals Scored",
            "Assists",
            rows,
            |r| (f64::from(r.goals_scored), f64::from(r.assists)),
            Palette::Set1,
        )?,
        Chart::PlayerValue(player) => player_line(
            &path,
            dataset,
            player,
            "Player Value Over Time",
            "Player Value",
            |r| f64::from(r.value),
            Aggregate::Mean,
            BLUE,
            false,
        )?,
        Chart::PlayerPoints(player) => player_line(
            &path,
            dataset,
            player,
            "Total Points Across Gameweeks",
            "Total Points",
            |r| f64::from(r.total_points),
            Aggregate::Sum,
            GREEN,
            false,
        )?,
        Chart::ValueForMoney => {
            let top = analysis::top_players_by_mean(rows, TOP_N, |r| r.points_per_million());
            ranking_bars(
                &path,
                "Top 10 Players by Value for Money (Points per Million)",
                "Points per Million",
                top,
                Palette::Coolwarm,
            )?
        }
        Chart::MostSelected => return most_selected(dataset, out_dir),
        Chart::CumulativePoints(player) => player_line(
            &path,
            dataset,
            player,
            "Cumulative Points",
            "Cumulative Points",
            |r| f64::from(r.total_points),
            Aggregate::Sum,
            RGBColor(31, 119, 180),
            true,
        )?,
        Chart::CleanSheets => {
            let leaders = analysis::clean_sheet_leaders(rows, TOP_N);
            positioned_bars(
                &path,
                "Top Goalkeepers and Defenders by Clean Sheets",
                "Clean Sheets",
                leaders,
                Palette::Blues,
            )?
        }
        Chart::GoalInvolvement => {
            let top = analysis::top_players_by_sum(rows, TOP_N, GameweekRow::goal_involvement);
            ranking_bars(
                &path,
                "Top 10 Players by Goal Involvement (Goals + Assists)",
                "Goal Involvement",
                top,
                Palette::Oranges,
            )?
        }
        Chart::Bps => {
            let top = analysis::top_players_by_sum(rows, TOP_N, |r| f64::from(r.bps));
            ranking_bars(
                &path,
                "Top 10 Players by Bonus Points System (BPS)",
                "Total BPS",
                top,
                Palette::Purples,
            )?
        }
        Chart::XgVsGoals => position_scatter(
            &path,
            "Expected Goals vs Actual Goals Scored",
            "Expected Goals (xG)",
            "Actual Goals Scored",
            rows,
            |r| (r.expected_goals.value(), f64::from(r.goals_scored)),
            Palette::Set2,
        )?,
        Chart::PointsHeatmap { players } => {
            let grid = analysis::points_grid(rows, *players);
            draw_points_heatmap(
                &path,
                "Points Scored by Players Across Gameweeks",
                &grid,
                Palette::YlGnBu,
            )?;
            path
        }
        Chart::TopByPosition => {
            let top = analysis::top_players_per_position(rows, TOP_PER_POSITION);
            positioned_bars(
                &path,
                "Top 5 Players by Total Points in Each Position",
                "Total Points",
                top,
                Palette::Set3,
            )?
        }
        Chart::TeamPerformance => {
            let bars = analysis::team_totals(rows)
                .into_iter()
                .map(|t| Bar::new(format!("Team {}", t.key), t.value))
                .collect();
            draw_horizontal_bars(
                &path,
                &BarChart {
                    title: "Total Points Contribution by Team",
                    x_desc: "Total Points",
                    y_desc: "Team",
                    bars,
                    palette: Palette::RdYlGn,
                },
            )?;
            path
        }
        Chart::XgiTop => {
            let top = analysis::top_players_by_sum(rows, TOP_N, GameweekRow::xgi);
            ranking_bars(
                &path,
                "Top 10 Players by Expected Goal Involvement (xGI)",
                "Expected Goal Involvement (xGI)",
                top,
                Palette::Magma,
            )?
        }
        Chart::XgiVsActual => {
            let summaries = analysis::xgi_summaries(rows, TOP_N);
            draw_xgi_vs_actual(
                &path,
                "xGI vs Actual Goals + Assists and Over/Underperformance",
                &summaries,
            )?;
            path
        }
    };

    info!(path = %written.display(), "chart written");
    Ok(vec![written])
}

fn ranking_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    ranked: Vec<Ranked<PlayerKey>>,
    palette: Palette,
) -> Result<PathBuf> {
    let bars = ranked
        .into_iter()
        .map(|r| Bar::new(r.key.second_name, r.value))
        .collect();
    draw_horizontal_bars(
        path,
        &BarChart {
            title,
            x_desc,
            y_desc: "Player Name",
            bars,
            palette,
        },
    )?;
    Ok(path.to_path_buf())
}

fn positioned_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    ranked: Vec<Ranked<PositionedPlayer>>,
    palette: Palette,
) -> Result<PathBuf> {
    let bars = ranked
        .into_iter()
        .map(|r| Bar::grouped(r.key.player.second_name, r.value, r.key.position.to_string()))
        .collect();
    draw_horizontal_bars(
        path,
        &BarChart {
            title,
            x_desc,
            y_desc: "Player Name",
            bars,
            palette,
        },
    )?;
    Ok(path.to_path_buf())
}

fn position_scatter<F>(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    rows: &[GameweekRow],
    xy: F,
    palette: Palette,
) -> Result<PathBuf>
where
    F: Fn(&GameweekRow) -> (f64, f64),
{
    let points = rows
        .iter()
        .map(|r| {
            let (x, y) = xy(r);
            ScatterPoint {
                x,
                y,
                group: r.position.to_string(),
            }
        })
        .collect();

    let mut positions: Vec<Position> = rows.iter().map(|r| r.position).collect();
    positions.sort();
    positions.dedup();

    draw_scatter(
        path,
        &ScatterChart {
            title,
            x_desc,
            y_desc,
            points,
            groups: positions.iter().map(|p| p.to_string()).collect(),
            palette,
        },
    )?;
    Ok(path.to_path_buf())
}

#[allow(clippy::too_many_arguments)]
fn player_line<F>(
    path: &Path,
    dataset: &Dataset,
    player: &PlayerKey,
    title: &str,
    y_desc: &str,
    metric: F,
    how: Aggregate,
    color: RGBColor,
    running_total: bool,
) -> Result<PathBuf>
where
    F: Fn(&GameweekRow) -> f64,
{
    let rows = dataset.player_rows(&player.first_name, &player.second_name)?;
    let mut points = analysis::gameweek_series(rows.iter().copied(), metric, how);
    if running_total {
        points = analysis::cumulative(&points);
    }

    let title = format!("{} - {}", title, player);
    draw_gameweek_line(
        path,
        &LineChart {
            title: &title,
            y_desc,
            points,
            color,
        },
    )?;
    Ok(path.to_path_buf())
}

/// One selection-trend chart per most-selected player: `most-selected-<rank>.svg`.
fn most_selected(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let top = analysis::top_players_by_mean(dataset.rows(), TOP_N, |r| Some(r.selected as f64));

    let mut written = Vec::with_capacity(top.len());
    for (rank, entry) in top.iter().enumerate() {
        let path = chart_path(out_dir, &format!("most-selected-{}", rank + 1));
        let rows = dataset.player_rows(&entry.key.first_name, &entry.key.second_name)?;
        let points = analysis::gameweek_series(rows.iter().copied(), |r| r.selected as f64, Aggregate::Mean);

        let title = format!("Selection Trend - {}", entry.key);
        draw_gameweek_line(
            &path,
            &LineChart {
                title: &title,
                y_desc: "Selected by Managers",
                points,
                color: Palette::Set1.pick(rank, top.len()),
            },
        )?;
        info!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}
