//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    charts::{Chart, DEFAULT_HEATMAP_PLAYERS},
    commands::plot::DEFAULT_CHART_DIR,
    dataset::{analysis::PlayerKey, DEFAULT_CSV_PATH},
};

/// Player selection for the per-player charts
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Player first name, exactly as in the CSV.
    #[clap(long, short)]
    pub first_name: String,

    /// Player second name, exactly as in the CSV.
    #[clap(long, short)]
    pub second_name: String,
}

impl From<PlayerArgs> for PlayerKey {
    fn from(args: PlayerArgs) -> Self {
        PlayerKey::new(args.first_name, args.second_name)
    }
}

#[derive(Debug, Subcommand)]
pub enum PlotCmd {
    /// Top 10 players by total points.
    TopPoints,
    /// Goals against assists per row, coloured by position.
    GoalsVsAssists,
    /// One player's price across gameweeks.
    PlayerValue {
        #[clap(flatten)]
        player: PlayerArgs,
    },
    /// One player's points across gameweeks.
    PlayerPoints {
        #[clap(flatten)]
        player: PlayerArgs,
    },
    /// Top 10 players by mean points per million.
    ValueForMoney,
    /// Selection trend for each of the 10 most selected players.
    MostSelected,
    /// One player's running points total.
    CumulativePoints {
        #[clap(flatten)]
        player: PlayerArgs,
    },
    /// Top goalkeepers and defenders by clean sheets.
    CleanSheets,
    /// Top 10 players by goals + assists.
    GoalInvolvement,
    /// Top 10 players by bonus points system score.
    Bps,
    /// Expected goals against goals scored, coloured by position.
    XgVsGoals,
    /// Points per player and gameweek.
    PointsHeatmap {
        /// Number of players (highest total points first).
        #[clap(long, default_value_t = DEFAULT_HEATMAP_PLAYERS)]
        players: usize,
    },
    /// Top 5 players in each position.
    TopByPosition,
    /// Total points per team.
    TeamPerformance,
    /// Top 10 players by expected goal involvement.
    XgiTop,
    /// xGI against actual goals + assists for the top 10 by xGI.
    XgiVsActual,
    /// Every chart that needs no player.
    All {
        /// Number of players in the heatmap.
        #[clap(long, default_value_t = DEFAULT_HEATMAP_PLAYERS)]
        players: usize,
    },
}

impl PlotCmd {
    /// Charts this subcommand renders.
    pub fn into_charts(self) -> Vec<Chart> {
        let chart = match self {
            PlotCmd::All { players } => return Chart::all_standalone(players),
            PlotCmd::TopPoints => Chart::TopPoints,
            PlotCmd::GoalsVsAssists => Chart::GoalsVsAssists,
            PlotCmd::PlayerValue { player } => Chart::PlayerValue(player.into()),
            PlotCmd::PlayerPoints { player } => Chart::PlayerPoints(player.into()),
            PlotCmd::ValueForMoney => Chart::ValueForMoney,
            PlotCmd::MostSelected => Chart::MostSelected,
            PlotCmd::CumulativePoints { player } => Chart::CumulativePoints(player.into()),
            PlotCmd::CleanSheets => Chart::CleanSheets,
            PlotCmd::GoalInvolvement => Chart::GoalInvolvement,
            PlotCmd::Bps => Chart::Bps,
            PlotCmd::XgVsGoals => Chart::XgVsGoals,
            PlotCmd::PointsHeatmap { players } => Chart::PointsHeatmap { players },
            PlotCmd::TopByPosition => Chart::TopByPosition,
            PlotCmd::TeamPerformance => Chart::TeamPerformance,
            PlotCmd::XgiTop => Chart::XgiTop,
            PlotCmd::XgiVsActual => Chart::XgiVsActual,
        };
        vec![chart]
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-stats",
    version,
    about = "Fantasy Premier League gameweek extractor and charts"
)]
pub struct FplStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every player's gameweek history into a CSV.
    ///
    /// Calls `bootstrap-static/` once, then `element-summary/{id}/` for each
    /// player in turn.
    Extract {
        /// CSV file to write (replaced if it exists).
        #[clap(long, short, default_value = DEFAULT_CSV_PATH)]
        output: PathBuf,

        /// Pause between player requests, in milliseconds.
        #[clap(long, default_value_t = 1000)]
        delay_ms: u64,

        /// Only fetch the first N players of the roster.
        #[clap(long)]
        limit: Option<usize>,

        /// API root (or set `FPL_API_BASE_URL` env var).
        #[clap(long)]
        base_url: Option<String>,

        /// Print each request URL before sending.
        #[clap(long)]
        debug: bool,
    },

    /// Render charts from an extracted CSV as SVG files.
    Plot {
        /// CSV produced by `extract`.
        #[clap(long, short, default_value = DEFAULT_CSV_PATH)]
        input: PathBuf,

        /// Directory for the SVG files.
        #[clap(long, short, default_value = DEFAULT_CHART_DIR)]
        output_dir: PathBuf,

        #[clap(subcommand)]
        chart: PlotCmd,
    },
}
