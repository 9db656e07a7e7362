//! Extract every player's gameweek history into the CSV.
//!
//! Fetches the roster from `bootstrap-static/`, then each player's
//! `element-summary/{id}/` one after another with a fixed pause between
//! requests. Rows are written once, after the last player. Any failure aborts
//! the run and nothing is written.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use tracing::{debug, info};

use crate::{
    dataset::{flatten_player, write_csv, GameweekRow, DEFAULT_CSV_PATH},
    fpl::FplClient,
    Result,
};

/// Default pause between per-player requests.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for one extraction run.
///
/// ```rust
/// use fpl_stats::commands::extract::ExtractParams;
/// use std::time::Duration;
///
/// let params = ExtractParams {
///     limit: Some(20),
///     delay: Duration::from_millis(250),
///     ..ExtractParams::default()
/// };
/// assert_eq!(params.output.to_str(), Some("fpl_players_gameweek_data.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct ExtractParams {
    pub output: PathBuf,
    /// API root override; `None` falls back to `FPL_API_BASE_URL`, then the public API.
    pub base_url: Option<String>,
    pub delay: Duration,
    /// Only fetch the first `n` players of the roster.
    pub limit: Option<usize>,
    pub debug: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_CSV_PATH),
            base_url: None,
            delay: DEFAULT_DELAY,
            limit: None,
            debug: false,
        }
    }
}

/// What an extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub players: usize,
    pub rows: usize,
    pub output: PathBuf,
}

pub async fn handle_extract(params: ExtractParams) -> Result<ExtractSummary> {
    let client = FplClient::new(params.base_url.clone())?.with_debug(params.debug);
    debug!(base_url = client.base_url(), "starting extraction");

    let mut players = client.get_all_players().await?;
    if let Some(limit) = params.limit {
        players.truncate(limit);
    }
    info!(players = players.len(), "roster loaded");

    let started = Instant::now();
    let mut rows: Vec<GameweekRow> = Vec::new();
    for player in &players {
        info!("Fetching data for player ID: {}", player.id);
        let summary = client.element_summary(player.id).await?;
        rows.extend(flatten_player(player, &summary));

        tokio::time::sleep(params.delay).await;
    }
    debug!(elapsed = ?started.elapsed(), rows = rows.len(), "all players fetched");

    write_csv(&params.output, &rows)?;
    println!(
        "✓ Data for {} players ({} rows) saved to {}",
        players.len(),
        rows.len(),
        params.output.display()
    );

    Ok(ExtractSummary {
        players: players.len(),
        rows: rows.len(),
        output: params.output,
    })
}
