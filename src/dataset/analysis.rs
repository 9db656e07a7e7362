//! Grouping and ranking over gameweek rows.
//!
//! Players are identified by `(first_name, second_name)`. Rankings sort by
//! value descending and break ties by key ascending.

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use crate::cli::types::{Gameweek, Position, TeamId};

use super::row::GameweekRow;

/// Grouping key for a player
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerKey {
    pub first_name: String,
    pub second_name: String,
}

impl PlayerKey {
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
        }
    }

    pub fn of(row: &GameweekRow) -> Self {
        Self::new(row.first_name.as_str(), row.second_name.as_str())
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.second_name)
    }
}

/// Player grouped together with their position
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionedPlayer {
    pub position: Position,
    pub player: PlayerKey,
}

/// A group and its aggregated value
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<K> {
    pub key: K,
    pub value: f64,
}

/// How rows sharing a group are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Mean,
}

fn aggregate<'a, K, I, F, M>(rows: I, key_fn: F, metric: M, how: Aggregate) -> Vec<Ranked<K>>
where
    K: Ord,
    I: IntoIterator<Item = &'a GameweekRow>,
    F: Fn(&GameweekRow) -> K,
    M: Fn(&GameweekRow) -> Option<f64>,
{
    let mut groups: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let Some(v) = metric(row) else {
            continue;
        };
        let entry = groups.entry(key_fn(row)).or_insert((0.0, 0));
        entry.0 += v;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(key, (sum, count))| Ranked {
            key,
            value: match how {
                Aggregate::Sum => sum,
                Aggregate::Mean => sum / count as f64,
            },
        })
        .collect()
}

/// Sort by value descending, then key ascending.
fn rank<K: Ord>(mut groups: Vec<Ranked<K>>) -> Vec<Ranked<K>> {
    groups.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    groups
}

/// Top `n` players by `metric` summed over their gameweeks.
pub fn top_players_by_sum<M>(rows: &[GameweekRow], n: usize, metric: M) -> Vec<Ranked<PlayerKey>>
where
    M: Fn(&GameweekRow) -> f64,
{
    let mut ranked = rank(aggregate(rows, PlayerKey::of, |r| Some(metric(r)), Aggregate::Sum));
    ranked.truncate(n);
    ranked
}

/// Top `n` players by the mean of `metric`; rows where it is `None` are skipped.
pub fn top_players_by_mean<M>(rows: &[GameweekRow], n: usize, metric: M) -> Vec<Ranked<PlayerKey>>
where
    M: Fn(&GameweekRow) -> Option<f64>,
{
    let mut ranked = rank(aggregate(rows, PlayerKey::of, metric, Aggregate::Mean));
    ranked.truncate(n);
    ranked
}

/// Top `n` goalkeepers and defenders by clean sheets.
pub fn clean_sheet_leaders(rows: &[GameweekRow], n: usize) -> Vec<Ranked<PositionedPlayer>> {
    let defensive = rows.iter().filter(|r| r.position.is_defensive());
    let mut ranked = rank(aggregate(
        defensive,
        positioned,
        |r| Some(f64::from(r.clean_sheets)),
        Aggregate::Sum,
    ));
    ranked.truncate(n);
    ranked
}

/// Top `n` per position by summed total points, positions in squad order.
pub fn top_players_per_position(rows: &[GameweekRow], n: usize) -> Vec<Ranked<PositionedPlayer>> {
    let totals = aggregate(
        rows,
        positioned,
        |r| Some(f64::from(r.total_points)),
        Aggregate::Sum,
    );

    let mut by_position: BTreeMap<Position, Vec<Ranked<PositionedPlayer>>> = BTreeMap::new();
    for total in totals {
        by_position
            .entry(total.key.position)
            .or_default()
            .push(total);
    }

    by_position
        .into_values()
        .flat_map(|group| rank(group).into_iter().take(n))
        .collect()
}

fn positioned(row: &GameweekRow) -> PositionedPlayer {
    PositionedPlayer {
        position: row.position,
        player: PlayerKey::of(row),
    }
}

/// Summed total points per team, in team id order.
pub fn team_totals(rows: &[GameweekRow]) -> Vec<Ranked<TeamId>> {
    aggregate(
        rows,
        |r| r.team,
        |r| Some(f64::from(r.total_points)),
        Aggregate::Sum,
    )
}

/// One player's metric per gameweek, in gameweek order.
///
/// Double gameweeks produce two rows for one round; `how` decides how they combine.
pub fn gameweek_series<'a, I, M>(rows: I, metric: M, how: Aggregate) -> Vec<(Gameweek, f64)>
where
    I: IntoIterator<Item = &'a GameweekRow>,
    M: Fn(&GameweekRow) -> f64,
{
    aggregate(rows, |r| r.round, |r| Some(metric(r)), how)
        .into_iter()
        .map(|g| (g.key, g.value))
        .collect()
}

/// Running total of a series.
pub fn cumulative(series: &[(Gameweek, f64)]) -> Vec<(Gameweek, f64)> {
    series
        .iter()
        .scan(0.0, |acc, (gw, v)| {
            *acc += v;
            Some((*gw, *acc))
        })
        .collect()
}

/// Points per (player, gameweek) pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsGrid {
    pub players: Vec<PlayerKey>,
    pub gameweeks: Vec<Gameweek>,
    /// `cells[player][gameweek]`; `None` where the player has no row.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl PointsGrid {
    /// Smallest and largest filled cell.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Pivot summed points for the `max_players` highest scorers.
pub fn points_grid(rows: &[GameweekRow], max_players: usize) -> PointsGrid {
    let players: Vec<PlayerKey> =
        top_players_by_sum(rows, max_players, |r| f64::from(r.total_points))
            .into_iter()
            .map(|r| r.key)
            .collect();

    let mut gameweeks: Vec<Gameweek> = rows.iter().map(|r| r.round).collect();
    gameweeks.sort();
    gameweeks.dedup();

    let player_idx: BTreeMap<&PlayerKey, usize> =
        players.iter().enumerate().map(|(i, p)| (p, i)).collect();
    let gw_idx: BTreeMap<Gameweek, usize> =
        gameweeks.iter().enumerate().map(|(i, g)| (*g, i)).collect();

    let mut cells = vec![vec![None; gameweeks.len()]; players.len()];
    for row in rows {
        let key = PlayerKey::of(row);
        let (Some(&p), Some(&g)) = (player_idx.get(&key), gw_idx.get(&row.round)) else {
            continue;
        };
        let cell: &mut Option<f64> = &mut cells[p][g];
        *cell = Some(cell.unwrap_or(0.0) + f64::from(row.total_points));
    }

    PointsGrid {
        players,
        gameweeks,
        cells,
    }
}

/// Expected versus actual goal involvement for one player
#[derive(Debug, Clone, PartialEq)]
pub struct InvolvementSummary {
    pub player: PlayerKey,
    pub xgi: f64,
    pub goals: u32,
    pub assists: u32,
}

impl InvolvementSummary {
    pub fn actual(&self) -> f64 {
        f64::from(self.goals + self.assists)
    }

    /// Positive when the player beat their xGI.
    pub fn over_under(&self) -> f64 {
        self.actual() - self.xgi
    }
}

/// Top `n` players by summed xGI with their actual goals and assists.
pub fn xgi_summaries(rows: &[GameweekRow], n: usize) -> Vec<InvolvementSummary> {
    let mut totals: BTreeMap<PlayerKey, InvolvementSummary> = BTreeMap::new();
    for row in rows {
        let key = PlayerKey::of(row);
        let entry = totals
            .entry(key.clone())
            .or_insert_with(|| InvolvementSummary {
                player: key,
                xgi: 0.0,
                goals: 0,
                assists: 0,
            });
        entry.xgi += row.xgi();
        entry.goals += row.goals_scored;
        entry.assists += row.assists;
    }

    let mut summaries: Vec<InvolvementSummary> = totals.into_values().collect();
    summaries.sort_by(|a, b| {
        b.xgi
            .partial_cmp(&a.xgi)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player.cmp(&b.player))
    });
    summaries.truncate(n);
    summaries
}
