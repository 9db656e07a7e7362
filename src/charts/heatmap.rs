//! Player × gameweek heatmap with a colour bar.

use std::path::Path;

use plotters::prelude::*;

use super::{palette::Palette, FONT};
use crate::{dataset::analysis::PointsGrid, Result};

const HEATMAP_SIZE: (u32, u32) = (1400, 900);
const COLORBAR_WIDTH: u32 = 140;
const EMPTY_CELL: RGBColor = RGBColor(235, 235, 235);

pub fn draw_points_heatmap(path: &Path, title: &str, grid: &PointsGrid, palette: Palette) -> Result<()> {
    let root = SVGBackend::new(path, HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, (FONT, 28))?;

    let (main, bar) = root.split_horizontally((HEATMAP_SIZE.0 - COLORBAR_WIDTH) as i32);
    let (lo, hi) = grid.range().unwrap_or((0.0, 1.0));
    let span = if hi > lo { hi - lo } else { 1.0 };

    let cols = grid.gameweeks.len() as u32;
    let rows = grid.players.len() as u32;

    let mut chart = ChartBuilder::on(&main)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(220)
        .build_cartesian_2d((0u32..cols.max(1)).into_segmented(), (0u32..rows.max(1)).into_segmented())?;

    let x_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(c) => grid
            .gameweeks
            .get(*c as usize)
            .map(|gw| gw.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    // Highest scorer on top
    let y_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(r) => rows
            .checked_sub(r + 1)
            .and_then(|i| grid.players.get(i as usize))
            .map(|p| p.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(grid.gameweeks.len().max(1))
        .y_labels(grid.players.len().max(1))
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .label_style((FONT, 12))
        .x_desc("Gameweek")
        .y_desc("Player")
        .axis_desc_style((FONT, 18))
        .draw()?;

    chart.draw_series(grid.cells.iter().enumerate().flat_map(|(p, row)| {
        let y = rows - 1 - p as u32;
        row.iter().enumerate().map(move |(g, cell)| {
            let color = match cell {
                Some(v) => palette.at((v - lo) / span),
                None => EMPTY_CELL,
            };
            let x = g as u32;
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                color.filled(),
            );
            rect.set_margin(1, 1, 1, 1);
            rect
        })
    }))?;

    draw_colorbar(&bar, lo, hi, palette)?;

    root.present()?;
    Ok(())
}

fn draw_colorbar(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    lo: f64,
    hi: f64,
    palette: Palette,
) -> Result<()> {
    const STEPS: usize = 50;
    let hi = if hi > lo { hi } else { lo + 1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin_top(20)
        .margin_bottom(70)
        .margin_right(10)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, lo..hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .label_style((FONT, 12))
        .draw()?;

    let step = (hi - lo) / STEPS as f64;
    chart.draw_series((0..STEPS).map(|i| {
        let y0 = lo + step * i as f64;
        Rectangle::new(
            [(0.0, y0), (1.0, y0 + step)],
            palette.at(i as f64 / (STEPS - 1) as f64).filled(),
        )
    }))?;

    Ok(())
}
