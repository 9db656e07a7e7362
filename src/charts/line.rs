//! Per-gameweek line charts for a single player.

use std::path::Path;

use plotters::prelude::*;

use super::{axis_range, FIGURE_SIZE, FONT};
use crate::{cli::types::Gameweek, Result};

#[derive(Debug, Clone)]
pub struct LineChart<'a> {
    pub title: &'a str,
    pub y_desc: &'a str,
    pub points: Vec<(Gameweek, f64)>,
    pub color: RGBColor,
}

pub fn draw_gameweek_line(path: &Path, def: &LineChart<'_>) -> Result<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(u32, f64)> = def
        .points
        .iter()
        .map(|(gw, v)| (u32::from(gw.as_u16()), *v))
        .collect();
    let first = points.iter().map(|p| p.0).min().unwrap_or(1);
    let last = points.iter().map(|p| p.0).max().unwrap_or(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(def.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            first.saturating_sub(1)..last + 1,
            axis_range(points.iter().map(|p| p.1)),
        )?;

    chart
        .configure_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(RGBColor(200, 200, 200).stroke_width(1))
        .label_style((FONT, 14))
        .x_labels(20)
        .x_desc("Gameweek")
        .y_desc(def.y_desc)
        .axis_desc_style((FONT, 18))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        def.color.stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, def.color.filled())),
    )?;

    root.present()?;
    Ok(())
}
