//! Scatter plots coloured by a category (player position).

use std::path::Path;

use plotters::prelude::*;

use super::{axis_range, palette::Palette, FIGURE_SIZE, FONT};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub group: String,
}

#[derive(Debug, Clone)]
pub struct ScatterChart<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub points: Vec<ScatterPoint>,
    /// Groups in legend order
    pub groups: Vec<String>,
    pub palette: Palette,
}

pub fn draw_scatter(path: &Path, def: &ScatterChart<'_>) -> Result<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(def.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            axis_range(def.points.iter().map(|p| p.x)),
            axis_range(def.points.iter().map(|p| p.y)),
        )?;

    chart
        .configure_mesh()
        .light_line_style(WHITE.mix(0.0))
        .label_style((FONT, 14))
        .x_desc(def.x_desc)
        .y_desc(def.y_desc)
        .axis_desc_style((FONT, 18))
        .draw()?;

    for (g, group) in def.groups.iter().enumerate() {
        let color = def.palette.pick(g, def.groups.len());
        chart
            .draw_series(
                def.points
                    .iter()
                    .filter(|p| &p.group == group)
                    .map(|p| Circle::new((p.x, p.y), 6, color.mix(0.7).filled())),
            )?
            .label(group.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, 14))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
