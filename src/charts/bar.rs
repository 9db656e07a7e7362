//! Horizontal bar charts, optionally coloured by group.

use std::path::Path;

use plotters::prelude::*;

use super::{axis_range, palette::Palette, FIGURE_SIZE, FONT};
use crate::Result;

/// One bar. Bars are drawn top to bottom in the order given.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub group: Option<String>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            group: None,
        }
    }

    pub fn grouped(label: impl Into<String>, value: f64, group: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            group: Some(group.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub bars: Vec<Bar>,
    pub palette: Palette,
}

pub fn draw_horizontal_bars(path: &Path, def: &BarChart<'_>) -> Result<()> {
    let n = def.bars.len() as u32;
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(def.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(200)
        .build_cartesian_2d(
            axis_range(def.bars.iter().map(|b| b.value)),
            (0u32..n.max(1)).into_segmented(),
        )?;

    // Slot 0 is the bottom of the axis, so the first bar goes in the top slot.
    let slot_of = |i: usize| n - 1 - i as u32;
    let label_of = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(s) | SegmentValue::Exact(s) => n
            .checked_sub(s + 1)
            .and_then(|i| def.bars.get(i as usize))
            .map(|b| b.label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(WHITE.mix(0.0))
        .y_labels(def.bars.len().max(1))
        .y_label_formatter(&label_of)
        .label_style((FONT, 14))
        .x_desc(def.x_desc)
        .y_desc(def.y_desc)
        .axis_desc_style((FONT, 18))
        .draw()?;

    let bar_rect = |i: usize, bar: &Bar, color: RGBColor| {
        let slot = slot_of(i);
        let (x0, x1) = if bar.value >= 0.0 {
            (0.0, bar.value)
        } else {
            (bar.value, 0.0)
        };
        let mut rect = Rectangle::new(
            [(x0, SegmentValue::Exact(slot)), (x1, SegmentValue::Exact(slot + 1))],
            color.filled(),
        );
        rect.set_margin(3, 3, 0, 0);
        rect
    };

    let groups = group_names(&def.bars);
    if groups.is_empty() {
        let total = def.bars.len();
        chart.draw_series(
            def.bars
                .iter()
                .enumerate()
                .map(|(i, bar)| bar_rect(i, bar, def.palette.pick(i, total))),
        )?;
    } else {
        for (g, group) in groups.iter().enumerate() {
            let color = def.palette.pick(g, groups.len());
            chart
                .draw_series(
                    def.bars
                        .iter()
                        .enumerate()
                        .filter(|(_, bar)| bar.group.as_deref() == Some(group.as_str()))
                        .map(|(i, bar)| bar_rect(i, bar, color)),
                )?
                .label(group.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .label_font((FONT, 14))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Distinct group names in first-seen order.
fn group_names(bars: &[Bar]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for group in bars.iter().filter_map(|b| b.group.as_ref()) {
        if !groups.contains(group) {
            groups.push(group.clone());
        }
    }
    groups
}
