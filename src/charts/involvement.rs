//! xGI against actual goals + assists, three bars per player.

use std::path::Path;

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{axis_range, FONT};
use crate::{dataset::analysis::InvolvementSummary, Result};

const INVOLVEMENT_SIZE: (u32, u32) = (1400, 800);
const BAR_WIDTH: f64 = 0.25;

const XGI_COLOR: RGBColor = RGBColor(106, 13, 173);
const GOALS_COLOR: RGBColor = RGBColor(31, 119, 180);
const ASSISTS_COLOR: RGBColor = RGBColor(255, 127, 14);
const OVER_UNDER_COLOR: RGBColor = RGBColor(44, 160, 44);

/// Player label with the surname upper-cased, unless it is written all lower case.
pub fn display_name(first_name: &str, second_name: &str) -> String {
    if second_name.chars().any(char::is_uppercase) {
        format!("{} {}", first_name, second_name.to_uppercase())
    } else {
        format!("{} {}", first_name, second_name)
    }
}

pub fn draw_xgi_vs_actual(path: &Path, title: &str, players: &[InvolvementSummary]) -> Result<()> {
    let root = SVGBackend::new(path, INVOLVEMENT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = players.len();
    let values = players
        .iter()
        .flat_map(|p| [p.xgi, p.actual(), p.over_under()]);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 30).into_font().style(FontStyle::Bold))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n.max(1) as f64 - 0.5), axis_range(values))?;

    let names: Vec<String> = players
        .iter()
        .map(|p| display_name(&p.player.first_name, &p.player.second_name))
        .collect();
    let x_label = |x: &f64| {
        let i = x.round();
        if (x - i).abs() < 1e-6 && i >= 0.0 {
            names.get(i as usize).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(RGBColor(180, 180, 180).stroke_width(1))
        .x_labels(n.max(1) + 1)
        .x_label_formatter(&x_label)
        .label_style((FONT, 12))
        .x_desc("Player")
        .y_desc("Goal Involvement")
        .axis_desc_style((FONT, 16))
        .draw()?;

    let column = |i: usize, offset: f64, y0: f64, y1: f64, color: RGBColor| {
        let center = i as f64 + offset;
        Rectangle::new(
            [(center - BAR_WIDTH / 2.0, y0), (center + BAR_WIDTH / 2.0, y1)],
            color.mix(0.85).filled(),
        )
    };

    chart
        .draw_series(
            players
                .iter()
                .enumerate()
                .map(|(i, p)| column(i, -BAR_WIDTH, 0.0, p.xgi, XGI_COLOR)),
        )?
        .label("Expected Goal Involvement (xGI)")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], XGI_COLOR.filled()));

    let goals_top = |p: &InvolvementSummary| f64::from(p.goals);
    chart
        .draw_series(
            players
                .iter()
                .enumerate()
                .map(|(i, p)| column(i, 0.0, 0.0, goals_top(p), GOALS_COLOR)),
        )?
        .label("Actual Goals")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], GOALS_COLOR.filled()));

    chart
        .draw_series(
            players
                .iter()
                .enumerate()
                .map(|(i, p)| column(i, 0.0, goals_top(p), p.actual(), ASSISTS_COLOR)),
        )?
        .label("Actual Assists")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], ASSISTS_COLOR.filled()));

    chart
        .draw_series(
            players
                .iter()
                .enumerate()
                .map(|(i, p)| column(i, BAR_WIDTH, 0.0, p.over_under(), OVER_UNDER_COLOR)),
        )?
        .label("Over/Underperformance")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], OVER_UNDER_COLOR.filled())
        });

    let value_font = |color: &RGBColor| {
        (FONT, 11)
            .into_font()
            .style(FontStyle::Bold)
            .color(color)
            .pos(Pos::new(HPos::Center, VPos::Center))
    };

    let mut labels: Vec<Text<'_, (f64, f64), String>> = Vec::with_capacity(n * 4);
    for (i, p) in players.iter().enumerate() {
        let x = i as f64;
        if p.goals > 0 {
            labels.push(Text::new(
                p.goals.to_string(),
                (x, goals_top(p) / 2.0),
                value_font(&WHITE),
            ));
        }
        if p.assists > 0 {
            labels.push(Text::new(
                p.assists.to_string(),
                (x, goals_top(p) + f64::from(p.assists) / 2.0),
                value_font(&BLACK),
            ));
        }
        labels.push(Text::new(
            format!("{:.2}", p.xgi),
            (x - BAR_WIDTH, p.xgi / 2.0),
            value_font(&WHITE),
        ));
        labels.push(Text::new(
            format!("{:.2}", p.over_under()),
            (x + BAR_WIDTH, p.over_under() / 2.0),
            value_font(&BLACK),
        ));
    }
    chart.draw_series(labels)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
