// File: ./src/charts.rs
//! History chart rendering.
//!
//! Draws two PNGs from the history store: a line chart of total and
//! prerelease counts per run day, and a stacked area chart splitting the
//! wishlist into released and prerelease items. Gruvbox-flavored palette on
//! a dark background.

use crate::history::History;
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use plotters::prelude::*;
use std::path::Path;

const FOREGROUND: RGBColor = RGBColor(0xEB, 0xDB, 0xB2);
const TOTAL_LINE: RGBColor = RGBColor(0xFB, 0x49, 0x34);
const PRERELEASE_LINE: RGBColor = RGBColor(0xB8, 0xBB, 0x26);
const RELEASED_FILL: RGBColor = RGBColor(0x8E, 0xC0, 0x7C);
const PRERELEASE_FILL: RGBColor = RGBColor(0xD3, 0x86, 0x9B);
const GRID: RGBColor = RGBColor(0xA8, 0x99, 0x84);
const LABEL: RGBColor = RGBColor(0xFA, 0xBD, 0x2F);
const LEGEND_BACKGROUND: RGBColor = RGBColor(0x28, 0x28, 0x28);
const BACKGROUND: RGBColor = RGBColor(0x32, 0x30, 0x2F);

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 1200;
const Y_DESC: &str = "# of items on Wishlist";

/// Flatten the history map into aligned label / total / prerelease columns.
fn series(history: &History) -> (Vec<String>, Vec<u32>, Vec<u32>) {
    let mut labels = Vec::with_capacity(history.len());
    let mut totals = Vec::with_capacity(history.len());
    let mut prereleases = Vec::with_capacity(history.len());
    for (day, counts) in &history.0 {
        labels.push(day.clone());
        totals.push(counts.total);
        prereleases.push(counts.prerelease);
    }
    (labels, totals, prereleases)
}

fn label_for(labels: &[String], idx: i32) -> String {
    usize::try_from(idx)
        .ok()
        .and_then(|i| labels.get(i))
        .cloned()
        .unwrap_or_default()
}

fn run_stamp(now: DateTime<Utc>) -> String {
    format!("Last run: {} UTC", now.format("%Y-%m-%d %H:%M:%S"))
}

/// Line chart: total and prerelease counts over run days.
pub fn render_line_chart(history: &History, path: &Path, now: DateTime<Utc>) -> Result<()> {
    let (labels, totals, prereleases) = series(history);
    if labels.is_empty() {
        bail!("History is empty, nothing to chart");
    }
    let y_max = totals
        .iter()
        .chain(prereleases.iter())
        .copied()
        .max()
        .unwrap_or(1)
        .max(1);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Wishlist History", ("sans-serif", 40).into_font().color(&LABEL))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(0i32..labels.len() as i32, 0u32..y_max + 1)?;

    chart
        .configure_mesh()
        .axis_style(&FOREGROUND)
        .bold_line_style(&GRID.mix(0.4))
        .light_line_style(&BACKGROUND)
        .label_style(("sans-serif", 20).into_font().color(&LABEL))
        .y_desc(Y_DESC)
        .x_label_formatter(&|idx| label_for(&labels, *idx))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            totals.iter().enumerate().map(|(i, v)| (i as i32, *v)),
            &TOTAL_LINE,
        ))?
        .label("total")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TOTAL_LINE));
    chart.draw_series(
        totals
            .iter()
            .enumerate()
            .map(|(i, v)| Circle::new((i as i32, *v), 4, TOTAL_LINE.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            prereleases.iter().enumerate().map(|(i, v)| (i as i32, *v)),
            &PRERELEASE_LINE,
        ))?
        .label("prerelease")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRERELEASE_LINE));
    chart.draw_series(
        prereleases
            .iter()
            .enumerate()
            .map(|(i, v)| Circle::new((i as i32, *v), 4, PRERELEASE_LINE.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleLeft)
        .background_style(&LEGEND_BACKGROUND)
        .border_style(&GRID)
        .label_font(("sans-serif", 20).into_font().color(&LABEL))
        .draw()?;

    root.draw(&Text::new(
        run_stamp(now),
        (WIDTH as i32 / 2 - 160, HEIGHT as i32 - 30),
        ("sans-serif", 18).into_font().color(&FOREGROUND),
    ))?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Stacked area chart: released (total minus prerelease) at the bottom,
/// prerelease stacked on top. The top edge of the stack is the total.
pub fn render_stack_plot(history: &History, path: &Path, now: DateTime<Utc>) -> Result<()> {
    let (labels, totals, prereleases) = series(history);
    if labels.is_empty() {
        bail!("History is empty, nothing to chart");
    }
    let y_max = totals.iter().copied().max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Wishlist History - Stack Plot",
            ("sans-serif", 40).into_font().color(&LABEL),
        )
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(0i32..labels.len() as i32, 0u32..y_max + 1)?;

    chart
        .configure_mesh()
        .axis_style(&FOREGROUND)
        .bold_line_style(&GRID.mix(0.4))
        .light_line_style(&BACKGROUND)
        .label_style(("sans-serif", 20).into_font().color(&LABEL))
        .y_desc(Y_DESC)
        .x_label_formatter(&|idx| label_for(&labels, *idx))
        .draw()?;

    // Draw the full stack first, then paint the released share over its
    // lower portion, leaving the prerelease share visible on top.
    chart
        .draw_series(AreaSeries::new(
            totals.iter().enumerate().map(|(i, v)| (i as i32, *v)),
            0,
            PRERELEASE_FILL.mix(0.9),
        ))?
        .label("prerelease")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRERELEASE_FILL));

    chart
        .draw_series(AreaSeries::new(
            totals
                .iter()
                .zip(prereleases.iter())
                .enumerate()
                .map(|(i, (total, prerelease))| (i as i32, total.saturating_sub(*prerelease))),
            0,
            RELEASED_FILL.mix(0.9),
        ))?
        .label("released")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RELEASED_FILL));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&LEGEND_BACKGROUND)
        .border_style(&GRID)
        .label_font(("sans-serif", 20).into_font().color(&LABEL))
        .draw()?;

    root.draw(&Text::new(
        run_stamp(now),
        (WIDTH as i32 / 2 - 160, HEIGHT as i32 - 30),
        ("sans-serif", 18).into_font().color(&FOREGROUND),
    ))?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
