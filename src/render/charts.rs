// Chart geometry for the templates. No scripts; every chart is static markup.

use crate::models::snapshot::{
    CategoryCount, CategoryScore, DatedValue, MultiSeries, OrgUnitCompliance,
};

const SERIES_COLOURS: [&str; 4] = ["#3b82f6", "#ef4444", "#f59e0b", "#10b981"];

const SVG_WIDTH: f64 = 560.0;
const SVG_HEIGHT: f64 = 200.0;
const SVG_PAD: f64 = 24.0;

/// One horizontal bar: label, fill width in percent, shown value
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub width: String,
    pub shown: String,
    pub class: &'static str,
}

impl BarRow {
    fn new(
        label: impl Into<String>,
        value: f64,
        max: f64,
        shown: String,
        class: &'static str,
    ) -> Self {
        let pct = if max > 0.0 {
            (value / max * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            label: label.into(),
            width: format!("{:.1}", pct),
            shown,
            class,
        }
    }
}

/// Bars of one category, one per series
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: &'static str,
    pub rows: Vec<BarRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub colour: &'static str,
    pub dashed: bool,
    pub points: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgLabel {
    pub x: String,
    pub y: String,
    pub anchor: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub colour: &'static str,
    pub name: &'static str,
}

/// Inline SVG line chart, already projected onto the viewBox
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub lines: Vec<Polyline>,
    pub labels: Vec<SvgLabel>,
    pub legend: Vec<LegendEntry>,
}

/// Horizontal bars scaled against the largest count
pub fn count_bars(items: &[CategoryCount]) -> Vec<BarRow> {
    let max = items.iter().map(|item| item.count).max().unwrap_or(0) as f64;
    items
        .iter()
        .map(|item| BarRow::new(item.label, item.count as f64, max, item.count.to_string(), ""))
        .collect()
}

/// Horizontal bars on a 0..100 scale, coloured by status
pub fn score_bars(items: &[CategoryScore]) -> Vec<BarRow> {
    items
        .iter()
        .map(|item| {
            BarRow::new(
                item.label,
                item.score,
                100.0,
                format!("{:.0}%", item.score),
                item.status.as_str(),
            )
        })
        .collect()
}

pub fn org_unit_bars(units: &[OrgUnitCompliance]) -> Vec<BarRow> {
    units
        .iter()
        .map(|unit| {
            BarRow::new(
                format!("{} ({} accounts)", unit.name, unit.accounts),
                unit.score,
                100.0,
                format!("{:.0}%", unit.score),
                unit.status.as_str(),
            )
        })
        .collect()
}

/// One bar group per category label, one bar per series
pub fn grouped_bars(chart: &MultiSeries) -> Vec<BarGroup> {
    let max = chart.max_value();

    chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| BarGroup {
            label: *label,
            rows: chart
                .series
                .iter()
                .map(|series| {
                    let value = series.values.get(i).copied().unwrap_or(0.0);
                    BarRow::new(series.name, value, max, value.to_string(), "")
                })
                .collect(),
        })
        .collect()
}

fn x_at(i: usize, count: usize) -> f64 {
    if count <= 1 {
        return SVG_PAD;
    }
    SVG_PAD + (SVG_WIDTH - 2.0 * SVG_PAD) * i as f64 / (count - 1) as f64
}

fn y_at(value: f64, min: f64, max: f64) -> f64 {
    let span = if max > min { max - min } else { 1.0 };
    SVG_HEIGHT - SVG_PAD - (SVG_HEIGHT - 2.0 * SVG_PAD) * (value - min) / span
}

fn polyline(
    points: impl Iterator<Item = (f64, f64)>,
    colour: &'static str,
    dashed: bool,
) -> Polyline {
    let coords: Vec<String> = points.map(|(x, y)| format!("{:.1},{:.1}", x, y)).collect();
    Polyline {
        colour,
        dashed,
        points: coords.join(" "),
    }
}

fn label(x: f64, y: f64, anchor: &'static str, text: impl Into<String>) -> SvgLabel {
    SvgLabel {
        x: format!("{:.0}", x),
        y: format!("{:.0}", y),
        anchor,
        text: text.into(),
    }
}

/// Daily line with a dashed horizontal target
pub fn trend_line(points: &[DatedValue], target: f64) -> LineChart {
    let (mut min, mut max) = (target, target);
    for point in points {
        min = min.min(point.value);
        max = max.max(point.value);
    }
    min = min.floor() - 1.0;
    max = max.ceil() + 1.0;

    let count = points.len();
    let lines = vec![
        polyline(
            points
                .iter()
                .enumerate()
                .map(|(i, point)| (x_at(i, count), y_at(point.value, min, max))),
            SERIES_COLOURS[3],
            false,
        ),
        polyline(
            [0, count.saturating_sub(1)]
                .into_iter()
                .map(|i| (x_at(i, count), y_at(target, min, max))),
            SERIES_COLOURS[1],
            true,
        ),
    ];

    let mut labels = Vec::with_capacity(3);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        labels.push(label(SVG_PAD, SVG_HEIGHT - 4.0, "start", first.date.to_string()));
        labels.push(label(SVG_WIDTH - SVG_PAD, SVG_HEIGHT - 4.0, "end", last.date.to_string()));
    }
    labels.push(label(
        SVG_PAD,
        y_at(target, min, max) - 4.0,
        "start",
        format!("Target ({:.0}%)", target),
    ));

    LineChart {
        width: SVG_WIDTH,
        height: SVG_HEIGHT,
        lines,
        labels,
        legend: Vec::new(),
    }
}

/// One line per series over shared category labels
pub fn multi_line(chart: &MultiSeries) -> LineChart {
    let max = chart.max_value().max(1.0);
    let count = chart.labels.len();

    let colour = |i: usize| SERIES_COLOURS[i % SERIES_COLOURS.len()];

    let lines = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            polyline(
                series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(j, value)| (x_at(j, count), y_at(*value, 0.0, max))),
                colour(i),
                false,
            )
        })
        .collect();

    let labels = chart
        .labels
        .iter()
        .enumerate()
        .map(|(j, text)| label(x_at(j, count), SVG_HEIGHT - 4.0, "middle", *text))
        .collect();

    let legend = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| LegendEntry {
            colour: colour(i),
            name: series.name,
        })
        .collect();

    LineChart {
        width: SVG_WIDTH,
        height: SVG_HEIGHT,
        lines,
        labels,
        legend,
    }
}
