// src/services/chart.rs
//! Plotly-shaped figure for the catch-up chart. The frontend passes `data`
//! and `layout` straight to the renderer.
use serde::Serialize;

use crate::models::{GdpPoint, GdpSeries, ProjectionResult};

const SELECTED_COLOR: &str = "#4682B4";
const CATCHUP_COLOR: &str = "#FF6347";
const PROJECTION_COLOR: &str = "#32CD32";
const TRENDLINE_COLOR: &str = "#808080";
const BACKGROUND: &str = "#f2f2f2";

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: u32,
    pub color: &'static str,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub line: Line,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[i32; 2]>,
    pub gridcolor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: &'static str,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

fn trace(name: String, mode: &'static str, points: &[GdpPoint], line: Line) -> Trace {
    Trace {
        kind: "scatter",
        name,
        mode,
        x: points.iter().map(|p| p.year).collect(),
        y: points.iter().map(|p| p.gdp_per_capita).collect(),
        line,
        marker: None,
    }
}

fn actual(series: &GdpSeries, color: &'static str) -> Trace {
    Trace {
        marker: Some(Marker { size: 8, color, symbol: "circle" }),
        ..trace(
            series.country.clone(),
            "lines+markers",
            series.points(),
            Line { color, width: 2, dash: None },
        )
    }
}

/// Traces in drawing order: selected actual, catch-up actual, projection,
/// trendline.
pub fn build_figure(
    selected: &GdpSeries,
    catchup: &GdpSeries,
    projection: &ProjectionResult,
) -> Figure {
    let x_range = match (selected.first(), projection.projected_series.last()) {
        (Some(first), Some(last)) => Some([first.year, last.year]),
        _ => None,
    };

    let data = vec![
        actual(selected, SELECTED_COLOR),
        actual(catchup, CATCHUP_COLOR),
        trace(
            format!("{} Projection", selected.country),
            "lines",
            &projection.projected_series,
            Line { color: PROJECTION_COLOR, width: 2, dash: Some("dash") },
        ),
        trace(
            "Trendline".to_string(),
            "lines",
            &projection.trendline_series,
            Line { color: TRENDLINE_COLOR, width: 2, dash: Some("dot") },
        ),
    ];

    Figure {
        data,
        layout: Layout {
            xaxis: Axis { title: "Year", range: x_range, gridcolor: "#ffffff" },
            yaxis: Axis { title: "GDP per capita, 2017 US$", range: None, gridcolor: "#ffffff" },
            hovermode: "closest",
            plot_bgcolor: BACKGROUND,
            paper_bgcolor: BACKGROUND,
        },
    }
}
