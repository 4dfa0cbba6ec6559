// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GdpPoint {
    pub year: i32,
    pub gdp_per_capita: f64,
}

impl GdpPoint {
    pub fn new(year: i32, gdp_per_capita: f64) -> Self {
        GdpPoint { year, gdp_per_capita }
    }
}

/// GDP per capita for one country, ascending by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GdpSeries {
    pub country: String,
    points: Vec<GdpPoint>,
}

impl GdpSeries {
    /// Builds a series, ordering the points by year.
    pub fn new(country: impl Into<String>, mut points: Vec<GdpPoint>) -> Self {
        points.sort_by_key(|p| p.year);
        GdpSeries {
            country: country.into(),
            points,
        }
    }

    pub fn points(&self) -> &[GdpPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&GdpPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GdpPoint> {
        self.points.last()
    }

    pub(crate) fn push(&mut self, point: GdpPoint) {
        self.points.push(point);
    }

    /// Restores year order and drops repeated years, keeping the first seen.
    /// Returns how many points were dropped.
    pub(crate) fn normalize(&mut self) -> usize {
        let before = self.points.len();
        self.points.sort_by_key(|p| p.year);
        self.points.dedup_by_key(|p| p.year);
        before - self.points.len()
    }
}

/// How the growth rate applied to the lagging country is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrowthRateSelection {
    /// Compound rate over the last `years` steps of the series.
    Recent { years: usize },
    /// Compound rate from the first to the last point of the series.
    Historical,
    /// A named entry of the miracle table.
    Fixed(String),
}

impl GrowthRateSelection {
    pub const RECENT_KEY: &'static str = "10-year";
    pub const HISTORICAL_KEY: &'static str = "historical";
    pub const RECENT_YEARS: usize = 10;

    /// Parses a dropdown value. Anything that is not a derived mode is
    /// treated as a miracle table key and checked when the rate is computed.
    pub fn from_key(key: &str) -> Self {
        match key {
            Self::RECENT_KEY => GrowthRateSelection::Recent { years: Self::RECENT_YEARS },
            Self::HISTORICAL_KEY => GrowthRateSelection::Historical,
            other => GrowthRateSelection::Fixed(other.to_string()),
        }
    }
}

impl Default for GrowthRateSelection {
    fn default() -> Self {
        GrowthRateSelection::Recent { years: Self::RECENT_YEARS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "years")]
pub enum Verdict {
    AlreadyRicher,
    AlreadyEqual,
    Never,
    WillCatchUpInYears(i64),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Never => write!(f, "☠️ Never."),
            Verdict::AlreadyRicher => write!(f, "🤑 Already richer."),
            Verdict::AlreadyEqual => write!(f, "🗿 Already there."),
            Verdict::WillCatchUpInYears(n) => write!(f, "⏰ In {} years.", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub applied_rate: f64,
    /// Negative when the trend moves the countries apart; infinite or NaN
    /// when the rate is zero.
    pub years_to_catchup: f64,
    pub verdict: Verdict,
    pub projected_series: Vec<GdpPoint>,
    pub trendline_series: Vec<GdpPoint>,
}

/// A labelled dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}
