// src/services/projection.rs
//! Catch-up projection: how long the selected country needs, growing at a
//! constant compound rate, to reach the catch-up country's latest GDP per
//! capita.
//!
//! Country A is the selected (projected) country, country B the one it is
//! catching up with. Everything here is pure and recomputed per request.
use crate::errors::{ProjectionError, Result};
use crate::models::{GdpPoint, GdpSeries, GrowthRateSelection, ProjectionResult, Verdict};
use crate::services::miracles::MiracleTable;

pub const DEFAULT_MAX_PROJECTION_YEARS: usize = 1000;

fn calculate_rate(start_value: f64, end_value: f64, years: f64) -> f64 {
    (end_value / start_value).powf(1.0 / years) - 1.0
}

fn check_rate(rate: f64) -> Result<f64> {
    if rate.is_finite() && rate > -1.0 {
        Ok(rate)
    } else {
        Err(ProjectionError::InvalidRate { rate })
    }
}

/// Growth rate to apply to `series` under `selection`.
///
/// Derived modes count elapsed years by position in the series, not by
/// calendar difference.
pub fn compute_growth_rate(
    series: &GdpSeries,
    selection: &GrowthRateSelection,
    table: &MiracleTable,
) -> Result<f64> {
    let points = series.points();
    let rate = match selection {
        GrowthRateSelection::Recent { years } => {
            let years = *years;
            if years == 0 || points.len() < years + 1 {
                return Err(ProjectionError::InsufficientData {
                    required: years + 1,
                    available: points.len(),
                });
            }
            let last = points[points.len() - 1].gdp_per_capita;
            let base = points[points.len() - 1 - years].gdp_per_capita;
            calculate_rate(base, last, years as f64)
        }
        GrowthRateSelection::Historical => {
            if points.len() < 2 {
                return Err(ProjectionError::InsufficientData {
                    required: 2,
                    available: points.len(),
                });
            }
            let base = points[0].gdp_per_capita;
            let last = points[points.len() - 1].gdp_per_capita;
            calculate_rate(base, last, (points.len() - 1) as f64)
        }
        GrowthRateSelection::Fixed(key) => table
            .rate(key)
            .ok_or_else(|| ProjectionError::UnknownGrowthRate { key: key.clone() })?,
    };

    check_rate(rate)
}

/// Years until `last_a` compounded at `rate` reaches `last_b`.
///
/// Negative, infinite or NaN results are left for [`classify_verdict`].
pub fn years_to_catchup(last_a: f64, last_b: f64, rate: f64) -> Result<f64> {
    let rate = check_rate(rate)?;
    Ok((last_b / last_a).ln() / (1.0 + rate).ln())
}

/// Checks run in order and the first match wins; they overlap on purpose.
pub fn classify_verdict(last_a: f64, last_b: f64, years: f64) -> Verdict {
    if years < 0.0 && last_a < last_b {
        Verdict::Never
    } else if last_a > last_b {
        Verdict::AlreadyRicher
    } else if last_a == last_b {
        Verdict::AlreadyEqual
    } else if !years.is_finite() {
        // zero growth: the gap never closes
        Verdict::Never
    } else {
        Verdict::WillCatchUpInYears(years.round_ties_even() as i64)
    }
}

/// Historical points of `series_a` followed by `ceil(years)` forward points,
/// at most `max_years` of them. Negative or non-finite `years` adds nothing.
pub fn build_projection(
    series_a: &GdpSeries,
    last_a: f64,
    rate: f64,
    years: f64,
    max_years: usize,
) -> Vec<GdpPoint> {
    let horizon = if years.is_finite() && years > 0.0 {
        (years.ceil() as usize).min(max_years)
    } else {
        0
    };

    let mut projected = series_a.points().to_vec();
    let Some(last_year) = series_a.last().map(|p| p.year) else {
        return projected;
    };

    projected.reserve(horizon);
    for i in 1..=horizon {
        projected.push(GdpPoint::new(
            last_year + i as i32,
            last_a * (1.0 + rate).powi(i as i32),
        ));
    }
    projected
}

/// Two-point trendline from `(min year, min value)` to `(max year, last value)`.
///
/// The first point takes the series minimum, which need not be the value at
/// the first year.
pub fn build_trendline(series: &GdpSeries) -> Vec<GdpPoint> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };
    let min_value = series
        .points()
        .iter()
        .map(|p| p.gdp_per_capita)
        .fold(f64::INFINITY, f64::min);

    vec![
        GdpPoint::new(first.year, min_value),
        GdpPoint::new(last.year, last.gdp_per_capita),
    ]
}

fn last_value(series: &GdpSeries) -> Result<f64> {
    series
        .last()
        .map(|p| p.gdp_per_capita)
        .ok_or(ProjectionError::InsufficientData {
            required: 1,
            available: 0,
        })
}

#[derive(Debug, Clone, Copy)]
pub struct CatchupProjector {
    pub max_projection_years: usize,
}

impl CatchupProjector {
    pub fn new(max_projection_years: usize) -> Self {
        CatchupProjector { max_projection_years }
    }

    /// Runs the whole computation for one pair of countries.
    pub fn project(
        &self,
        series_a: &GdpSeries,
        series_b: &GdpSeries,
        selection: &GrowthRateSelection,
        table: &MiracleTable,
    ) -> Result<ProjectionResult> {
        let last_a = last_value(series_a)?;
        let last_b = last_value(series_b)?;

        let applied_rate = compute_growth_rate(series_a, selection, table)?;
        let years = years_to_catchup(last_a, last_b, applied_rate)?;
        let verdict = classify_verdict(last_a, last_b, years);

        Ok(ProjectionResult {
            applied_rate,
            years_to_catchup: years,
            verdict,
            projected_series: build_projection(
                series_a,
                last_a,
                applied_rate,
                years,
                self.max_projection_years,
            ),
            trendline_series: build_trendline(series_a),
        })
    }
}

impl Default for CatchupProjector {
    fn default() -> Self {
        CatchupProjector::new(DEFAULT_MAX_PROJECTION_YEARS)
    }
}
