// src/services/store.rs
use serde::Serialize;

use crate::errors::Result;
use crate::models::{GrowthRateSelection, ProjectionResult, SelectOption};
use crate::services::chart::{build_figure, Figure};
use crate::services::dataset::GdpDataset;
use crate::services::miracles::MiracleTable;
use crate::services::options::{country_options, growth_rate_options};
use crate::services::projection::CatchupProjector;

#[derive(Debug, Serialize)]
pub struct Projection {
    pub country: String,
    pub catchup_country: String,
    #[serde(flatten)]
    pub result: ProjectionResult,
    pub verdict_text: String,
}

#[derive(Debug, Serialize)]
pub struct CatchupResponse {
    pub projection: Projection,
    pub figure: Figure,
}

/// Immutable state shared by every request.
pub struct DashboardStore {
    dataset: GdpDataset,
    miracles: MiracleTable,
    projector: CatchupProjector,
}

impl DashboardStore {
    pub fn new(dataset: GdpDataset, miracles: MiracleTable, projector: CatchupProjector) -> Self {
        Self { dataset, miracles, projector }
    }

    pub fn dataset(&self) -> &GdpDataset {
        &self.dataset
    }

    pub fn country_options(&self) -> Vec<SelectOption> {
        country_options(&self.dataset)
    }

    pub fn growth_rate_options(&self) -> Vec<SelectOption> {
        growth_rate_options(&self.miracles)
    }

    /// Full recomputation for one set of selections.
    pub fn project(&self, country: &str, catchup: &str, growth: &str) -> Result<CatchupResponse> {
        let selected = self.dataset.series(country)?;
        let catchup_series = self.dataset.series(catchup)?;
        let selection = GrowthRateSelection::from_key(growth);

        let result = self
            .projector
            .project(selected, catchup_series, &selection, &self.miracles)?;
        let figure = build_figure(selected, catchup_series, &result);
        let verdict_text = result.verdict.to_string();

        Ok(CatchupResponse {
            projection: Projection {
                country: country.to_string(),
                catchup_country: catchup.to_string(),
                result,
                verdict_text,
            },
            figure,
        })
    }
}
