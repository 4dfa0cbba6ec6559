// src/handlers/projection.rs
use warp::reply::Json;
use warp::Rejection;
use serde::Deserialize;
use std::sync::Arc;
use log::{debug, error, info};

use crate::models::GrowthRateSelection;
use crate::services::store::DashboardStore;
use super::error::ApiError;

fn default_growth() -> String {
    GrowthRateSelection::RECENT_KEY.to_string()
}

#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    pub country: String,
    pub catchup: String,
    #[serde(default = "default_growth")]
    pub growth: String,
}

pub async fn get_projection(
    query: ProjectionQuery,
    store: Arc<DashboardStore>,
) -> Result<Json, Rejection> {
    info!(
        "Handling projection request: {} catching up with {} ({})",
        query.country, query.catchup, query.growth
    );

    let response = store
        .project(&query.country, &query.catchup, &query.growth)
        .map_err(|e| {
            error!("Projection failed: {}", e);
            warp::reject::custom(ApiError::from(e))
        })?;

    debug!(
        "Applied rate {}, verdict {}",
        response.projection.result.applied_rate, response.projection.verdict_text
    );
    Ok(warp::reply::json(&response))
}
