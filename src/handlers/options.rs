// src/handlers/options.rs
use warp::reply::Json;
use warp::Rejection;
use std::sync::Arc;
use log::info;

use crate::services::store::DashboardStore;

pub async fn get_countries(store: Arc<DashboardStore>) -> Result<Json, Rejection> {
    info!("Handling request to list countries");
    Ok(warp::reply::json(&store.country_options()))
}

pub async fn get_growth_rates(store: Arc<DashboardStore>) -> Result<Json, Rejection> {
    info!("Handling request to list growth rates");
    Ok(warp::reply::json(&store.growth_rate_options()))
}
