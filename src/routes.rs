// src/routes.rs
use std::sync::Arc;
use warp::reject::Rejection;
use crate::handlers::{options::get_countries, options::get_growth_rates, projection::get_projection};
use crate::handlers::projection::ProjectionQuery;
use crate::services::store::DashboardStore;
use log::info;

use std::convert::Infallible;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        code = warp::http::StatusCode::BAD_REQUEST;
        message = e.to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = warp::http::StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(store: Arc<DashboardStore>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());

    let countries_route = warp::path!("api" / "v1" / "countries")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_countries);

    let growth_rates_route = warp::path!("api" / "v1" / "growth_rates")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_growth_rates);

    let projection_route = warp::path!("api" / "v1" / "projection")
        .and(warp::get())
        .and(warp::query::<ProjectionQuery>())
        .and(store_filter.clone())
        .and_then(get_projection);

    info!("All routes configured successfully.");

    countries_route
        .or(growth_rates_route)
        .or(projection_route)
        .recover(handle_rejection)
}
