use dotenv::dotenv;
use env_logger;
use log::info;
use warp::Filter;
use std::net::SocketAddr;
use std::sync::Arc;

use mountain_to_climb::config::AppConfig;
use mountain_to_climb::routes;
use mountain_to_climb::services::dataset::GdpDataset;
use mountain_to_climb::services::miracles::MiracleTable;
use mountain_to_climb::services::projection::CatchupProjector;
use mountain_to_climb::services::store::DashboardStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env()?;

    let dataset = GdpDataset::load(&config.data_source).await?;
    if dataset.is_empty() {
        anyhow::bail!("Dataset at {} has no usable GDP series", config.data_source);
    }

    let store = Arc::new(DashboardStore::new(
        dataset,
        MiracleTable::default(),
        CatchupProjector::new(config.max_projection_years),
    ));
    info!("Serving {} countries", store.dataset().countries().len());

    // Bind to 0.0.0.0 for Heroku
    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    let api = routes::routes(store).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;

    Ok(())
}
