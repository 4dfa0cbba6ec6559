// src/bin/project.rs
// Usage: project <country> <catchup country> [growth key]
use dotenv::dotenv;
use std::env;

use mountain_to_climb::config::AppConfig;
use mountain_to_climb::models::GrowthRateSelection;
use mountain_to_climb::services::dataset::GdpDataset;
use mountain_to_climb::services::miracles::MiracleTable;
use mountain_to_climb::services::projection::CatchupProjector;
use mountain_to_climb::services::store::DashboardStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (country, catchup) = match (args.first(), args.get(1)) {
        (Some(country), Some(catchup)) => (country.as_str(), catchup.as_str()),
        _ => anyhow::bail!("usage: project <country> <catchup country> [growth key]"),
    };
    let growth = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(GrowthRateSelection::RECENT_KEY);

    let config = AppConfig::from_env()?;
    let dataset = GdpDataset::load(&config.data_source).await?;
    let store = DashboardStore::new(
        dataset,
        MiracleTable::default(),
        CatchupProjector::new(config.max_projection_years),
    );

    let response = store.project(country, catchup, growth)?;
    let projection = &response.projection;
    println!("{} → {} ({})", country, catchup, growth);
    println!("Applied rate:     {:.4}%", projection.result.applied_rate * 100.0);
    println!("Years to catchup: {:.2}", projection.result.years_to_catchup);
    println!("{}", projection.verdict_text);
    Ok(())
}
