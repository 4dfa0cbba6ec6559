// tests/api.rs
use std::sync::Arc;
use serde_json::Value;
use warp::http::StatusCode;

use mountain_to_climb::routes::routes;
use mountain_to_climb::services::dataset::GdpDataset;
use mountain_to_climb::services::miracles::MiracleTable;
use mountain_to_climb::services::projection::CatchupProjector;
use mountain_to_climb::services::store::DashboardStore;

const CSV: &str = "\
country,year,rgdpe_pc
Japan,2009,30000
Japan,2019,40000
Kenya,2009,3000
Kenya,2010,3100
Kenya,2011,3200
Kenya,2012,3300
Kenya,2013,3400
Kenya,2014,3500
Kenya,2015,3600
Kenya,2016,3700
Kenya,2017,3800
Kenya,2018,3900
Kenya,2019,4000
Tuvalu,2019,4000
";

fn store() -> Arc<DashboardStore> {
    let dataset = GdpDataset::from_csv_reader(CSV.as_bytes()).unwrap();
    Arc::new(DashboardStore::new(
        dataset,
        MiracleTable::default(),
        CatchupProjector::default(),
    ))
}

async fn get(path: &str) -> (StatusCode, Value) {
    let res = warp::test::request()
        .method("GET")
        .path(path)
        .reply(&routes(store()))
        .await;
    let body: Value = serde_json::from_slice(res.body()).unwrap();
    (res.status(), body)
}

#[tokio::test]
async fn lists_countries_with_flags() {
    let (status, body) = get("/api/v1/countries").await;
    assert_eq!(status, StatusCode::OK);
    let options = body.as_array().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0]["value"], "Japan");
    assert_eq!(options[0]["label"], "🇯🇵 Japan");
}

#[tokio::test]
async fn lists_growth_rates() {
    let (status, body) = get("/api/v1/growth_rates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);
    assert_eq!(body[0]["value"], "10-year");
}

#[tokio::test]
async fn projection_defaults_to_recent_growth() {
    let (status, body) = get("/api/v1/projection?country=Kenya&catchup=Japan").await;
    assert_eq!(status, StatusCode::OK);

    let rate = body["projection"]["applied_rate"].as_f64().unwrap();
    let expected = (4000.0f64 / 3000.0).powf(0.1) - 1.0;
    assert!((rate - expected).abs() < 1e-12);
    assert_eq!(body["projection"]["verdict"]["kind"], "WillCatchUpInYears");
    assert!(body["projection"]["verdict_text"].as_str().unwrap().starts_with("⏰ In "));
    assert_eq!(body["figure"]["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn projection_with_equal_values_is_already_there() {
    let (status, body) =
        get("/api/v1/projection?country=Tuvalu&catchup=Kenya&growth=Irish-miracle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projection"]["verdict_text"], "🗿 Already there.");
}

#[tokio::test]
async fn richer_country_is_already_richer() {
    let (status, body) =
        get("/api/v1/projection?country=Japan&catchup=Kenya&growth=historical").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projection"]["verdict_text"], "🤑 Already richer.");
}

#[tokio::test]
async fn unknown_country_is_not_found() {
    let (status, body) = get("/api/v1/projection?country=Narnia&catchup=Japan").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown country: Narnia");
}

#[tokio::test]
async fn short_series_is_unprocessable() {
    let (status, body) = get("/api/v1/projection?country=Japan&catchup=Kenya").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("11 points required"));
}

#[tokio::test]
async fn unknown_growth_key_is_not_found() {
    let (status, _) =
        get("/api/v1/projection?country=Kenya&catchup=Japan&growth=Atlantis-miracle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_query_is_bad_request() {
    let (status, _) = get("/api/v1/projection?country=Kenya").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = get("/api/v1/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}
