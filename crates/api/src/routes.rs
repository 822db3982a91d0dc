use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use solar_core::domain::location::{LocationQuery, RawLocation};
use solar_core::domain::report::AnalysisReport;
use solar_core::weather::WeatherProvider;
use std::sync::Arc;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the weather client could not be built; reports are then unadjusted.
    pub weather: Option<Arc<dyn WeatherProvider>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/test", get(endpoints))
        .route("/api/solar-data", post(solar_data))
        .route("/api/solar-data/location/:lat/:lng", get(solar_data_by_coords))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Smart Solar Repositioning API is running!",
        "status": "ok",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "API is operational",
    }))
}

async fn endpoints() -> Json<Value> {
    Json(json!({
        "message": "Solar API is working!",
        "endpoints": {
            "solar_data": "/api/solar-data",
            "location_data": "/api/solar-data/location/{lat}/{lng}",
            "health": "/health",
        },
    }))
}

pub async fn solar_data(
    State(state): State<AppState>,
    Json(body): Json<RawLocation>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let query = LocationQuery::try_from(body)?;
    run(&state, query).await
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationParams {
    #[serde(default)]
    pub include_weather: Option<bool>,
}

pub async fn solar_data_by_coords(
    State(state): State<AppState>,
    Path((lat, lng)): Path<(f64, f64)>,
    Query(params): Query<LocationParams>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let query = LocationQuery::new(lat, lng, params.include_weather.unwrap_or(false))?;
    run(&state, query).await
}

async fn run(state: &AppState, query: LocationQuery) -> Result<Json<AnalysisReport>, ApiError> {
    let report = solar_core::analysis::analyze(&query, state.weather.as_deref()).await?;
    tracing::info!(
        latitude = query.latitude(),
        longitude = query.longitude(),
        include_weather = query.include_weather(),
        weather_adjusted = report.weather_adjusted,
        annual_irradiance = report.annual_irradiance,
        "solar analysis complete"
    );
    Ok(Json(report))
}
