use axum::{extract::State, Json};

use crate::app::dto::{HealthResponse, WelcomeResponse};
use crate::app::AppState;

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: state.catalog.len(),
    })
}
