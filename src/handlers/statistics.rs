// src/handlers/statistics.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, stats, store::SharedStore};

/// Chart data: totals per category, per type and per difficulty, the last
/// with lowest/highest highlighting.
pub async fn get_statistics(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    Ok(Json(stats::statistics(store.all())))
}
