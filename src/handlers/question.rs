// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    config::Config,
    error::AppError,
    generator,
    models::{listing::ListParams, question::QuestionForm},
    query,
    store::SharedStore,
};

/// Largest batch `generate_questions` will add in one call.
const MAX_GENERATE: usize = 50;

/// Lists questions, filtered, sorted and paginated.
///
/// See `ListParams` for the accepted query string.
pub async fn list_questions(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let list_query = params.into_query(config.page_size)?;

    let store = store.read().await;
    let page = query::list_questions(store.all(), &list_query);

    Ok(Json(page))
}

/// Retrieves a single question by ID.
pub async fn get_question(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    let question = store
        .get(id)
        .cloned()
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(question))
}

/// Creates a new question from the add form.
pub async fn create_question(
    State(store): State<SharedStore>,
    Json(payload): Json<QuestionForm>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;

    let question = store.write().await.add(draft);
    tracing::info!("Created question {}", question.id);

    Ok((StatusCode::CREATED, Json(question)))
}

/// Replaces a question from the edit form. The id is preserved.
pub async fn update_question(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(payload): Json<QuestionForm>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;

    let question = store.write().await.update(id, draft)?;
    tracing::info!("Updated question {}", id);

    Ok(Json(question))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    store.write().await.delete(id)?;
    tracing::info!("Deleted question {}", id);

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub count: Option<usize>,
}

/// Adds `count` (default 1, at most 50) randomly generated questions.
pub async fn generate_questions(
    State(store): State<SharedStore>,
    Query(params): Query<GenerateParams>,
) -> Result<impl IntoResponse, AppError> {
    let count = params.count.unwrap_or(1);
    if count == 0 || count > MAX_GENERATE {
        return Err(AppError::BadRequest(format!(
            "count must be between 1 and {}",
            MAX_GENERATE
        )));
    }

    let questions = generator::generate_into(&store, count).await;
    tracing::info!("Generated {} random questions", questions.len());

    Ok((StatusCode::CREATED, Json(questions)))
}
