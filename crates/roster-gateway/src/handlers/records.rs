use crate::error::{AppError, Result};
use crate::model::{CreateRecordRequest, RecordResponse, SearchQuery};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::RecordId;

pub async fn create_record_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    let id = state.registry().create(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, state.record_url(&id))],
    )
        .into_response())
}

pub async fn get_record_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RecordResponse>> {
    // Anything that is not an id can never be a cache key.
    let id: RecordId = id.parse().map_err(|_| AppError::NotFound)?;

    let record = state
        .registry()
        .get_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(record.into()))
}

pub async fn get_record_by_nickname_handler(
    Path(nickname): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RecordResponse>> {
    let record = state
        .registry()
        .get_by_nickname(&nickname)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(record.into()))
}

pub async fn search_records_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponse>>> {
    let term = query.t.unwrap_or_default();
    let records = state.registry().search(&term).await?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

pub async fn count_records_handler(State(state): State<AppState>) -> Result<Json<u64>> {
    Ok(Json(state.registry().count().await?))
}
