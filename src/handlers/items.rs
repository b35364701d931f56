use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_items(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_all().to_vec())
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .store
        .get_by_id(&id)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Item not found")))?;

    Ok(Json(item.clone()))
}
