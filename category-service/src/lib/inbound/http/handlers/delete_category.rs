use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::router::AppState;

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .category_service
        .delete_category(CategoryId(category_id))
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
