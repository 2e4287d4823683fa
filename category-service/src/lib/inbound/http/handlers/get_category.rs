use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CategoryResponseData;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::router::AppState;

pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    state
        .category_service
        .get_category(CategoryId(category_id))
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}
