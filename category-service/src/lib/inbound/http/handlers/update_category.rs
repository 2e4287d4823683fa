use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CategoryResponseData;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let name = body
        .name
        .map(CategoryName::new)
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = UpdateCategoryCommand {
        name,
        description: body.description,
    };

    state
        .category_service
        .update_category(CategoryId(category_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}

/// HTTP request body for partially updating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}
