use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CategoryResponseData;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    AuthenticatedUser { user }: AuthenticatedUser,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let name = CategoryName::new(body.name)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateCategoryCommand {
        name,
        description: body.description,
    };

    state
        .category_service
        .create_category(command, user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
}
