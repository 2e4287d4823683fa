use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::user::errors::UserError;

pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod get_current_user;
pub mod list_categories;
pub mod login;
pub mod register;
pub mod update_category;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }

    pub fn with_pagination(status: StatusCode, data: T, pagination: Pagination) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody::new(status, data).with_pagination(pagination)),
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // 401 responses keep the flat shape instead of the envelope.
            ApiError::Unauthorized(msg) => {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg }))).into_response();
            }
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByIdentifier(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                tracing::error!("User operation failed: {}", err);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CategoryError::NameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CategoryError::InvalidCategoryName(_) => ApiError::UnprocessableEntity(err.to_string()),
            CategoryError::DatabaseError(_) | CategoryError::Unknown(_) => {
                tracing::error!("Category operation failed: {}", err);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    result: bool,
    code: u16,
    message: String,
    data: T,
    pagination: Option<Pagination>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            result: true,
            code: status_code.as_u16(),
            message: "Success".to_string(),
            data,
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl ApiResponseBody<serde_json::Value> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            result: false,
            code: status_code.as_u16(),
            message,
            data: json!([]),
            pagination: None,
        }
    }
}

/// Category payload shared by the category endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponseData {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryResponseData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.as_i64(),
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            created_by: category.created_by.as_i64(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: i64,
    pub per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(current_page: i64, per_page: i64, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + per_page - 1) / per_page
        };

        Self {
            current_page,
            per_page,
            total_items,
            total_pages,
            has_next: current_page < total_pages,
            has_prev: current_page > 1 && total_pages > 0,
        }
    }
}
