use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CategoryResponseData;
use super::Pagination;
use crate::domain::category::models::CategoryQuery;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListCategoriesQuery>,
) -> Result<ApiSuccess<Vec<CategoryResponseData>>, ApiError> {
    let query = CategoryQuery::new(params.name, params.page, params.per_page);

    let page = state
        .category_service
        .list_categories(query.clone())
        .await
        .map_err(ApiError::from)?;

    let categories: Vec<CategoryResponseData> =
        page.categories.iter().map(|c| c.into()).collect();
    // Pagination reports the clamped values actually used for the query.
    let pagination = Pagination::new(query.page, query.per_page, page.total_items);

    Ok(ApiSuccess::with_pagination(
        StatusCode::OK,
        categories,
        pagination,
    ))
}

/// HTTP query parameters for listing categories
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListCategoriesQuery {
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_per_page")]
    per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    20
}
