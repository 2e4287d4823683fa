use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::register::TokenResponseData;
use super::ApiError;
use crate::domain::user::errors::UserError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponseData>, ApiError> {
    // The identifier may be an e-mail address or a username. Unknown
    // identifier and wrong password map to the same response so the endpoint
    // cannot be used to probe which accounts exist.
    let user = state
        .user_service
        .get_user_by_identifier(&body.username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByIdentifier(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let claims =
        auth::Claims::for_user(user.id.as_i64()).with_extra("username", user.username.as_str());

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(Json(TokenResponseData {
        access_token: result.access_token,
        token_type: "bearer".to_string(),
        user: (&user).into(),
    }))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}
