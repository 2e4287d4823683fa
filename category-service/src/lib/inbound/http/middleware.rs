use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type storing the authenticated caller, resolved against storage.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that authenticates every request not on the public allow-list
/// and adds the resolved caller to request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path();
    if state.public_paths.iter().any(|public| public == path) {
        return Ok(next.run(req).await);
    }

    let authenticated = authenticate_request(&state, req.headers()).await?;
    req.extensions_mut().insert(authenticated);

    Ok(next.run(req).await)
}

/// Validates the bearer token and resolves the caller's account.
///
/// Every failure mode of the token itself collapses into the same 401 so
/// responses never reveal which check rejected the credential. Storage
/// failures surface as a 500 instead; an unreachable database does not mean
/// the caller is unauthenticated.
pub async fn authenticate_request(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, ApiError> {
    let token = bearer_token(headers).ok_or_else(|| {
        ApiError::Unauthorized("Missing or invalid authorization header".to_string())
    })?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let user_id = UserId(claims.user_id);
    let user = state.user_service.get_user(&user_id).await.map_err(|e| match e {
        UserError::NotFound(_) => {
            tracing::warn!(user_id = %user_id, "Token references unknown user");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        }
        other => {
            tracing::error!("User lookup failed during authentication: {}", other);
            ApiError::InternalServerError("Internal server error".to_string())
        }
    })?;

    Ok(AuthenticatedUser { user })
}

/// Extracts the token from a `Bearer <token>` Authorization header.
///
/// The scheme comparison is case-sensitive. Missing header, non-ASCII value
/// and wrong scheme all produce `None`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The router-wide middleware has usually run already and stored the
        // caller; handlers mounted without it fall through to the same checks.
        if let Some(authenticated) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(authenticated.clone());
        }

        authenticate_request(state, &parts.headers).await
    }
}
