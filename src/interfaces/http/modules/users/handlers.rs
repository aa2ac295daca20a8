//! Admin panel handlers
//!
//! The admin view itself is reachable by anyone logged in; these data
//! operations are where the role gate lives. Non-admins get an
//! authorization error and never the data.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateUserRequest, UserDto};
use crate::application::UserService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Admin panel state
#[derive(Clone)]
pub struct UsersHandlerState {
    pub users: Arc<UserService>,
}

fn require_admin<T>(
    user: &Option<axum::Extension<AuthenticatedUser>>,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    let Some(axum::Extension(user)) = user else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Not authenticated")),
        ));
    };

    if !user.is_admin() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Admin access only")),
        ));
    }

    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All user accounts", body = ApiResponse<Vec<UserDto>>),
        (status = 403, description = "Admin access only")
    )
)]
pub async fn list_users(
    State(state): State<UsersHandlerState>,
    user: Option<axum::Extension<AuthenticatedUser>>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, (StatusCode, Json<ApiResponse<Vec<UserDto>>>)> {
    require_admin(&user)?;

    let users = state.users.list_users().await.map_err(domain_error)?;

    let users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
    Ok(Json(ApiResponse::success(users)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created (or already existed and the create was ignored)"),
        (status = 400, description = "Unknown role"),
        (status = 403, description = "Admin access only")
    )
)]
pub async fn create_user(
    State(state): State<UsersHandlerState>,
    user: Option<axum::Extension<AuthenticatedUser>>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&user)?;

    // Existing usernames are a silent no-op; the panel still reports
    // success, matching the legacy behavior.
    state
        .users
        .create_user(&request.username, &request.password, &request.role)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(()))))
}
