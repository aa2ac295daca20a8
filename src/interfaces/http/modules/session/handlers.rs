//! Session handlers — the per-login view state
//!
//! Navigation is any-to-any among the four views, including `admin` for
//! non-admin users; the admin module rejects their data requests.

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{SelectViewRequest, SessionDto};
use crate::application::SharedSessionRegistry;
use crate::domain::View;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Session handler state
#[derive(Clone)]
pub struct SessionHandlerState {
    pub sessions: SharedSessionRegistry,
}

fn authenticated<T>(
    user: Option<axum::Extension<AuthenticatedUser>>,
) -> Result<AuthenticatedUser, (StatusCode, Json<ApiResponse<T>>)> {
    match user {
        Some(axum::Extension(user)) => Ok(user),
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Not authenticated")),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/session",
    tag = "Session",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current session context", body = ApiResponse<SessionDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_session(
    State(state): State<SessionHandlerState>,
    user: Option<axum::Extension<AuthenticatedUser>>,
) -> Result<Json<ApiResponse<SessionDto>>, (StatusCode, Json<ApiResponse<SessionDto>>)> {
    let user = authenticated(user)?;

    let ctx = state
        .sessions
        .context_or_login(&user.session_id, &user.username, user.role);
    Ok(Json(ApiResponse::success(SessionDto::from(ctx))))
}

#[utoipa::path(
    put,
    path = "/api/v1/session/view",
    tag = "Session",
    security(("bearer_auth" = [])),
    request_body = SelectViewRequest,
    responses(
        (status = 200, description = "View selected", body = ApiResponse<SessionDto>),
        (status = 400, description = "Unknown view"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn select_view(
    State(state): State<SessionHandlerState>,
    user: Option<axum::Extension<AuthenticatedUser>>,
    ValidatedJson(request): ValidatedJson<SelectViewRequest>,
) -> Result<Json<ApiResponse<SessionDto>>, (StatusCode, Json<ApiResponse<SessionDto>>)> {
    let user = authenticated(user)?;

    let Some(view) = View::parse(&request.view) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Unknown view: {}", request.view))),
        ));
    };

    let ctx = state
        .sessions
        .select_view(&user.session_id, &user.username, user.role, view);
    Ok(Json(ApiResponse::success(SessionDto::from(ctx))))
}
