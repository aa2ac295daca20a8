//! Session DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::SessionContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDto {
    pub username: String,
    pub role: String,
    pub active_view: String,
}

impl From<SessionContext> for SessionDto {
    fn from(ctx: SessionContext) -> Self {
        Self {
            username: ctx.username,
            role: ctx.role.to_string(),
            active_view: ctx.active_view.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SelectViewRequest {
    /// "inventory", "analysis", "predict" or "admin"
    #[validate(length(min = 1, message = "view is required"))]
    pub view: String,
}
