//! Session/view state machine
//!
//! A context exists only while a user is logged in; logged-out is the
//! absence of a context. Navigation is any-to-any among the four views.
//! Reaching `Admin` is not role-gated; the admin data operations are,
//! so a non-admin lands on the view and gets an authorization error
//! instead of content.

use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// The four authenticated views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Inventory,
    Analysis,
    Predict,
    Admin,
}

impl View {
    pub const ALL: [View; 4] = [View::Inventory, View::Analysis, View::Predict, View::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Analysis => "analysis",
            Self::Predict => "predict",
            Self::Admin => "admin",
        }
    }

    /// Parse a view name. Only the four known views are accepted.
    pub fn parse(s: &str) -> Option<View> {
        match s.to_lowercase().as_str() {
            "inventory" => Some(Self::Inventory),
            "analysis" => Some(Self::Analysis),
            "predict" => Some(Self::Predict),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::Inventory
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient per-login state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub username: String,
    pub role: UserRole,
    pub active_view: View,
}

impl SessionContext {
    /// Fresh context right after login; lands on the inventory view.
    pub fn login(username: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            role,
            active_view: View::Inventory,
        }
    }

    /// Navigate to another view. Any-to-any; no role check here.
    pub fn select_view(&mut self, view: View) {
        self.active_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_lands_on_inventory() {
        let ctx = SessionContext::login("amira", UserRole::User);
        assert_eq!(ctx.active_view, View::Inventory);
    }

    #[test]
    fn navigation_is_any_to_any() {
        let mut ctx = SessionContext::login("amira", UserRole::Admin);
        for from in View::ALL {
            for to in View::ALL {
                ctx.select_view(from);
                ctx.select_view(to);
                assert_eq!(ctx.active_view, to);
            }
        }
    }

    #[test]
    fn non_admin_may_navigate_to_admin_view() {
        // The gate is on admin data operations, not on the transition.
        let mut ctx = SessionContext::login("amira", UserRole::User);
        ctx.select_view(View::Admin);
        assert_eq!(ctx.active_view, View::Admin);
        assert!(!ctx.role.authorize(UserRole::Admin));
    }
}
