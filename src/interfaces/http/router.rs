//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ForecastService, InventoryService, SharedSessionRegistry, UserService};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    analytics, auth, forecast, health, inventory, session, users,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::logout,
        auth::get_current_user,
        // Session
        session::get_session,
        session::select_view,
        // Inventory
        inventory::list_items,
        inventory::save_item,
        // Analytics
        analytics::stock_summary,
        analytics::low_stock_items,
        // Forecast
        forecast::stock_forecast,
        // Admin
        users::list_users,
        users::create_user,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Session
            session::SessionDto,
            session::SelectViewRequest,
            // Inventory
            inventory::SaveItemRequest,
            inventory::InventoryItemDto,
            // Analytics
            analytics::StockSummaryDto,
            // Forecast
            forecast::StockProjectionDto,
            // Admin
            users::CreateUserRequest,
            users::UserDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Login (JWT), logout, current user"),
        (name = "Session", description = "Per-login view navigation"),
        (name = "Inventory", description = "Inventory item upsert and listing"),
        (name = "Analytics", description = "Stock summary and low-stock alerts"),
        (name = "Forecast", description = "Naive projected-stock series"),
        (name = "Admin", description = "User account management (admin role required)"),
    ),
    info(
        title = "Warehouse Management Service API",
        version = "1.0.0",
        description = "REST API for the single-node warehouse inventory tracker",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    users: Arc<UserService>,
    inventory: Arc<InventoryService>,
    forecast: Arc<ForecastService>,
    sessions: SharedSessionRegistry,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let middleware_state = AuthState { jwt_config };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth_state = auth::AuthHandlerState {
        users: users.clone(),
    };

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Session routes (protected)
    let session_routes = Router::new()
        .route("/", get(session::get_session))
        .route("/view", put(session::select_view))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(session::SessionHandlerState {
            sessions: sessions.clone(),
        });

    // Inventory routes (protected)
    let inventory_routes = Router::new()
        .route("/", get(inventory::list_items).post(inventory::save_item))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(inventory::InventoryHandlerState {
            inventory: inventory.clone(),
        });

    // Analytics routes (protected)
    let analytics_routes = Router::new()
        .route("/summary", get(analytics::stock_summary))
        .route("/low-stock", get(analytics::low_stock_items))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(analytics::AnalyticsHandlerState { inventory });

    // Forecast routes (protected)
    let forecast_routes = Router::new()
        .route("/", get(forecast::stock_forecast))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(forecast::ForecastHandlerState { forecast });

    // Admin routes (protected; the role gate lives in the handlers)
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(users::UsersHandlerState { users });

    let health_state = health::HealthState {
        db,
        sessions,
        started_at: Arc::new(Instant::now()),
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Session
        .nest("/api/v1/session", session_routes)
        // Inventory
        .nest("/api/v1/inventory", inventory_routes)
        // Analytics
        .nest("/api/v1/analytics", analytics_routes)
        // Forecast
        .nest("/api/v1/forecast", forecast_routes)
        // Admin
        .nest("/api/v1/users", user_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
