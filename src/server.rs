//! Reusable warehouse service runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the full server lifecycle:
//! database init, migrations, default-admin seed, REST API, and graceful
//! shutdown. Both the root binary and the CLI launcher use this to
//! start/stop the service without duplicating bootstrap code.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{
    ForecastService, InventoryService, SessionRegistry, SharedSessionRegistry, UserService,
};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::ShutdownCoordinator;

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the warehouse service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Seed the default admin user if absent (default: true).
    pub create_default_admin: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            create_default_admin: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running warehouse service.
///
/// # Examples
///
/// ```rust,no_run
/// use wms_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.wait().await;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// Live login session registry.
    pub sessions: SharedSessionRegistry,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// API port the server is listening on.
    pub api_port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the warehouse service with the given options.
    ///
    /// This will:
    /// 1. Connect to the SQLite store and run migrations
    /// 2. Seed the default admin user (if enabled)
    /// 3. Build the services over the repository provider
    /// 4. Start the REST API server (with Swagger UI)
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting Warehouse Management Service...");

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
        };
        info!("Database: {}", db_config.url);
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        // ── Services ───────────────────────────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let sessions = SessionRegistry::shared();

        let jwt_config = JwtConfig {
            secret: app_cfg.security.jwt_secret.clone(),
            expiration_hours: app_cfg.security.jwt_expiration_hours,
            issuer: "wms-service".to_string(),
        };
        info!(
            "JWT configured with {}h token expiration",
            jwt_config.expiration_hours
        );

        let user_service = Arc::new(UserService::new(
            repos.clone(),
            sessions.clone(),
            jwt_config.clone(),
        ));
        let inventory_service = Arc::new(InventoryService::new(repos.clone()));
        let forecast_service = Arc::new(ForecastService::new(repos.clone()));

        if opts.create_default_admin {
            user_service
                .ensure_default_admin(&app_cfg.admin.username, &app_cfg.admin.password)
                .await?;
        }

        // ── Shutdown coordination ──────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();
        shutdown.start_signal_listener();

        // ── REST API ───────────────────────────────────────────
        let api_router = create_api_router(
            user_service,
            inventory_service,
            forecast_service,
            sessions.clone(),
            db.clone(),
            jwt_config,
        );

        let api_addr = format!("{}:{}", app_cfg.server.api_host, app_cfg.server.api_port);
        let listener = tokio::net::TcpListener::bind(&api_addr).await?;
        let api_port = listener.local_addr()?.port();
        info!("REST API server listening on http://{}", api_addr);
        info!("Swagger UI available at http://{}/docs/", api_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_task = tokio::spawn(async move {
            let server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
                api_shutdown.wait().await;
                info!("REST API server received shutdown signal");
            });

            if let Err(e) = server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            sessions,
            config: app_cfg,
            api_port,
            db,
            shutdown,
            api_task,
        })
    }

    /// Block until shutdown is triggered (OS signal or explicit trigger).
    pub async fn wait(&self) {
        self.shutdown.signal().wait().await;
    }

    /// Trigger shutdown, drain the API server and close the store.
    pub async fn shutdown(self) {
        self.shutdown.signal().trigger();

        if let Err(e) = self.api_task.await {
            error!("REST API server task panicked: {}", e);
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }

        info!("Warehouse Management Service shutdown complete");
    }
}

/// Initialize the tracing subscriber from the configured log level.
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();
}
