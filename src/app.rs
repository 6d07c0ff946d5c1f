use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::{ApiConfig, AppConfig, HierarchyConfig, StoreBackend};
use crate::database::{DatabaseError, DatabaseManager, MemoryEmployeeStore, PgEmployeeStore};
use crate::handlers;
use crate::hierarchy::{EmployeeStore, HierarchyReader, HierarchyWriter};

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub writer: HierarchyWriter,
    pub reader: HierarchyReader,
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>, hierarchy: &HierarchyConfig) -> Self {
        Self {
            writer: HierarchyWriter::new(store.clone()),
            reader: HierarchyReader::new(store.clone(), hierarchy.max_depth)
                .with_collapsed_read_errors(hierarchy.collapse_read_errors),
            store,
        }
    }

    /// Connect the configured store backend and wire the writer and reader to it
    pub async fn from_config(config: &AppConfig) -> Result<Self, DatabaseError> {
        let store: Arc<dyn EmployeeStore> = match config.database.backend {
            StoreBackend::Memory => {
                info!("Using in-memory employee store");
                Arc::new(MemoryEmployeeStore::new())
            }
            StoreBackend::Postgres => {
                let pool = DatabaseManager::main_pool(&config.database).await?;
                if config.database.run_migrations {
                    DatabaseManager::apply_schema(&pool).await?;
                }
                let mut store = PgEmployeeStore::new(pool);
                if config.database.enable_slow_query_warning {
                    store = store.with_slow_query_warning(config.database.slow_query_threshold_ms);
                }
                Arc::new(store)
            }
        };
        Ok(Self::new(store, &config.hierarchy))
    }
}

pub fn router(state: AppState, api: &ApiConfig) -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(employee_routes())
        .with_state(state);

    if api.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    if api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn employee_routes() -> Router<AppState> {
    use handlers::employee;

    Router::new()
        .route("/employees/create", post(employee::create_post))
        .route("/employees/hierarchy", post(employee::hierarchy_post))
        .route("/employees/hierarchy/:position_id", get(employee::hierarchy_get))
}
