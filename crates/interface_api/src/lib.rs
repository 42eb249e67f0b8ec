//! HTTP API Layer
//!
//! REST endpoints for clients, policies and claims on top of the operations
//! components.
//!
//! # Architecture
//!
//! - **Handlers**: one module per record type, plus health checks
//! - **Middleware**: request logging
//! - **Error Handling**: `ApiError` maps core and validation failures to
//!   status codes and a JSON body
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::in_memory());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::HealthCheckable;
use domain_claims::{ClaimMapper, ClaimService, ClaimStore};
use domain_client::{ClientMapper, ClientService, ClientStore};
use domain_policy::{PolicyMapper, PolicyService, PolicyStore};
use infra_db::{InMemoryDatabase, PostgresClaimStore, PostgresClientStore, PostgresPolicyStore};

use crate::middleware::request_logging;
use crate::handlers::{claims, clients, health, policies};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientService>,
    pub policies: Arc<PolicyService>,
    pub claims: Arc<ClaimService>,
    /// Probed by the readiness check
    pub store_health: Arc<dyn HealthCheckable>,
}

impl AppState {
    /// Wires the operations components onto the given stores
    ///
    /// The policy translator resolves owners through `client_store` and the
    /// claim translator resolves policies through `policy_store`.
    pub fn new(
        client_store: Arc<dyn ClientStore>,
        policy_store: Arc<dyn PolicyStore>,
        claim_store: Arc<dyn ClaimStore>,
        store_health: Arc<dyn HealthCheckable>,
    ) -> Self {
        Self {
            clients: Arc::new(ClientService::new(client_store.clone(), ClientMapper)),
            policies: Arc::new(PolicyService::new(
                policy_store.clone(),
                PolicyMapper::new(client_store),
            )),
            claims: Arc::new(ClaimService::new(claim_store, ClaimMapper::new(policy_store))),
            store_health,
        }
    }

    /// State backed by a fresh [`InMemoryDatabase`]
    pub fn in_memory() -> Self {
        let db = Arc::new(InMemoryDatabase::new());
        Self::new(db.clone(), db.clone(), db.clone(), db)
    }

    /// State backed by the PostgreSQL stores on `pool`
    pub fn postgres(pool: PgPool) -> Self {
        let clients = Arc::new(PostgresClientStore::new(pool.clone()));
        Self::new(
            clients.clone(),
            Arc::new(PostgresPolicyStore::new(pool.clone())),
            Arc::new(PostgresClaimStore::new(pool)),
            clients,
        )
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let client_routes = Router::new()
        .route("/", get(clients::list_clients).post(clients::create_client))
        .route(
            "/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        );

    let policy_routes = Router::new()
        .route("/", get(policies::list_policies).post(policies::create_policy))
        .route(
            "/:id",
            get(policies::get_policy)
                .put(policies::update_policy)
                .delete(policies::delete_policy),
        );

    let claim_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route(
            "/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        );

    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claim_routes)
        .layer(axum_middleware::from_fn(request_logging));

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
