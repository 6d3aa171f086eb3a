//! Router assembly for the roster HTTP API.

pub mod telemetry;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use roster_adapters::http::routes::{create_user, get_user, list_users};
use roster_core::{UnitOfWork, UserRepository};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The user service: the user routes wired over a shared store.
pub struct UserService {
    router: Router,
}

impl UserService {
    /// Build the service router.
    ///
    /// The store implements both persistence ports and shares its state
    /// internally behind `Arc`, so handing one clone to the router is cheap.
    pub fn new<S>(store: S) -> Self
    where
        S: UserRepository + UnitOfWork + Clone + 'static,
    {
        let router = Router::new()
            .route("/users", post(create_user::<S>).get(list_users::<S>))
            .route("/users/{id}", get(get_user::<S>))
            .with_state(store);

        Self { router }.with_trace_layer()
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a plain router, e.g. for nesting under another application.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until the listener closes.
    pub async fn run(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router).await
    }
}
