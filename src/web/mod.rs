//! Web server: configuration, routing, handlers, and page rendering.

mod handlers;
mod pages;
mod routes;
mod state;

#[cfg(test)]
mod pages_test;

pub use routes::create_router;
pub use state::AppState;

use std::net::IpAddr;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

/// Web server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum WebError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(bugtrack::web::io))]
    Io(#[from] std::io::Error),
}

/// Web server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".parse().expect("valid literal address"),
            port: 3000,
        }
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bugtrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the web server with the given configuration and database.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), WebError> {
    init_tracing();

    let state = AppState::new(db);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("bug tracker listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
