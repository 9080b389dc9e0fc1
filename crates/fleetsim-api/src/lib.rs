//! fleetsim-api — REST API for fleetsim.
//!
//! Provides axum route handlers for running steady-state simulations.
//! Mounts the dashboard at the root.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/api/v1/steady-state` | Run a simulation (query parameters) |
//! | GET | `/` | Dashboard form |
//! | GET | `/run` | Dashboard results page |

pub mod handlers;

use axum::Router;
use axum::routing::get;

/// Build the complete router (REST + dashboard).
pub fn build_router() -> Router {
    let api_routes = Router::new().route("/steady-state", get(handlers::steady_state));

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(fleetsim_dashboard::dashboard_router())
}
