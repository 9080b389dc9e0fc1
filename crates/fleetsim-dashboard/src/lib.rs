//! fleetsim-dashboard — server-rendered web UI for fleetsim.
//!
//! Provides axum route handlers that render HTML pages: a form for the
//! three simulation parameters and a results page with summary statistics
//! and an app-size histogram.
//!
//! # Routes
//!
//! | Route | Handler |
//! |---|---|
//! | `/` | Simulation form |
//! | `/run` | Run a simulation and render the results |

pub mod pages;
pub mod views;

use axum::Router;
use axum::routing::get;

/// Build the dashboard router.
pub fn dashboard_router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/run", get(pages::run))
}
