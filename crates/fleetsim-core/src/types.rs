//! Domain types for the steady-state simulation.
//!
//! These types are the de facto wire surface: the API layer serializes
//! `SteadyStateResponse` verbatim, so field names here are a compatibility
//! surface for integrators.

use serde::{Deserialize, Serialize};

// ── Request ────────────────────────────────────────────────────────

/// The three simulation parameters. Immutable once validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SteadyStateRequest {
    /// Number of hosts in the fleet.
    pub hosts: u32,
    /// Number of applications to place.
    pub apps: u32,
    /// Desired mean instance count per application.
    pub mean_instances_per_app: u32,
}

// ── Result ─────────────────────────────────────────────────────────

/// One application with its sampled instance count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    /// Dense index in `[0, apps)`.
    pub id: u32,
    /// Sampled instance count, always >= 1.
    pub size: u32,
}

/// One placed instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    /// Dense index in `[0, total_instances)`. 65534 apps with a deep
    /// geometric tail can overflow u32, so this one is wider.
    pub id: u64,
    /// The application this instance belongs to.
    pub app_id: u32,
    /// The host this instance landed on, in `[0, hosts)`.
    pub host_id: u32,
}

/// Outcome of one steady-state run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SteadyStateResponse {
    /// The request that produced this result.
    pub request: SteadyStateRequest,
    /// Analytic statistic: `apps * mean_instances_per_app / hosts`.
    /// Computed from the requested mean, not the sampled outcome.
    pub mean_instances_per_host: f64,
    /// Total placed instances: `sum(app.size)`.
    pub total_instances: u64,
    pub apps: Vec<App>,
    pub instances: Vec<Instance>,
}
