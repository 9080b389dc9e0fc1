//! The steady-state allocation engine.
//!
//! One run: sample a size for every app, then pack the resulting instance
//! stream onto hosts round-robin. A run either fully succeeds or fully
//! fails; no partial result ever escapes.

use tracing::info;

use crate::distributions::AppSizeDistribution;
use crate::error::EngineResult;
use crate::types::{App, Instance, SteadyStateRequest, SteadyStateResponse};

/// Allocation engine with its size distribution injected at construction.
///
/// The engine assumes its request has already passed [`crate::validate()`];
/// in particular `hosts >= 1` and `apps >= 1`.
pub struct SteadyStateEngine<D> {
    app_size_distribution: D,
}

impl<D: AppSizeDistribution> SteadyStateEngine<D> {
    pub fn new(app_size_distribution: D) -> Self {
        Self { app_size_distribution }
    }

    /// Run one steady-state estimation.
    ///
    /// Host assignment is round-robin over the linear instance stream:
    /// apps in ascending id order, each app's instances in order, and the
    /// k-th global instance lands on host `k mod hosts`. That keeps the
    /// fullest and emptiest host within one instance of each other no
    /// matter how the sampled sizes are skewed across apps.
    pub fn execute(&mut self, req: &SteadyStateRequest) -> EngineResult<SteadyStateResponse> {
        info!(
            hosts = req.hosts,
            apps = req.apps,
            mean_instances_per_app = req.mean_instances_per_app,
            "steady-state run started"
        );

        // Analytic statistic from the requested mean; reported verbatim
        // regardless of what the sampler actually draws.
        let mean_instances_per_host =
            f64::from(req.apps) * f64::from(req.mean_instances_per_app) / f64::from(req.hosts);

        let mut apps = Vec::with_capacity(req.apps as usize);
        for id in 0..req.apps {
            let size = self
                .app_size_distribution
                .sample(f64::from(req.mean_instances_per_app))?;
            apps.push(App { id, size });
        }

        let total_instances: u64 = apps.iter().map(|app| u64::from(app.size)).sum();

        let hosts = u64::from(req.hosts);
        let mut instances = Vec::with_capacity(total_instances as usize);
        let mut next_id: u64 = 0;
        for app in &apps {
            for _ in 0..app.size {
                instances.push(Instance {
                    id: next_id,
                    app_id: app.id,
                    host_id: (next_id % hosts) as u32,
                });
                next_id += 1;
            }
        }

        info!(total_instances, mean_instances_per_host, "steady-state run finished");
        Ok(SteadyStateResponse {
            request: *req,
            mean_instances_per_host,
            total_instances,
            apps,
            instances,
        })
    }
}
