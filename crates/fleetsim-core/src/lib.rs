//! fleetsim-core — steady-state placement estimation.
//!
//! Answers: if I run `apps` applications, each needing on average
//! `mean_instances_per_app` instances, spread across `hosts` hosts, what
//! does the resulting instance distribution look like?
//!
//! The pipeline is validate → sample → place:
//!
//! ```text
//! SteadyStateRequest
//!   ├── validate()                 (range checks, fixed field order)
//!   └── SteadyStateEngine
//!         ├── AppSizeDistribution  (one size sample per app)
//!         └── round-robin placer   (instance k → host k mod hosts)
//! ```
//!
//! The engine is stateless between runs and holds no shared random state;
//! every engine owns its sampler and every sampler owns its RNG, so
//! concurrent runs never need coordination.

pub mod distributions;
pub mod engine;
pub mod error;
pub mod types;
pub mod validate;

pub use distributions::{AppSizeDistribution, Geometric, ShiftedPoisson};
pub use engine::SteadyStateEngine;
pub use error::{DistributionError, EngineError, EngineResult, ValidationError};
pub use types::{App, Instance, SteadyStateRequest, SteadyStateResponse};
pub use validate::validate;
