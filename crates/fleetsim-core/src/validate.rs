//! Request validation.
//!
//! The bounds are policy, not derived from the algorithm: they keep run
//! cost and output size bounded for an interactive caller. They must be
//! enforced exactly as stated for compatibility.

use crate::error::ValidationError;
use crate::types::SteadyStateRequest;

const HOSTS_MIN: u32 = 1;
const HOSTS_MAX: u32 = 1000;
const APPS_MIN: u32 = 1;
const APPS_MAX: u32 = 65534;
const MEAN_MIN: u32 = 1;
const MEAN_MAX: u32 = 100;

fn check_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Check the three request scalars against their allowed ranges.
///
/// Fields are checked in the fixed order `hosts, apps,
/// mean_instances_per_app` and the first violation is reported.
pub fn validate(req: &SteadyStateRequest) -> Result<(), ValidationError> {
    check_range("hosts", req.hosts, HOSTS_MIN, HOSTS_MAX)?;
    check_range("apps", req.apps, APPS_MIN, APPS_MAX)?;
    check_range(
        "mean_instances_per_app",
        req.mean_instances_per_app,
        MEAN_MIN,
        MEAN_MAX,
    )?;
    Ok(())
}
