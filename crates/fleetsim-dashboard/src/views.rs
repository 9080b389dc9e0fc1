//! View types for dashboard template rendering.
//!
//! These types are purpose-built for Askama templates: they carry
//! pre-formatted strings and computed fields so templates stay simple.

use std::collections::BTreeMap;

use fleetsim_core::{App, Instance, SteadyStateResponse};

/// Everything the results page needs from one simulation run.
pub struct SimulationView {
    pub hosts: u32,
    pub apps: u32,
    pub mean_instances_per_app: u32,
    pub mean_instances_per_host: String,
    pub total_instances: u64,
    pub histogram: Vec<SizeBucket>,
    pub load: HostLoadView,
}

/// One bar of the app-size histogram.
pub struct SizeBucket {
    /// App size (instance count).
    pub size: u32,
    /// Number of apps that sampled this size.
    pub count: usize,
    /// Bar width as a percentage of the largest bucket.
    pub percent_int: String,
}

/// Min/max instance count over all hosts.
pub struct HostLoadView {
    pub min: u64,
    pub max: u64,
    pub spread: u64,
}

impl SimulationView {
    pub fn from_response(resp: &SteadyStateResponse) -> Self {
        Self {
            hosts: resp.request.hosts,
            apps: resp.request.apps,
            mean_instances_per_app: resp.request.mean_instances_per_app,
            mean_instances_per_host: format!("{:.2}", resp.mean_instances_per_host),
            total_instances: resp.total_instances,
            histogram: size_histogram(&resp.apps),
            load: host_loads(&resp.instances, resp.request.hosts),
        }
    }
}

/// Count apps per sampled size, ascending by size.
pub fn size_histogram(apps: &[App]) -> Vec<SizeBucket> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for app in apps {
        *counts.entry(app.size).or_default() += 1;
    }
    let largest = counts.values().copied().max().unwrap_or(1);
    counts
        .into_iter()
        .map(|(size, count)| SizeBucket {
            size,
            count,
            percent_int: format!("{:.0}", count as f64 / largest as f64 * 100.0),
        })
        .collect()
}

/// Min/max per-host instance counts.
pub fn host_loads(instances: &[Instance], hosts: u32) -> HostLoadView {
    let mut counts = vec![0u64; hosts as usize];
    for instance in instances {
        counts[instance.host_id as usize] += 1;
    }
    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    HostLoadView { min, max, spread: max - min }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_buckets_are_sorted_and_counted() {
        let apps = vec![
            App { id: 0, size: 2 },
            App { id: 1, size: 1 },
            App { id: 2, size: 2 },
            App { id: 3, size: 5 },
        ];
        let histogram = size_histogram(&apps);

        let buckets: Vec<(u32, usize)> = histogram.iter().map(|b| (b.size, b.count)).collect();
        assert_eq!(buckets, vec![(1, 1), (2, 2), (5, 1)]);
        // The largest bucket renders full-width.
        assert_eq!(histogram[1].percent_int, "100");
    }

    #[test]
    fn host_loads_report_min_max_spread() {
        let instances = vec![
            Instance { id: 0, app_id: 0, host_id: 0 },
            Instance { id: 1, app_id: 0, host_id: 1 },
            Instance { id: 2, app_id: 1, host_id: 0 },
        ];
        let load = host_loads(&instances, 3);
        assert_eq!((load.min, load.max, load.spread), (0, 2, 2));
    }
}
