use std::sync::Arc;

use rand::prelude::*;
use tracing::debug;

use super::{Catalog, Scenario};
use crate::sim::{Job, Millis};

/// Expand the catalog into the scenario's full arrival sequence: one job
/// per task per integer multiple of its period in `[0, horizon)`, with
/// WCET scaled by the burst factor for arrivals inside the window, plus
/// any injected sporadic jobs.
///
/// The result is sorted by arrival; same-instant arrivals keep catalog
/// order (stable sort over per-task emission order). Generation is the
/// only place randomness enters a scenario — the seeded sporadic jitter —
/// so it runs once and both scheduler runs consume clones of one
/// sequence.
pub fn generate_jobs(catalog: &Catalog, scenario: &Scenario) -> Vec<Job> {
    let mut jobs = Vec::new();

    for spec in catalog.specs() {
        let mut arrival: Millis = 0;
        while arrival < scenario.horizon() {
            let wcet = spec.wcet * Millis::from(scenario.wcet_multiplier(arrival));
            jobs.push(Job::new(
                spec.name.clone(),
                arrival,
                wcet,
                spec.period,
                spec.priority,
            ));
            arrival += spec.period;
        }
    }

    if let Some(injection) = scenario.sporadic() {
        let midpoint = scenario.burst_midpoint();
        let mut rng = StdRng::seed_from_u64(injection.seed);
        for i in 0..injection.count {
            let jitter: Millis = rng.random_range(0..=2);
            let arrival = midpoint + i as Millis * injection.spacing + jitter;
            let name: Arc<str> = Arc::from(format!("Sporadic{i}").as_str());
            jobs.push(Job::new(
                name,
                arrival,
                injection.wcet,
                injection.period,
                injection.priority,
            ));
        }
    }

    jobs.sort_by_key(|job| job.arrival);
    debug!(jobs = jobs.len(), "generated arrival sequence");
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{SporadicInjection, TaskSpec};

    fn two_task_catalog() -> Catalog {
        Catalog::new(vec![
            TaskSpec::new("A", 100, 10, 1),
            TaskSpec::new("B", 100, 10, 2),
        ])
        .unwrap()
    }

    #[test]
    fn one_job_per_task_per_period_multiple() {
        let scenario = Scenario::new(1_000, 0, 0, 1, false).unwrap();
        let jobs = generate_jobs(&two_task_catalog(), &scenario);
        assert_eq!(jobs.len(), 20);
        assert!(jobs.iter().all(|job| job.arrival < 1_000));
        assert!(jobs.iter().all(|job| job.arrival % 100 == 0));
    }

    #[test]
    fn arrivals_sorted_with_catalog_order_on_ties() {
        let scenario = Scenario::new(500, 0, 0, 1, false).unwrap();
        let jobs = generate_jobs(&two_task_catalog(), &scenario);
        assert!(jobs.windows(2).all(|w| w[0].arrival <= w[1].arrival));
        for pair in jobs.chunks(2) {
            assert_eq!(pair[0].arrival, pair[1].arrival);
            assert_eq!(&*pair[0].task, "A");
            assert_eq!(&*pair[1].task, "B");
        }
    }

    #[test]
    fn burst_window_scales_wcet_at_generation_time() {
        let scenario = Scenario::new(1_000, 200, 400, 3, false).unwrap();
        let jobs = generate_jobs(&two_task_catalog(), &scenario);
        for job in &jobs {
            let expected = if (200..400).contains(&job.arrival) {
                30
            } else {
                10
            };
            assert_eq!(job.wcet_effective, expected);
            assert_eq!(job.remaining, job.wcet_effective);
        }
    }

    #[test]
    fn deadline_is_arrival_plus_period() {
        let scenario = Scenario::new(1_000, 0, 0, 1, false).unwrap();
        let jobs = generate_jobs(&two_task_catalog(), &scenario);
        assert!(jobs.iter().all(|job| job.deadline == job.arrival + job.period));
    }

    #[test]
    fn sporadic_jobs_cluster_after_burst_midpoint() {
        let scenario = Scenario::new(10_000, 2_000, 4_000, 2, true).unwrap();
        let jobs = generate_jobs(&two_task_catalog(), &scenario);
        let sporadic: Vec<_> = jobs
            .iter()
            .filter(|job| job.task.starts_with("Sporadic"))
            .collect();
        assert_eq!(sporadic.len(), 5);
        for (i, job) in sporadic.iter().enumerate() {
            assert_eq!(&*job.task, format!("Sporadic{i}").as_str());
            assert!(job.arrival >= 3_000);
            assert!(job.arrival < 3_030);
            assert_eq!(job.wcet_effective, 1_000);
            assert_eq!(job.deadline, job.arrival + 2_000);
        }
    }

    #[test]
    fn sporadic_jitter_is_reproducible_for_a_seed() {
        let scenario = Scenario::new(10_000, 2_000, 4_000, 2, true)
            .unwrap()
            .with_sporadic(SporadicInjection {
                seed: 42,
                ..SporadicInjection::default()
            });
        let first: Vec<Millis> = generate_jobs(&two_task_catalog(), &scenario)
            .iter()
            .map(|job| job.arrival)
            .collect();
        let second: Vec<Millis> = generate_jobs(&two_task_catalog(), &scenario)
            .iter()
            .map(|job| job.arrival)
            .collect();
        assert_eq!(first, second);
    }
}
