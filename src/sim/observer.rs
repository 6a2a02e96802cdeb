use super::job::{Job, Millis};

/// Debug-build invariant sweep over the job table, run after every
/// scheduling step. All checks compile away in release builds.
#[derive(Debug)]
pub struct Observer {
    last_now: Millis,
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            last_now: 0,
            step: 0,
        }
    }

    pub fn observe(&mut self, now: Millis, jobs: &[Job]) {
        self.step += 1;
        debug_assert!(
            now >= self.last_now,
            "clock moved backwards at step {}",
            self.step
        );
        self.last_now = now;

        for job in jobs {
            debug_assert!(
                job.remaining <= job.wcet_effective,
                "job {} has more work left than its effective WCET",
                job.task
            );
            debug_assert_eq!(
                job.deadline,
                job.arrival + job.period,
                "job {} deadline drifted from arrival + period",
                job.task
            );
            if let Some(start) = job.start {
                debug_assert!(
                    start >= job.arrival,
                    "job {} started before it arrived",
                    job.task
                );
            }
            if let Some(finish) = job.finish {
                debug_assert_eq!(
                    job.remaining, 0,
                    "job {} finished with work left",
                    job.task
                );
                debug_assert!(
                    job.start.is_some_and(|start| finish >= start),
                    "job {} finished before it started",
                    job.task
                );
            }
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
