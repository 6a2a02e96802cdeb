use tracing::{debug, info, trace};

use super::job::{Job, Millis, TimelineEntry};
use super::observer::Observer;
use crate::kpi::KpiSummary;
use crate::scheduler::{EdfScheduler, FixedPriorityScheduler, Scheduler};
use crate::workload::{generate_jobs, Catalog, Scenario};

/// Single-processor discrete-time simulation of one scheduler run.
///
/// The driver owns the clock, the job table and the arrival cursor; the
/// plugged-in [`Scheduler`] only decides which ready job runs next and
/// for how much work. Jobs are admitted strictly in arrival order and
/// the clock only moves forward, so a run is deterministic for a given
/// arrival sequence.
pub struct Sim<S: Scheduler> {
    scheduler: S,
    jobs: Vec<Job>,
    now: Millis,
    // Next not-yet-admitted index into `jobs`
    cursor: usize,
    observer: Observer,
}

impl<S: Scheduler> Sim<S> {
    /// `jobs` must be sorted by arrival ascending (the generator's output
    /// contract); admission order doubles as the FIFO tie-break.
    pub fn new(jobs: Vec<Job>, scheduler: S) -> Self {
        debug_assert!(
            jobs.windows(2).all(|pair| pair[0].arrival <= pair[1].arrival),
            "arrival sequence must be sorted"
        );
        Self {
            scheduler,
            jobs,
            now: 0,
            cursor: 0,
            observer: Observer::new(),
        }
    }

    /// Run to quiescence: every job in the table executes to completion,
    /// past the scenario horizon if the backlog demands it. Returns one
    /// entry per job, in completion order.
    pub fn run(mut self) -> Vec<TimelineEntry> {
        let mut timeline = Vec::with_capacity(self.jobs.len());

        loop {
            self.admit_arrivals();

            let Some(id) = self.scheduler.dispatch() else {
                // Idle: skip straight to the next arrival, no tick cost.
                match self.jobs.get(self.cursor) {
                    Some(next) => {
                        trace!(from = self.now, to = next.arrival, "processor idle");
                        self.now = next.arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let granted = self.scheduler.grant(&self.jobs, id);
            let job = &mut self.jobs[id];
            if job.start.is_none() {
                job.start = Some(self.now.max(job.arrival));
            }

            let work = granted.min(job.remaining);
            job.remaining -= work;
            self.now += work;

            if job.remaining == 0 {
                job.finish = Some(self.now);
                let hit = self.now <= job.deadline;
                debug!(task = %job.task, arrival = job.arrival, finish = self.now, hit, "job completed");
                timeline.push(TimelineEntry {
                    task: job.task.clone(),
                    arrival: job.arrival,
                    start: job.start.expect("completed job must have started"),
                    finish: self.now,
                    deadline: job.deadline,
                    hit,
                });
            } else {
                // Preempted with work left: back into the ready set under
                // a fresh sequence number.
                self.scheduler.enqueue(&self.jobs, id);
            }

            self.observer.observe(self.now, &self.jobs);
        }

        debug_assert_eq!(
            timeline.len(),
            self.jobs.len(),
            "every generated job must be accounted for"
        );
        timeline
    }

    fn admit_arrivals(&mut self) {
        while self.cursor < self.jobs.len() && self.jobs[self.cursor].arrival <= self.now {
            trace!(
                task = %self.jobs[self.cursor].task,
                arrival = self.jobs[self.cursor].arrival,
                "job admitted"
            );
            self.scheduler.enqueue(&self.jobs, self.cursor);
            self.cursor += 1;
        }
    }
}

/// Outcome of one scheduler run: the timeline plus its derived KPIs.
#[derive(Debug, Clone)]
pub struct PolicyRun {
    pub policy: &'static str,
    pub timeline: Vec<TimelineEntry>,
    pub kpi: KpiSummary,
}

/// Both policies' results for one generated scenario.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub baseline: PolicyRun,
    pub edf: PolicyRun,
}

/// Run one scheduler over an arrival sequence and aggregate its KPIs.
pub fn run_policy<S: Scheduler>(jobs: Vec<Job>, scheduler: S) -> PolicyRun {
    let policy = scheduler.name();
    let timeline = Sim::new(jobs, scheduler).run();
    let kpi = KpiSummary::aggregate(&timeline);
    info!(
        policy,
        jobs = kpi.total_jobs,
        misses = kpi.total_misses,
        "run complete"
    );
    PolicyRun {
        policy,
        timeline,
        kpi,
    }
}

/// Crate entry point: generate the scenario's arrival sequence once, then
/// run the static-priority baseline and preemptive EDF (default quantum)
/// against independent clones of it.
pub fn run_scenario(catalog: &Catalog, scenario: &Scenario) -> Comparison {
    let jobs = generate_jobs(catalog, scenario);
    let baseline = run_policy(jobs.clone(), FixedPriorityScheduler::new());
    let edf = run_policy(jobs, EdfScheduler::default());
    Comparison { baseline, edf }
}
