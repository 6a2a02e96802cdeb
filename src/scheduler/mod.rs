pub mod edf;
pub mod fixed_priority;

pub use edf::EdfScheduler;
pub use fixed_priority::FixedPriorityScheduler;

use crate::sim::{Job, JobId, Millis};

/// Dispatch policy plugged into [`crate::sim::Sim`]. The driver owns the
/// clock and the job table; a policy owns only its ready set.
pub trait Scheduler {
    /// Short policy label used in reports and logs.
    fn name(&self) -> &'static str;

    /// Admit a job into the ready set. Called once when the job arrives
    /// and again whenever a preempted job still has work left; every call
    /// must assign a fresh tie-break sequence number.
    fn enqueue(&mut self, jobs: &[Job], id: JobId);

    /// Pop the next job to run, or `None` when the ready set is empty.
    fn dispatch(&mut self) -> Option<JobId>;

    /// How much of `id`'s remaining work this dispatch may execute.
    fn grant(&self, jobs: &[Job], id: JobId) -> Millis;
}
