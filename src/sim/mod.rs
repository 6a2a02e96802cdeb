pub mod driver;
pub mod job;
pub mod observer;

pub use driver::{run_policy, run_scenario, Comparison, PolicyRun, Sim};
pub use job::{Job, JobId, Millis, TimelineEntry};
pub use observer::Observer;
