pub mod error;
pub mod kpi;
pub mod scheduler;
pub mod sim;
pub mod workload;

pub use error::ConfigError;
pub use kpi::{KpiSummary, TaskKpi};
pub use scheduler::{EdfScheduler, FixedPriorityScheduler, Scheduler};
pub use sim::{run_policy, run_scenario, Comparison, Job, Millis, PolicyRun, Sim, TimelineEntry};
pub use workload::{generate_jobs, Catalog, Scenario, SporadicInjection, TaskSpec};
