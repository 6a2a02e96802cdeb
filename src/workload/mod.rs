pub mod catalog;
pub mod generator;
pub mod scenario;

pub use catalog::{Catalog, TaskSpec};
pub use generator::generate_jobs;
pub use scenario::{Scenario, SporadicInjection};
