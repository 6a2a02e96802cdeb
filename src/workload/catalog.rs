use std::sync::Arc;

use crate::error::ConfigError;
use crate::sim::Millis;

/// Static definition of one periodic task.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub name: Arc<str>,
    pub period: Millis,
    /// Nominal worst-case execution time, before any burst scaling.
    pub wcet: Millis,
    /// Lower value = higher priority under the static-priority policy.
    pub priority: i32,
}

impl TaskSpec {
    pub fn new(name: &str, period: Millis, wcet: Millis, priority: i32) -> Self {
        Self {
            name: Arc::from(name),
            period,
            wcet,
            priority,
        }
    }
}

/// Ordered, validated set of task definitions. Catalog order is the
/// canonical tie-break for jobs arriving at the same instant.
#[derive(Debug, Clone)]
pub struct Catalog {
    specs: Vec<TaskSpec>,
}

impl Catalog {
    pub fn new(specs: Vec<TaskSpec>) -> Result<Self, ConfigError> {
        for spec in &specs {
            if spec.period == 0 {
                return Err(ConfigError::NonPositivePeriod {
                    task: spec.name.to_string(),
                });
            }
            if spec.wcet == 0 {
                return Err(ConfigError::NonPositiveWcet {
                    task: spec.name.to_string(),
                });
            }
        }
        Ok(Self { specs })
    }

    pub fn specs(&self) -> &[TaskSpec] {
        &self.specs
    }

    /// Nominal processor utilisation `Σ wcet_i / period_i`. Values above
    /// 1.0 mean the set is overloaded before any burst is applied.
    pub fn utilization(&self) -> f64 {
        self.specs
            .iter()
            .map(|spec| spec.wcet as f64 / spec.period as f64)
            .sum()
    }
}
