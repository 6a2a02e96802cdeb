use std::sync::Arc;

use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use crate::sim::{Millis, TimelineEntry};

/// Aggregate outcome of one task across a run.
#[derive(Debug, Clone)]
pub struct TaskKpi {
    pub task: Arc<str>,
    pub count: usize,
    pub misses: usize,
    /// finish - arrival per job, in completion order. Percentile-style
    /// statistics over these are the external summary layer's business.
    pub responses: Vec<Millis>,
    pub max_lateness: Millis,
}

impl TaskKpi {
    pub fn miss_rate(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.misses as f64 / self.count as f64
        }
    }

    pub fn mean_response(&self) -> f64 {
        self.responses
            .iter()
            .map(|&response| response as f64)
            .collect::<Mean>()
            .estimate()
    }
}

/// Pure reduction of a finished timeline into per-task and overall
/// figures; never re-derives any scheduling decision.
#[derive(Debug, Clone)]
pub struct KpiSummary {
    /// Sorted by task name.
    pub per_task: Vec<TaskKpi>,
    pub total_jobs: usize,
    pub total_misses: usize,
}

impl KpiSummary {
    pub fn aggregate(timeline: &[TimelineEntry]) -> Self {
        let mut index: FxHashMap<Arc<str>, usize> = FxHashMap::default();
        let mut per_task: Vec<TaskKpi> = Vec::new();

        for entry in timeline {
            let slot = *index.entry(entry.task.clone()).or_insert_with(|| {
                per_task.push(TaskKpi {
                    task: entry.task.clone(),
                    count: 0,
                    misses: 0,
                    responses: Vec::new(),
                    max_lateness: 0,
                });
                per_task.len() - 1
            });
            let kpi = &mut per_task[slot];
            kpi.count += 1;
            if !entry.hit {
                kpi.misses += 1;
            }
            kpi.responses.push(entry.response());
            kpi.max_lateness = kpi.max_lateness.max(entry.lateness());
        }

        per_task.sort_by(|a, b| a.task.cmp(&b.task));
        let total_misses = per_task.iter().map(|kpi| kpi.misses).sum();
        Self {
            per_task,
            total_jobs: timeline.len(),
            total_misses,
        }
    }

    /// Zero on an empty timeline rather than a division failure.
    pub fn overall_miss_rate(&self) -> f64 {
        if self.total_jobs == 0 {
            0.0
        } else {
            self.total_misses as f64 / self.total_jobs as f64
        }
    }

    pub fn task(&self, name: &str) -> Option<&TaskKpi> {
        self.per_task.iter().find(|kpi| &*kpi.task == name)
    }
}
