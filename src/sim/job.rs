use std::sync::Arc;

/// Simulated time in integer milliseconds.
pub type Millis = u64;

/// Index into a run's job table.
pub type JobId = usize;

/// One activation of a periodic (or injected sporadic) task.
///
/// Jobs are created once per scenario by the generator and owned
/// exclusively by a single scheduler run; `remaining`, `start` and
/// `finish` mutate in place as that run progresses. Two runs of the same
/// scenario operate on independent clones of the generated sequence.
#[derive(Debug, Clone)]
pub struct Job {
    pub task: Arc<str>,
    pub arrival: Millis,
    /// WCET after any burst scaling; `remaining` counts down from this.
    pub wcet_effective: Millis,
    pub remaining: Millis,
    pub period: Millis,
    /// Fixed at creation: `arrival + period`.
    pub deadline: Millis,
    /// Static priority, lower is more urgent. Ignored by EDF.
    pub priority: i32,
    /// First instant the job is given the processor. Set once.
    pub start: Option<Millis>,
    /// Instant `remaining` reached zero. Set once.
    pub finish: Option<Millis>,
}

impl Job {
    pub fn new(
        task: Arc<str>,
        arrival: Millis,
        wcet_effective: Millis,
        period: Millis,
        priority: i32,
    ) -> Self {
        Self {
            task,
            arrival,
            wcet_effective,
            remaining: wcet_effective,
            period,
            deadline: arrival + period,
            priority,
            start: None,
            finish: None,
        }
    }

    pub fn response(&self) -> Option<Millis> {
        self.finish.map(|finish| finish - self.arrival)
    }
}

/// Immutable record of one completed job, emitted by a scheduler run in
/// completion order and consumed by the KPI aggregator and any external
/// reporting layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub task: Arc<str>,
    pub arrival: Millis,
    pub start: Millis,
    pub finish: Millis,
    pub deadline: Millis,
    /// `finish <= deadline`.
    pub hit: bool,
}

impl TimelineEntry {
    pub fn response(&self) -> Millis {
        self.finish - self.arrival
    }

    /// Zero when the deadline was met.
    pub fn lateness(&self) -> Millis {
        self.finish.saturating_sub(self.deadline)
    }
}
