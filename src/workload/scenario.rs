use crate::error::ConfigError;
use crate::sim::Millis;

/// Parameters for the extra heavy jobs clustered near the burst window's
/// midpoint. Every knob is explicit: in particular `period` controls how
/// tight the injected deadlines are, so a scenario chooses whether the
/// injected load is also EDF-favored (short period) or only contends for
/// static-priority dispatch.
#[derive(Debug, Clone)]
pub struct SporadicInjection {
    pub count: usize,
    /// Deadline slack: an injected job's deadline is arrival + period.
    pub period: Millis,
    pub wcet: Millis,
    pub priority: i32,
    /// Gap between consecutive injected arrivals.
    pub spacing: Millis,
    /// Seed for the per-job arrival jitter.
    pub seed: u64,
}

impl Default for SporadicInjection {
    fn default() -> Self {
        Self {
            count: 5,
            period: 2_000,
            wcet: 1_000,
            priority: 5,
            spacing: 5,
            seed: 0,
        }
    }
}

/// One overload configuration: how long to simulate, where the burst
/// window sits and how hard it scales WCET. Built through
/// [`Scenario::new`]; a malformed scenario never reaches the schedulers.
#[derive(Debug, Clone)]
pub struct Scenario {
    horizon: Millis,
    burst_start: Millis,
    burst_end: Millis,
    burst_factor: u32,
    sporadic: Option<SporadicInjection>,
}

impl Scenario {
    pub fn new(
        horizon: Millis,
        burst_start: Millis,
        burst_end: Millis,
        burst_factor: u32,
        inject_sporadic: bool,
    ) -> Result<Self, ConfigError> {
        if horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if burst_start > burst_end || burst_end > horizon {
            return Err(ConfigError::BurstWindowOutOfRange {
                start: burst_start,
                end: burst_end,
                horizon,
            });
        }
        if burst_factor == 0 {
            return Err(ConfigError::ZeroBurstFactor);
        }
        Ok(Self {
            horizon,
            burst_start,
            burst_end,
            burst_factor,
            sporadic: inject_sporadic.then(SporadicInjection::default),
        })
    }

    /// Replace the default injection parameters (and enable injection if
    /// the scenario was built without it).
    pub fn with_sporadic(mut self, injection: SporadicInjection) -> Self {
        self.sporadic = Some(injection);
        self
    }

    pub fn horizon(&self) -> Millis {
        self.horizon
    }

    pub fn sporadic(&self) -> Option<&SporadicInjection> {
        self.sporadic.as_ref()
    }

    pub fn in_burst(&self, arrival: Millis) -> bool {
        (self.burst_start..self.burst_end).contains(&arrival)
    }

    /// WCET multiplier for a job arriving at `arrival`.
    pub fn wcet_multiplier(&self, arrival: Millis) -> u32 {
        if self.in_burst(arrival) {
            self.burst_factor
        } else {
            1
        }
    }

    pub fn burst_midpoint(&self) -> Millis {
        self.burst_start + (self.burst_end - self.burst_start) / 2
    }
}
