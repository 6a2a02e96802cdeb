use std::fmt;

use crate::sim::Millis;

/// Rejected configuration. Catalogs, scenarios and the EDF quantum are
/// validated at construction; the simulation core never runs against a
/// value that failed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositivePeriod { task: String },
    NonPositiveWcet { task: String },
    ZeroHorizon,
    BurstWindowOutOfRange {
        start: Millis,
        end: Millis,
        horizon: Millis,
    },
    ZeroBurstFactor,
    ZeroQuantum,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePeriod { task } => {
                write!(f, "task {task} has a non-positive period")
            }
            Self::NonPositiveWcet { task } => {
                write!(f, "task {task} has a non-positive WCET")
            }
            Self::ZeroHorizon => write!(f, "simulation horizon must be positive"),
            Self::BurstWindowOutOfRange {
                start,
                end,
                horizon,
            } => write!(
                f,
                "burst window [{start}, {end}) does not fit in [0, {horizon})"
            ),
            Self::ZeroBurstFactor => write!(f, "burst factor must be at least 1"),
            Self::ZeroQuantum => write!(f, "EDF time quantum must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}
