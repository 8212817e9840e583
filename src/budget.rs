//! Capability detection and particle budgets.
//!
//! The field is decoration, so it yields to the host machine: a reduced-motion
//! preference drops the population to a sparse static arrangement, and a low
//! core count halves the default. An explicit count from the builder wins over
//! every heuristic.

use std::env;
use std::thread;

/// Population used when the user prefers reduced motion.
pub const REDUCED_MOTION_COUNT: usize = 30;
/// Population used on low-power machines.
pub const LOW_POWER_COUNT: usize = 60;
/// Default population.
pub const STANDARD_COUNT: usize = 120;

/// Parallelism below which a machine counts as low power.
const LOW_POWER_THRESHOLD: usize = 4;

/// Whether the user prefers reduced motion.
///
/// Under [`MotionPreference::Reduced`] the engine spawns a sparse field and
/// never runs physics; the arrangement renders once and stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// Detect the preference from the environment.
    ///
    /// `DRIFTFIELD_REDUCED_MOTION=1` requests reduced motion;
    /// `DRIFTFIELD_FULL_MOTION=1` overrides it back to full (a demo escape
    /// hatch). Defaults to full motion.
    pub fn detect() -> Self {
        if env_flag("DRIFTFIELD_FULL_MOTION") {
            return MotionPreference::Full;
        }
        if env_flag("DRIFTFIELD_REDUCED_MOTION") {
            return MotionPreference::Reduced;
        }
        MotionPreference::Full
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        matches!(self, MotionPreference::Reduced)
    }
}

/// Rough machine class based on available parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerClass {
    Low,
    #[default]
    Standard,
}

impl PowerClass {
    /// Classify the current machine.
    pub fn detect() -> Self {
        let parallelism = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::from_parallelism(parallelism)
    }

    /// Classify from a core count.
    pub fn from_parallelism(parallelism: usize) -> Self {
        if parallelism < LOW_POWER_THRESHOLD {
            PowerClass::Low
        } else {
            PowerClass::Standard
        }
    }
}

/// Resolved particle budget for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleBudget {
    motion: MotionPreference,
    power: PowerClass,
    explicit: Option<usize>,
}

impl ParticleBudget {
    pub fn new(motion: MotionPreference, power: PowerClass) -> Self {
        Self {
            motion,
            power,
            explicit: None,
        }
    }

    /// Detect both the motion preference and power class.
    pub fn detect() -> Self {
        Self::new(MotionPreference::detect(), PowerClass::detect())
    }

    /// Force an exact particle count, ignoring the heuristics.
    pub fn with_count(mut self, count: usize) -> Self {
        self.explicit = Some(count);
        self
    }

    /// The particle count this budget resolves to.
    pub fn resolve(&self) -> usize {
        if let Some(count) = self.explicit {
            return count;
        }
        if self.motion.is_reduced() {
            return REDUCED_MOTION_COUNT;
        }
        match self.power {
            PowerClass::Low => LOW_POWER_COUNT,
            PowerClass::Standard => STANDARD_COUNT,
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
