//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum answers per run before timeout
    pub max_turns_per_run: u64,

    /// Probability that the scripted player answers correctly
    pub accuracy: f64,

    /// Hero level at the start of each run
    pub starting_level: u32,

    /// Drink a healing item when HP falls below this fraction of max
    pub heal_threshold: f64,

    /// Rules the simulated games run under
    pub game: GameConfig,

    /// Random-roll samples for the loot table section of the report
    pub loot_samples: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_turns_per_run: 2_000,
            accuracy: 0.85,
            starting_level: 1,
            heal_threshold: 0.3,
            game: GameConfig::default(),
            loot_samples: 10_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_turns_per_run: 500,
            loot_samples: 1_000,
            ..Default::default()
        }
    }

    /// A player who gets one answer in three wrong
    pub fn struggling_student() -> Self {
        Self {
            accuracy: 0.66,
            ..Default::default()
        }
    }
}
