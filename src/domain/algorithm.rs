//! Algorithm enum for selecting the stepping implementation.

use super::{LiveSet, Rule, stepper};

/// Available stepping strategies. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Dense scan of the padded bounding box, one thread
    #[default]
    Serial,
    /// Same scan with columns spread over the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Padded bounding box scan, serial",
            Algorithm::Parallel => "Padded bounding box scan, parallel columns",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Self::all().into_iter().find(|a| a.name() == name)
    }

    /// Compute the generation after `set`
    pub fn step(&self, set: &LiveSet, rule: &dyn Rule) -> LiveSet {
        match self {
            Algorithm::Serial => stepper::calculate_next_with(set, rule),
            Algorithm::Parallel => stepper::calculate_next_parallel(set, rule),
        }
    }
}
