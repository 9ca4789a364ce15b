use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{Algorithm, BoundingBox, LifeError, LiveSet, Rule, default_rule};

/// Simulation drives a seed forward one generation at a time.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub current: LiveSet,
    pub rule: Box<dyn Rule>,
    pub algorithm: Algorithm,
    pub generation: u64,
    pub last_step_time_ms: f32, // Stepping performance metric
}

impl Simulation {
    /// Start from `seed` under Conway's rule with the serial stepper
    pub fn new(seed: LiveSet) -> Self {
        Self {
            current: seed,
            rule: default_rule(),
            algorithm: Algorithm::default(),
            generation: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Set the rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    /// Set the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Advance by one generation
    pub fn step(mut self) -> Self {
        let start = Instant::now();
        self.current = self.algorithm.step(&self.current, self.rule.as_ref());
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        let bounds = BoundingBox::of(&self.current);
        debug!(
            generation = self.generation,
            population = self.current.len(),
            width = bounds.width(),
            height = bounds.height(),
            elapsed_ms = self.last_step_time_ms,
            "stepped"
        );
        self
    }

    /// Run `iterations` steps and return every generation, seed first.
    pub fn run(self, iterations: i64) -> Result<Vec<LiveSet>, LifeError> {
        let steps = u64::try_from(iterations).map_err(|_| LifeError::NegativeIterations(iterations))?;

        info!(
            rule = self.rule.name(),
            algorithm = self.algorithm.name(),
            population = self.current.len(),
            iterations,
            "starting simulation"
        );

        let mut history = Vec::new();
        history.push(self.current.clone());

        let sim = (0..steps).fold(self, |sim, _| {
            let sim = sim.step();
            history.push(sim.current.clone());
            sim
        });

        info!(generation = sim.generation, population = sim.current.len(), "simulation finished");
        Ok(history)
    }
}

/// Seed followed by `iterations` Conway generations
pub fn iterate(seed: &LiveSet, iterations: i64) -> Result<Vec<LiveSet>, LifeError> {
    Simulation::new(seed.clone()).run(iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HighLifeRule, presets};

    #[test]
    fn test_zero_iterations_is_seed_only() {
        let seed = presets::rpentomino().live_set();
        let history = iterate(&seed, 0).unwrap();
        assert_eq!(history, vec![seed]);
    }

    #[test]
    fn test_history_length_law() {
        let seed = presets::glider().live_set();
        for n in 0..8 {
            let history = iterate(&seed, n).unwrap();
            assert_eq!(history.len(), n as usize + 1);
            assert_eq!(history[0], seed);
        }
    }

    #[test]
    fn test_each_generation_steps_the_previous() {
        let history = iterate(&presets::rpentomino().live_set(), 6).unwrap();
        for pair in history.windows(2) {
            assert_eq!(crate::domain::calculate_next(&pair[0]), pair[1]);
        }
    }

    #[test]
    fn test_deterministic() {
        let seed = presets::acorn().live_set();
        assert_eq!(iterate(&seed, 12).unwrap(), iterate(&seed, 12).unwrap());
    }

    #[test]
    fn test_negative_iterations_fail() {
        let seed = presets::square().live_set();
        assert_eq!(iterate(&seed, -1), Err(LifeError::NegativeIterations(-1)));
    }

    #[test]
    fn test_step_counts_generations() {
        let sim = Simulation::new(presets::blinker().live_set()).step().step();
        assert_eq!(sim.generation, 2);
        assert_eq!(sim.current, presets::blinker().live_set());
    }

    #[test]
    fn test_algorithms_agree_over_a_run() {
        let seed = presets::rpentomino().live_set();
        let serial = Simulation::new(seed.clone()).run(15).unwrap();
        let parallel = Simulation::new(seed)
            .with_algorithm(Algorithm::Parallel)
            .run(15)
            .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_custom_rule_is_used() {
        // Seeds kills every live cell each step
        let sim = Simulation::new(presets::square().live_set())
            .with_rule(Box::new(crate::domain::SeedsRule))
            .step();
        assert!(sim.current.iter().all(|c| !presets::square().live_set().contains(c)));

        let highlife = Simulation::new(presets::square().live_set())
            .with_rule(Box::new(HighLifeRule))
            .step();
        assert_eq!(highlife.current, presets::square().live_set());
    }
}
