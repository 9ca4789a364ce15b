use super::{Cell, LiveSet};

/// Trait for life-like cellular automaton rules
/// Enables different rulesets beyond Conway's Game of Life
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Whether a cell is alive next generation given its state and live neighbor count
    fn evolve(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (_, 3) | (true, 2))
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "highlife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (_, 3) | (true, 2) | (false, 6))
    }
}

/// Seeds (B2/S)
/// Every live cell dies each generation
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        !alive && neighbors == 2
    }
}

/// Day & Night (B3678/S34678)
/// Symmetric rule - inverse of a pattern follows same rules
#[derive(Clone, Copy)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "daynight"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 3 | 4 | 6 | 7 | 8) => true,
            (false, 3 | 6 | 7 | 8) => true,
            _ => false,
        }
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

/// Look up a rule by its name
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    all_rules().into_iter().find(|rule| rule.name() == name)
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

/// Neighbors of `cell` that are live in `set`, in neighborhood order
pub fn live_neighbors(cell: Cell, set: &LiveSet) -> Vec<Cell> {
    cell.neighbors()
        .filter(|&n| set.contains(n))
        .collect()
}

fn count_live_neighbors(cell: Cell, set: &LiveSet) -> u8 {
    cell.neighbors()
        .filter(|&n| set.contains(n))
        .count() as u8
}

/// Whether `cell` is alive next generation under `rule`.
/// `set` must be the current, unmodified generation.
pub fn will_be_alive_under(rule: &dyn Rule, cell: Cell, set: &LiveSet) -> bool {
    rule.evolve(set.contains(cell), count_live_neighbors(cell, set))
}

/// Conway's rule: exactly 3 live neighbors, or 2 and already alive
pub fn will_be_alive(cell: Cell, set: &LiveSet) -> bool {
    will_be_alive_under(&ConwayRule, cell, set)
}
