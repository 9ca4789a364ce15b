mod cell;
mod live_set;
mod rules;
mod bounds;
mod algorithm;
mod error;
pub mod patterns;
pub mod stepper;

pub use cell::Cell;
pub use live_set::LiveSet;
pub use rules::{
    Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule,
    all_rules, default_rule, rule_by_name, live_neighbors, will_be_alive, will_be_alive_under,
};
pub use bounds::{BoundingBox, corners};
pub use algorithm::Algorithm;
pub use error::LifeError;
pub use patterns::{Pattern, PatternRegistry, presets, random_soup};
pub use stepper::calculate_next;
