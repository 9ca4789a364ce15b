mod simulation;
pub mod config;

pub use simulation::{Simulation, iterate};
pub use config::{Command, RunConfig, USAGE, usage};
