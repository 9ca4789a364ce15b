// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Runs and configuration
pub mod application;

// Presentation layer - Text output
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, LiveSet, BoundingBox, Pattern, PatternRegistry, presets, Algorithm, LifeError};
pub use domain::{calculate_next, corners, will_be_alive};
pub use application::{Simulation, iterate};
pub use rendering::{Glyphs, print_cells};
