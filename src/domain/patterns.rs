use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, LiveSet, LifeError};

/// A named seed configuration
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(i64, i64)>, // Absolute coordinates of live cells
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self { name, description, cells }
    }

    /// The seed generation for this pattern
    pub fn live_set(&self) -> LiveSet {
        LiveSet::from_coords(&self.cells)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn square() -> Pattern {
        Pattern::new(
            "square",
            "Still life",
            vec![
                (1, 1), (2, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    /// Block in the lower left with a glider heading down and right
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Glider beside a block (period 4)",
            vec![
                (-2, -2), (-1, -2),
                (-2, -1), (-1, -1),
                (1, 1), (2, 1), (3, 1),
                (3, 2),
                (2, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn rpentomino() -> Pattern {
        Pattern::new(
            "rpentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (3, 2),
                (2, 3), (3, 3),
                (3, 4), (4, 4),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "pulsar",
            "Oscillator (period 3)",
            vec![
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            rpentomino(),
            glider(),
            square(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            acorn(),
        ]
    }
}

/// Read-only lookup from pattern name to seed, built once at startup.
#[derive(Clone, Debug)]
pub struct PatternRegistry {
    patterns: BTreeMap<&'static str, Pattern>,
}

impl PatternRegistry {
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        Self {
            patterns: patterns.into_iter().map(|p| (p.name, p)).collect(),
        }
    }

    /// Registry holding every preset
    pub fn with_presets() -> Self {
        Self::new(presets::all_patterns())
    }

    pub fn get(&self, name: &str) -> Result<&Pattern, LifeError> {
        self.patterns
            .get(name)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::with_presets()
    }
}

/// Random soup over a `width` x `height` rectangle anchored at the origin.
/// The same seed always yields the same soup.
pub fn random_soup(width: u32, height: u32, density: f64, seed: u64) -> Result<LiveSet, LifeError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::invalid("density", density.to_string()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut set = LiveSet::new();
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            if rng.random_bool(density) {
                set.insert(Cell::new(x, y));
            }
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_seed_sizes() {
        assert_eq!(presets::square().live_set().len(), 4);
        assert_eq!(presets::rpentomino().live_set().len(), 5);
        assert_eq!(presets::glider().live_set().len(), 9);
    }

    #[test]
    fn test_names_are_unique() {
        let registry = PatternRegistry::with_presets();
        assert_eq!(registry.names().count(), presets::all_patterns().len());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = PatternRegistry::default();
        assert_eq!(registry.get("glider").map(|p| p.name), Ok("glider"));
        assert_eq!(
            registry.get("gun").map(|p| p.name),
            Err(LifeError::UnknownPattern("gun".to_string()))
        );
    }

    #[test]
    fn test_soup_is_reproducible() {
        let a = random_soup(20, 20, 0.3, 7).unwrap();
        let b = random_soup(20, 20, 0.3, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|c| (0..20).contains(&c.x) && (0..20).contains(&c.y)));
    }

    #[test]
    fn test_soup_density_extremes() {
        assert!(random_soup(5, 5, 0.0, 1).unwrap().is_empty());
        assert_eq!(random_soup(5, 4, 1.0, 1).unwrap().len(), 20);
    }

    #[test]
    fn test_soup_rejects_bad_density() {
        assert!(matches!(
            random_soup(5, 5, 1.5, 1),
            Err(LifeError::InvalidArgument { name: "density", .. })
        ));
    }
}
