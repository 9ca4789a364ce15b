//! Command-line configuration.

use tracing::warn;

use crate::domain::{Algorithm, LifeError, LiveSet, PatternRegistry, Rule, random_soup, rule_by_name};
use crate::rendering::Glyphs;

pub const USAGE: &str = "Usage: text_life <pattern> <iterations> [--rule NAME] [--algorithm serial|parallel] \
[--alive GLYPH] [--dead GLYPH] [--seed N] [--density P] | text_life --list\n\
Example: text_life rpentomino 50";

/// Pattern name that draws a random soup instead of a preset
pub const RANDOM_PATTERN: &str = "random";

/// Side length of the random soup square
pub const SOUP_SIZE: u32 = 20;

/// What the binary was asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Print the registered patterns
    List,
    Run(RunConfig),
}

/// Options for a simulation run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub pattern: String,
    pub iterations: i64,
    pub rule: &'static str,
    pub algorithm: Algorithm,
    pub glyphs: Glyphs,
    pub soup_seed: u64,
    pub soup_density: f64,
}

impl Command {
    /// Parse arguments, program name already stripped
    pub fn from_args<I>(args: I) -> Result<Command, LifeError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut positional = Vec::new();
        let mut list = false;
        let mut rule = "conway";
        let mut algorithm = Algorithm::default();
        let mut glyphs = Glyphs::default();
        let mut soup_seed = None;
        let mut soup_density = 0.3;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" => list = true,
                "--rule" => {
                    let name = next_value(&mut args, "--rule")?;
                    rule = rule_by_name(&name)
                        .ok_or(LifeError::UnknownRule(name))?
                        .name();
                }
                "--algorithm" => {
                    let name = next_value(&mut args, "--algorithm")?;
                    algorithm = Algorithm::from_name(&name).ok_or(LifeError::UnknownAlgorithm(name))?;
                }
                "--alive" => glyphs.alive = parse_glyph(next_value(&mut args, "--alive")?, "--alive")?,
                "--dead" => glyphs.dead = parse_glyph(next_value(&mut args, "--dead")?, "--dead")?,
                "--seed" => {
                    let value = next_value(&mut args, "--seed")?;
                    soup_seed = Some(value.parse::<u64>().map_err(|_| LifeError::invalid("--seed", value))?);
                }
                "--density" => {
                    let value = next_value(&mut args, "--density")?;
                    soup_density = value
                        .parse::<f64>()
                        .ok()
                        .filter(|d| (0.0..=1.0).contains(d))
                        .ok_or_else(|| LifeError::invalid("--density", value))?;
                }
                flag if flag.starts_with("--") => return Err(LifeError::invalid("flag", flag)),
                _ => positional.push(arg),
            }
        }

        if list {
            return Ok(Command::List);
        }

        let mut positional = positional.into_iter();
        let pattern = positional.next().ok_or(LifeError::MissingArgument("pattern"))?;
        let raw = positional.next().ok_or(LifeError::MissingArgument("iterations"))?;
        let iterations = raw
            .parse::<i64>()
            .map_err(|_| LifeError::invalid("iterations", raw))?;
        if let Some(extra) = positional.next() {
            return Err(LifeError::invalid("argument", extra));
        }

        let soup_seed = soup_seed.unwrap_or_else(|| {
            if pattern == RANDOM_PATTERN {
                warn!("no --seed given, using 0");
            }
            0
        });

        Ok(Command::Run(RunConfig {
            pattern,
            iterations,
            rule,
            algorithm,
            glyphs,
            soup_seed,
            soup_density,
        }))
    }
}

/// Usage text followed by every pattern name the registry accepts
pub fn usage(registry: &PatternRegistry) -> String {
    let names: Vec<&str> = registry.names().chain([RANDOM_PATTERN]).collect();
    format!("{USAGE}\nPatterns: {}", names.join(", "))
}

impl RunConfig {
    /// Resolve the starting generation
    pub fn seed(&self, registry: &PatternRegistry) -> Result<LiveSet, LifeError> {
        if self.pattern == RANDOM_PATTERN {
            return random_soup(SOUP_SIZE, SOUP_SIZE, self.soup_density, self.soup_seed);
        }
        registry.get(&self.pattern).map(|p| p.live_set())
    }

    pub fn rule(&self) -> Result<Box<dyn Rule>, LifeError> {
        rule_by_name(self.rule).ok_or_else(|| LifeError::UnknownRule(self.rule.to_string()))
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, LifeError> {
    args.next().ok_or(LifeError::MissingArgument(flag))
}

fn parse_glyph(value: String, flag: &'static str) -> Result<char, LifeError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LifeError::invalid(flag, value)),
    }
}
