use std::process::ExitCode;

use text_life::{
    PatternRegistry, Simulation,
    application::{Command, RunConfig, usage, config::{RANDOM_PATTERN, SOUP_SIZE}},
    rendering,
};
use tracing::error;

fn run(config: &RunConfig, registry: &PatternRegistry) -> Result<String, text_life::LifeError> {
    let seed = config.seed(registry)?;
    let history = Simulation::new(seed)
        .with_rule(config.rule()?)
        .with_algorithm(config.algorithm)
        .run(config.iterations)?;
    Ok(rendering::render_history(&history, &config.glyphs))
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the grids
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("text_life=warn")),
        )
        .init();

    let registry = PatternRegistry::with_presets();

    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            error!("{e}");
            println!("{}", usage(&registry));
            return ExitCode::from(2);
        }
    };

    match command {
        Command::List => {
            for pattern in registry.iter() {
                println!("{:<12} {}", pattern.name, pattern.description);
            }
            println!("{:<12} Random {}x{} soup (--seed, --density)", RANDOM_PATTERN, SOUP_SIZE, SOUP_SIZE);
            ExitCode::SUCCESS
        }
        Command::Run(config) => match run(&config, &registry) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                println!("{}", usage(&registry));
                ExitCode::from(2)
            }
        },
    }
}
