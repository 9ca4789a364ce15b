//! Performance benchmark comparing the serial and parallel steppers

use std::time::Instant;
use text_life::domain::{Algorithm, ConwayRule, LiveSet, presets, random_soup};

fn benchmark(seed: &LiveSet, algorithm: Algorithm, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut set = seed.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        set = algorithm.step(&set, &rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<(), text_life::LifeError> {
    println!("=== Text Life Stepping Benchmark ===\n");

    let sizes = [20, 50, 100, 200];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Soup", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let seed = random_soup(size, size, 0.3, 42)?;
        let serial_ms = benchmark(&seed, Algorithm::Serial, iterations);
        let parallel_ms = benchmark(&seed, Algorithm::Parallel, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== R-pentomino, 200 generations ===\n");

    let seed = presets::rpentomino().live_set();
    for algorithm in Algorithm::all() {
        let ms = benchmark(&seed, algorithm, 200);
        println!("{:<10} {:.3} ms/gen", algorithm.name(), ms);
    }

    Ok(())
}
