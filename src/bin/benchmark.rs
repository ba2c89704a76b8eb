//! Performance benchmark for generation advance and grid edits

use std::time::Instant;

use life_universe::{Dialect, Direction, Topology, Universe};
use tracing_subscriber::EnvFilter;

const SEED: u64 = 2015;

fn seeded_universe(size: usize, topology: Topology) -> Universe {
    let mut universe = Universe::new(size, size, topology, SEED);
    universe.randomize_current_seed();
    universe
}

/// Milliseconds per generation
fn benchmark_advance(size: usize, topology: Topology, iterations: u32) -> f64 {
    let mut universe = seeded_universe(size, topology);

    let start = Instant::now();
    for _ in 0..iterations {
        universe.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Milliseconds per full round of four translations
fn benchmark_translate(size: usize, iterations: u32) -> f64 {
    let mut universe = seeded_universe(size, Topology::Toroidal);

    let start = Instant::now();
    for _ in 0..iterations {
        for direction in Direction::all() {
            universe.translate(direction);
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Milliseconds per encode + plain decode
fn benchmark_codec(size: usize, iterations: u32) -> f64 {
    let mut universe = seeded_universe(size, Topology::Toroidal);

    let start = Instant::now();
    for _ in 0..iterations {
        let text = universe.encode_text();
        universe.decode_text(&text, Dialect::Plain);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Life Universe Benchmark ===\n");

    let sizes = [25, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>12}",
        "Size", "Finite", "Toroidal", "Translate", "Codec");
    println!("{:-<62}", "");

    for size in sizes {
        let finite_ms = benchmark_advance(size, Topology::Finite, iterations);
        let toroidal_ms = benchmark_advance(size, Topology::Toroidal, iterations);
        let translate_ms = benchmark_translate(size, iterations);
        let codec_ms = benchmark_codec(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>12.3}",
            format!("{}x{}", size, size),
            finite_ms,
            toroidal_ms,
            translate_ms,
            codec_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let toroidal_ms = benchmark_advance(2000, Topology::Toroidal, iterations);
    println!("Toroidal advance: {:.2} ms/gen, {:.1}M cells/sec",
        toroidal_ms, (cells as f64) / (toroidal_ms / 1000.0) / 1_000_000.0);
}
