//! Compares serial and parallel ticking on random soups

use std::time::Instant;

use life_window::domain::{tick_parallel, tick_with, BoundedGrid, Bounds, ConwayRule};

fn random_grid(size: i64) -> BoundedGrid {
    let half = size / 2;
    let bounds = Bounds::new(-half, size - half - 1, -half, size - half - 1)
        .expect("benchmark sizes are positive");
    let mut grid = BoundedGrid::empty(bounds);
    grid.randomize(0.3);
    grid
}

fn benchmark_serial(size: i64, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = tick_with(&grid, &ConwayRule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: i64, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = tick_parallel(&grid, &ConwayRule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life tick benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);
        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
