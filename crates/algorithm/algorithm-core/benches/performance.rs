//! Performance benchmarks for the tabular models

use std::time::Instant;

use algorithm_core::prelude::*;

fn generate_rows(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let x: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let t = i as f64;
            (0..6)
                .map(|j| 2.0 + (t * 0.01 * (j + 1) as f64).sin() + t * 0.001)
                .collect()
        })
        .collect();
    let y = x
        .iter()
        .map(|row| row.iter().sum::<f64>() / row.len() as f64)
        .collect();
    (x, y)
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== ratecast Model Benchmarks ===\n");

    let (x_300, y_300) = generate_rows(300);
    let (x_5k, y_5k) = generate_rows(5_000);

    println!("--- Standard scaler ---");
    bench("scaler fit (5K x 6)", 100, || {
        let mut scaler = StandardScaler::new();
        scaler.fit(&x_5k).unwrap();
    });
    let mut scaler = StandardScaler::new();
    scaler.fit(&x_5k).unwrap();
    bench("scaler transform (5K x 6)", 100, || {
        let _ = scaler.transform(&x_5k).unwrap();
    });

    println!("\n--- Decision tree ---");
    bench("tree fit (300 x 6)", 100, || {
        let mut tree = DecisionTreeRegressor::new();
        tree.fit(&x_300, &y_300).unwrap();
    });
    bench("tree fit (5K x 6)", 5, || {
        let mut tree = DecisionTreeRegressor::new();
        tree.fit(&x_5k, &y_5k).unwrap();
    });
    let mut tree = DecisionTreeRegressor::new();
    tree.fit(&x_5k, &y_5k).unwrap();
    bench("tree predict (5K rows)", 100, || {
        let _ = tree.predict(&x_5k).unwrap();
    });

    println!("\n--- Metrics (5K points) ---");
    let predicted = tree.predict(&x_5k).unwrap();
    bench("evaluate", 1000, || {
        let _ = evaluate(&y_5k, &predicted).unwrap();
    });
}
