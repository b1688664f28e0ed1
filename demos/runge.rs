extern crate lagrange_spline;

use lagrange_spline::{equispaced_nodes, lagrange_interpolate, max_abs_error, SampleSet};
use tracing::{info, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

fn runge(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let x_min = -5.0;
    let x_max = 5.0;
    let queries = equispaced_nodes(x_min, x_max, 201).unwrap();
    let exact: Vec<f64> = queries.iter().map(|x| runge(*x)).collect();

    for count in [6, 11, 21, 41] {
        let nodes = equispaced_nodes(x_min, x_max, count).unwrap();
        let samples = SampleSet::from_fn(&nodes, runge).unwrap();
        let result = lagrange_interpolate(&samples, &queries);
        info!("{} equally spaced nodes, max error {:e}", count, max_abs_error(&result, &exact));
    }

    let nodes = equispaced_nodes(x_min, x_max, 11).unwrap();
    let samples = SampleSet::from_fn(&nodes, runge).unwrap();
    let result = lagrange_interpolate(&samples, &queries);

    println!("x;f;p");
    for i in 0..queries.len() {
        println!("{:.2};{:.4};{:.4}", queries[i], exact[i], result[i]);
    }
}
