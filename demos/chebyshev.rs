extern crate lagrange_spline;

use lagrange_spline::{chebyshev_nodes_on, equispaced_nodes, Lagrange, SampleSet};
use tracing::{info, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let runge = |x: f64| 1.0 / (1.0 + x * x);

    let nodes = chebyshev_nodes_on(-5.0, 5.0, 41).unwrap();
    let lagrange = Lagrange::new(SampleSet::from_fn(&nodes, runge).unwrap());
    info!("interpolating with {} Chebyshev nodes", lagrange.samples().len());

    let queries = equispaced_nodes(-5.0, 5.0, 101).unwrap();
    let result = lagrange.evaluate(&queries);

    println!("x;f;p");
    for (x, p) in queries.iter().zip(result) {
        println!("{:.2};{:.6};{:.6}", x, runge(*x), p);
    }
}
