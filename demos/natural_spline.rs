extern crate lagrange_spline;

use lagrange_spline::{NaturalSpline, SampleSet};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let x_min = 0.0;
    let x_max = 6.0;

    let samples = SampleSet::new(
        &[x_min, 1.0, 2.0, 4.0, 5.0, x_max],
        &[1.0, -1.0, 0.0, 3.0, 1.0, 1.0],
    )
    .unwrap();
    let spline = NaturalSpline::new(samples).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;
    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();

    let result = spline.evaluate(&x_vector).unwrap();
    let curvature = spline.derivative(2, &x_vector).unwrap();

    println!("x;y;y''");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2};{:.2}", x_vector[i], result[i], curvature[i]);
    }
}
