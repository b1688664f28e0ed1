extern crate lagrange_spline;

use lagrange_spline::{NaturalSpline, OutOfDomain, SampleSet};

fn main() {
    let samples = SampleSet::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -2.0, 1.0, 1.0]).unwrap();

    let extrapolated = NaturalSpline::new(samples.clone())
        .unwrap()
        .with_policy(OutOfDomain::Extrapolate);
    let clamped = NaturalSpline::new(samples)
        .unwrap()
        .with_policy(OutOfDomain::Clamp);

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;extrapolated;clamped");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!(
            "{:.2};{:.2};{:.2}",
            x,
            extrapolated.evaluate_at(x).unwrap(),
            clamped.evaluate_at(x).unwrap()
        );
    }
}
