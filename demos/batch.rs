extern crate natural_spline;

use natural_spline::{Knot, NaturalSpline};

fn main() {
    env_logger::init();

    let x_min = 0.0;
    let x_max = 6.0;

    let knots = vec![
        Knot::new(x_min, 1.0),
        Knot::new(1.0, -1.0),
        Knot::new(2.0, 0.0),
        Knot::new(4.0, 3.0),
        Knot::new(5.0, 1.0),
        Knot::new(x_max, 1.0),
    ];

    let spline = NaturalSpline::new(knots).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;
    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();

    let result = spline.batch_interpolate(&x_vector).unwrap();

    println!("x;y;y'");
    for (x, y) in x_vector.iter().zip(result) {
        println!("{:.2};{:.2};{:.2}", x, y, spline.derivative(*x));
    }
}
