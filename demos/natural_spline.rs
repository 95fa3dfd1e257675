extern crate natural_spline;

use natural_spline::{Knot, NaturalSpline};

fn main() {
    env_logger::init();

    let knots = vec![
        Knot::new(1.0, 3.8),
        Knot::new(1.2, 3.2),
        Knot::new(1.4, 2.9),
        Knot::new(1.6, 3.0),
        Knot::new(1.8, 4.2),
        Knot::new(2.0, 4.8),
    ];

    let spline = NaturalSpline::new(knots).unwrap();
    let points = spline.sample(0.01).unwrap();

    println!("x;y");
    for point in points {
        println!("{:.3};{:.3}", point.x, point.y);
    }
}
