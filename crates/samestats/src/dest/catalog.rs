//! Named catalog of built-in destinations on the 0–100 canvas.

use crate::error::DestinationNotFound;

use super::types::Destination;

/// Center shared by the circle-based shapes.
const CENTER: (f64, f64) = (54.26, 47.83);

/// All catalog names, in listing order.
pub const DESTINATION_NAMES: [&str; 13] = [
    "circle",
    "bullseye",
    "center",
    "dots",
    "x",
    "h_lines",
    "v_lines",
    "wide_lines",
    "high_lines",
    "slant_up",
    "slant_down",
    "star",
    "down_parab",
];

/// Look up a catalog destination by name.
pub fn lookup(name: &str) -> Result<Destination, DestinationNotFound> {
    let built = match name {
        "circle" => Destination::circles(CENTER, vec![30.0]),
        "bullseye" => Destination::circles(CENTER, vec![18.0, 37.0]),
        // radius 0: plain distance to the center point
        "center" => Destination::circles(CENTER, vec![0.0]),
        "dots" => Destination::grid(vec![25.0, 50.0, 75.0], vec![20.0, 50.0, 80.0]),
        "x" => Destination::lines([((20.0, 0.0), (100.0, 100.0)), ((20.0, 100.0), (100.0, 0.0))]),
        "h_lines" => Destination::lines(
            [10.0, 30.0, 50.0, 70.0, 90.0]
                .into_iter()
                .map(|y| ((0.0, y), (100.0, y))),
        ),
        "v_lines" => Destination::lines(
            [10.0, 30.0, 50.0, 70.0, 90.0]
                .into_iter()
                .map(|x| ((x, 0.0), (x, 100.0))),
        ),
        "wide_lines" => {
            Destination::lines([((10.0, 0.0), (10.0, 100.0)), ((90.0, 0.0), (90.0, 100.0))])
        }
        "high_lines" => {
            Destination::lines([((0.0, 10.0), (100.0, 10.0)), ((0.0, 90.0), (100.0, 90.0))])
        }
        "slant_up" => Destination::lines([
            ((0.0, 0.0), (100.0, 100.0)),
            ((0.0, 30.0), (70.0, 100.0)),
            ((30.0, 0.0), (100.0, 70.0)),
            ((50.0, 0.0), (100.0, 50.0)),
            ((0.0, 50.0), (50.0, 100.0)),
        ]),
        "slant_down" => Destination::lines([
            ((0.0, 100.0), (100.0, 0.0)),
            ((0.0, 70.0), (70.0, 0.0)),
            ((30.0, 100.0), (100.0, 30.0)),
            ((0.0, 50.0), (50.0, 0.0)),
            ((50.0, 100.0), (100.0, 50.0)),
        ]),
        "star" => Destination::polyline(
            [
                (28.0, 60.0),
                (52.0, 60.0),
                (60.0, 90.0),
                (68.0, 60.0),
                (92.0, 60.0),
                (72.0, 40.0),
                (80.0, 10.0),
                (60.0, 30.0),
                (40.0, 10.0),
                (48.0, 40.0),
            ],
            true,
        ),
        "down_parab" => Destination::polyline(
            (0..100).step_by(3).map(|x| {
                let x = x as f64;
                let h = (x - 50.0) / 4.0;
                (x, 90.0 - h * h)
            }),
            false,
        ),
        _ => {
            return Err(DestinationNotFound {
                name: name.to_string(),
            })
        }
    };
    Ok(built.expect("catalog destination is well-formed"))
}
