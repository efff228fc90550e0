use super::*;
use crate::error::ConfigError;
use crate::geom::{distance, Point, Segment};
use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn circles_take_nearest_ring() {
    let d = Destination::circles((0.0, 0.0), vec![1.0, 5.0]).unwrap();
    assert!(close(d.distance(vector![0.0, 0.0]), 1.0));
    assert!(close(d.distance(vector![2.0, 0.0]), 1.0));
    assert!(close(d.distance(vector![0.0, 4.0]), 1.0));
    assert!(close(d.distance(vector![0.0, 5.0]), 0.0));
    assert!(close(d.distance(vector![0.0, -9.0]), 4.0));
}

#[test]
fn grid_takes_nearest_lattice_point() {
    let d = Destination::grid(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
    for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)] {
        assert_eq!(d.distance(vector![x, y]), 0.0);
    }
    assert!(close(d.distance(vector![5.0, 5.0]), 50f64.sqrt()));
    assert!(close(d.distance(vector![13.0, 14.0]), 5.0));
}

#[test]
fn line_set_takes_nearest_segment() {
    let d = Destination::lines([((0.0, 10.0), (100.0, 10.0)), ((0.0, 90.0), (100.0, 90.0))])
        .unwrap();
    assert!(close(d.distance(vector![50.0, 30.0]), 20.0));
    assert!(close(d.distance(vector![50.0, 60.0]), 30.0));
    // off the end of both segments
    assert!(close(d.distance(vector![103.0, 14.0]), 5.0));
}

#[test]
fn polygon_closure_segment_counts() {
    let pts: Vec<Point> = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 3.0],
        vector![0.0, 3.0],
    ];
    let closed = Polyline::new(pts.clone(), true).unwrap();
    let open = Polyline::new(pts.clone(), false).unwrap();
    assert_eq!(closed.segments().len(), pts.len());
    assert_eq!(open.segments().len(), pts.len() - 1);
    assert_eq!(closed.segments().last(), Some(&Segment::new(pts[3], pts[0])));
    // the closing edge is x = 0; only the closed polygon sees it
    let p = vector![-1.0, 1.5];
    assert!(close(closed.distance(p), 1.0));
    assert!(close(open.distance(p), distance(p, pts[0]).min(distance(p, pts[3]))));
}

#[test]
fn polyline_needs_three_points() {
    let err = Destination::polyline([(0.0, 0.0), (1.0, 1.0)], false).unwrap_err();
    assert_eq!(err, ConfigError::TooFewPolylinePoints { got: 2 });
    assert!(Destination::polyline([(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], true).is_ok());
}

#[test]
fn empty_shapes_are_rejected() {
    assert!(Destination::circles((0.0, 0.0), vec![]).is_err());
    assert!(Destination::grid(vec![], vec![1.0]).is_err());
    assert!(Destination::lines(Vec::<Segment>::new()).is_err());
    assert!(Destination::circles((0.0, 0.0), vec![-1.0]).is_err());
}

#[test]
fn zero_radius_circle_is_nan_free() {
    let center = vector![54.26, 47.83];
    let d = Destination::circles((center.x, center.y), vec![0.0]).unwrap();
    assert_eq!(d.distance(center), 0.0);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let p = Vector2::new(rng.gen_range(-50.0..150.0), rng.gen_range(-50.0..150.0));
        let v = d.distance(p);
        assert!(v.is_finite() && v >= 0.0);
        assert_eq!(v, distance(p, center));
    }
}

#[test]
fn custom_shapes_plug_in_through_the_trait() {
    struct HalfPlane;
    impl Shape for HalfPlane {
        fn distance(&self, p: Point) -> f64 {
            p.y.max(0.0)
        }
    }
    let boxed: Box<dyn Shape> = Box::new(HalfPlane);
    assert_eq!(boxed.distance(vector![3.0, 2.0]), 2.0);
    assert_eq!((&HalfPlane).distance(vector![3.0, -2.0]), 0.0);
}
