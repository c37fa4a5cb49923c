use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn length_of_zero_vector_is_tiny_not_zero() {
    let p = Point::ORIGIN;
    assert_eq!(p.length(), DEGENERATE_LENGTH);
    assert_eq!(p.length_squared(), 0.0);
}

#[test]
fn normalize_zero_vector_stays_finite() {
    let mut p = Point::ORIGIN;
    p.normalize();
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn rotate_quarter_turn() {
    let mut p = Point::new(1.0, 0.0);
    p.rotate(FRAC_PI_2);
    assert!(close(p.x, 0.0));
    assert!(close(p.y, 1.0));
}

#[test]
fn set_angle_keeps_length() {
    let mut p = Point::new(3.0, 4.0);
    p.set_angle(PI);
    assert!(close(p.x, -5.0));
    assert!(close(p.y, 0.0));
    assert!(close(p.angle().abs(), PI));
}

#[test]
fn set_length_and_limit() {
    let mut p = Point::new(3.0, 4.0);
    p.set_length(10.0);
    assert!(close(p.length(), 10.0));
    p.limit(2.0);
    assert!(close(p.length(), 2.0));
}

#[test]
fn distance_between_points() {
    let a = Point::new(1.0, 1.0);
    let b = Point::new(4.0, 5.0);
    assert!(close(a.distance(b), 5.0));
    assert!(close(a.distance_squared(b), 25.0));
}

#[test]
fn kurbo_conversions() {
    let k: kurbo::Point = Point::new(2.0, -1.0).into();
    assert_eq!(k, kurbo::Point::new(2.0, -1.0));
    let back: Point = k.into();
    assert_eq!(back, Point::new(2.0, -1.0));
}

#[test]
fn shared_point_aliases_mutation() {
    let a = SharedPoint::new(1.0, 2.0);
    let b = a.clone();
    b.set_xy(5.0, 6.0);
    assert_eq!(a.get(), Point::new(5.0, 6.0));
    assert!(a.ptr_eq(&b));

    let c = a.detached();
    c.translate(1.0, 1.0);
    assert_eq!(a.get(), Point::new(5.0, 6.0));
    assert!(!a.ptr_eq(&c));
}
