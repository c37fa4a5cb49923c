use super::*;

#[test]
fn delegates_to_curve() {
    let seg = CurvePath::new(Curve::quadric(
        Point::new(0.0, 0.0),
        Point::new(50.0, 100.0),
        Point::new(100.0, 0.0),
    ));
    assert_eq!(seg.position(0.0), Point::new(0.0, 0.0));
    assert_eq!(seg.position(1.0), Point::new(100.0, 0.0));
    assert_eq!(seg.position(0.5), Point::new(50.0, 50.0));
    assert!(seg.length() > 100.0);
    assert_eq!(seg.start_index(), 0);
    assert_eq!(seg.end_index(), 2);
}

#[test]
fn catmull_rom_indices_skip_tangent_guides() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(30.0, 10.0),
    ]
    .map(SharedPoint::from);
    let seg = CurvePath::new(Curve::catmull_rom(pts));
    assert_eq!(seg.start_index(), 1);
    assert_eq!(seg.end_index(), 2);
    assert_eq!(seg.start_curve_position(), Point::new(10.0, 0.0));
    assert_eq!(seg.end_curve_position(), Point::new(20.0, 10.0));
}

#[test]
fn edit_then_update() {
    let mut seg = CurvePath::new(Curve::cubic(
        Point::new(0.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 0.0),
    ));
    let before = seg.length();
    seg.control_point(3).unwrap().set_xy(20.0, 0.0);
    assert_eq!(seg.length(), before);
    seg.update_path();
    assert!(seg.length() > before);
}
