use super::*;

#[test]
fn position_interpolates_and_wraps() {
    let seg = LinearPath::from_points(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
    assert_eq!(seg.position(0.5), Point::new(5.0, 10.0));
    assert_eq!(seg.position(1.0), Point::new(10.0, 20.0));
    let wrapped = seg.position(1.25);
    assert!((wrapped.x - 2.5).abs() < 1e-9);
    assert!((wrapped.y - 5.0).abs() < 1e-9);
}

#[test]
fn caches_need_update_after_edit() {
    let mut seg = LinearPath::from_points(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(seg.length(), 5.0);

    let end = seg.control_point(1).unwrap();
    end.set_xy(6.0, 8.0);
    assert_eq!(seg.length(), 5.0);
    seg.update_path();
    assert_eq!(seg.length(), 10.0);
    assert_eq!(seg.bounding_box().x1, 6.0);
}

#[test]
fn set_point_aliases_handle() {
    let mut seg = LinearPath::from_points(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let shared = SharedPoint::new(5.0, 5.0);
    seg.set_point(shared.clone(), 0).unwrap();
    assert!(seg.control_point(0).unwrap().ptr_eq(&shared));
    assert!(seg.set_point(shared, 2).is_err());
}

#[test]
fn position_from_length_walks_distance() {
    let seg = LinearPath::from_points(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(seg.position_from_length(4.0), Point::new(4.0, 0.0));
}

#[test]
fn contour_and_bez_path() {
    let seg = LinearPath::from_points(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    let c = seg.contour(4);
    assert_eq!(c.len(), 5);
    assert_eq!(c[1], Point::new(1.0, 0.0));

    let mut bez = kurbo::BezPath::new();
    bez.move_to((0.0, 0.0));
    seg.append_to(&mut bez);
    assert_eq!(bez.elements().len(), 2);
}
