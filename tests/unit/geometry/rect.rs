use super::*;

#[test]
fn default_is_empty() {
    let r = Rectangle::default();
    assert!(r.is_empty());
    assert!(!r.contains(0.0, 0.0));
}

#[test]
fn first_union_leaves_empty_state() {
    let mut r = Rectangle::empty();
    r.union(3.0, 4.0);
    assert!(!r.is_empty());
    assert_eq!((r.x, r.y, r.width, r.height), (3.0, 4.0, 0.0, 0.0));

    r.union(-1.0, 10.0);
    assert_eq!((r.x, r.y), (-1.0, 4.0));
    assert_eq!((r.x1, r.y1), (3.0, 10.0));
    assert_eq!((r.width, r.height), (4.0, 6.0));
}

#[test]
fn bounds_keep_far_edges_consistent() {
    let mut r = Rectangle::new(1.0, 2.0, 10.0, 20.0);
    assert_eq!((r.x1, r.y1), (11.0, 22.0));
    r.set_location(0.0, 0.0);
    assert_eq!((r.x1, r.y1), (10.0, 20.0));
}

#[test]
fn containment_is_half_open() {
    let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(0.0, 0.0));
    assert!(r.contains(9.99, 9.99));
    assert!(!r.contains(10.0, 5.0));
}

#[test]
fn intersection() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
    let c = Rectangle::new(20.0, 20.0, 1.0, 1.0);
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert_eq!(a.intersect(&b), Some(Rectangle::new(5.0, 5.0, 5.0, 5.0)));
    assert_eq!(a.intersect(&c), None);
}

#[test]
fn union_rectangle_skips_empty() {
    let mut a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
    a.union_rectangle(&Rectangle::empty());
    assert_eq!(a, Rectangle::new(0.0, 0.0, 1.0, 1.0));
    a.union_rectangle(&Rectangle::new(2.0, 2.0, 1.0, 1.0));
    assert_eq!((a.x1, a.y1), (3.0, 3.0));
}

#[test]
fn kurbo_round_trip() {
    let r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    let k = r.to_kurbo().unwrap();
    assert_eq!(k, kurbo::Rect::new(1.0, 2.0, 4.0, 6.0));
    assert_eq!(Rectangle::from(k), r);
    assert!(Rectangle::empty().to_kurbo().is_none());
}
