use super::*;
use kurbo::ParamCurve;

fn pts3() -> [Point; 3] {
    [
        Point::new(0.0, 0.0),
        Point::new(50.0, 100.0),
        Point::new(100.0, 0.0),
    ]
}

fn pts4() -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(10.0, 80.0),
        Point::new(90.0, -40.0),
        Point::new(100.0, 20.0),
    ]
}

#[test]
fn quadric_hits_endpoints() {
    let p = pts3();
    assert_eq!(solve_quadric(p, 0.0), p[0]);
    assert_eq!(solve_quadric(p, 1.0), p[2]);
}

#[test]
fn cubic_hits_endpoints() {
    let p = pts4();
    assert_eq!(solve_cubic(p, 0.0), p[0]);
    assert_eq!(solve_cubic(p, 1.0), p[3]);
}

#[test]
fn quadric_matches_kurbo() {
    let p = pts3();
    let q = kurbo::QuadBez::new(p[0], p[1], p[2]);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let ours = solve_quadric(p, t);
        let theirs = q.eval(t);
        assert!((ours.x - theirs.x).abs() < 1e-9);
        assert!((ours.y - theirs.y).abs() < 1e-9);
    }
}

#[test]
fn cubic_matches_kurbo() {
    let p = pts4();
    let c = kurbo::CubicBez::new(p[0], p[1], p[2], p[3]);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let ours = solve_cubic(p, t);
        let theirs = c.eval(t);
        assert!((ours.x - theirs.x).abs() < 1e-9);
        assert!((ours.y - theirs.y).abs() < 1e-9);
    }
}
