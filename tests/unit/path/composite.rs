use super::*;
use crate::animation::{
    behavior::BehaviorExt, rotate::RotateBehavior, scale::ScaleBehavior,
};
use std::f64::consts::PI;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

fn l_shape() -> Path {
    let mut path = Path::new();
    path.begin_path(0.0, 0.0)
        .add_line_to(30.0, 0.0)
        .add_line_to(30.0, 10.0)
        .end_path();
    path
}

#[test]
fn segment_windows_partition_unit_interval() {
    let path = l_shape();
    assert_eq!(path.length(), 40.0);
    let (s0, d0) = path.segment_window(0).unwrap();
    let (s1, d1) = path.segment_window(1).unwrap();
    assert_eq!(s0, 0.0);
    assert!((d0 - 0.75).abs() < 1e-12);
    assert!((s1 - 0.75).abs() < 1e-12);
    assert!((s0 + d0 + d1 - 1.0).abs() < 1e-12);
    assert!((s1 + d1 - 1.0).abs() < 1e-12);
}

#[test]
fn position_maps_global_time_to_segments() {
    let path = l_shape();
    assert!(close(path.position(0.0), Point::new(0.0, 0.0)));
    assert!(close(path.position(0.375), Point::new(15.0, 0.0)));
    assert!(close(path.position(0.75), Point::new(30.0, 0.0)));
    assert!(close(path.position(0.875), Point::new(30.0, 5.0)));
    assert!(close(path.position(1.0), Point::new(30.0, 10.0)));
}

#[test]
fn position_wraps_outside_unit_interval() {
    let path = l_shape();
    assert!(close(path.position(1.375), path.position(0.375)));
    assert!(close(path.position(-0.625), path.position(0.375)));
}

#[test]
fn position_from_length_matches_time() {
    let path = l_shape();
    assert!(close(path.position_from_length(35.0), Point::new(30.0, 5.0)));
}

#[test]
fn consecutive_segments_share_joints() {
    let path = l_shape();
    assert_eq!(path.num_control_points(), 3);
    let end0 = path.segments()[0].control_point(1).unwrap();
    let start1 = path.segments()[1].control_point(0).unwrap();
    assert!(end0.ptr_eq(&start1));
}

#[test]
fn editing_a_joint_moves_both_neighbours_after_update() {
    let mut path = l_shape();
    path.control_point(1).unwrap().set_xy(30.0, -10.0);
    assert_eq!(path.length(), 40.0);
    path.update_path();
    let expected = Point::new(30.0, -10.0).distance(Point::new(30.0, 10.0))
        + Point::new(0.0, 0.0).distance(Point::new(30.0, -10.0));
    assert!((path.length() - expected).abs() < 1e-9);
}

#[test]
fn zero_length_path_evaluates_to_start() {
    let mut path = Path::new();
    path.begin_path(5.0, 5.0)
        .add_line_to(5.0, 5.0)
        .add_line_to(5.0, 5.0)
        .end_path();
    assert_eq!(path.length(), 0.0);
    assert_eq!(path.segment_window(1), Some((0.0, 0.0)));
    for t in [0.0, 0.3, 1.0] {
        assert_eq!(path.position(t), Point::new(5.0, 5.0));
    }
}

#[test]
fn empty_path_cannot_close() {
    let mut path = Path::new();
    assert!(matches!(path.close_path(), Err(KinemaError::Geometry(_))));
}

#[test]
fn close_path_aliases_end_to_start() {
    let mut path = Path::new();
    path.begin_path(0.0, 0.0)
        .add_line_to(10.0, 0.0)
        .add_line_to(10.0, 10.0);
    path.close_path().unwrap().end_path();
    assert!(path.is_closed());
    let first = path.segments()[0].control_point(0).unwrap();
    let last = path.segments()[1].control_point(1).unwrap();
    assert!(first.ptr_eq(&last));
    assert!(close(path.position(1.0), Point::new(0.0, 0.0)));
}

#[test]
fn rectangle_shortcut() {
    let path = Path::rectangle(0.0, 0.0, 10.0, 10.0, true);
    assert_eq!(path.length(), 40.0);
    assert!(close(path.position(0.25), Point::new(10.0, 0.0)));
    let bez = path.to_bez_path();
    let closes = bez
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::ClosePath))
        .count();
    assert_eq!(closes, 1);
}

#[test]
fn catmull_rom_open_and_closed() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(30.0, 10.0),
        Point::new(40.0, 0.0),
    ];
    let open = Path::catmull_rom(&pts, false).unwrap();
    assert_eq!(open.num_segments(), 2);
    assert!(close(open.position(0.0), pts[1]));
    assert!(close(open.position(1.0), pts[3]));

    let closed = Path::catmull_rom(&pts, true).unwrap();
    assert_eq!(closed.num_segments(), 5);
    assert!(closed.is_closed());
    assert!(close(closed.position(0.0), pts[0]));
    assert!(close(closed.position(1.0), pts[0]));
    assert_eq!(closed.num_control_points(), 5);

    assert!(Path::catmull_rom(&pts[..3], false).is_err());
    assert!(Path::catmull_rom(&pts[..2], true).is_err());
}

#[test]
fn flatten_produces_linear_segments() {
    let path = Path::quadric(0.0, 0.0, 50.0, 100.0, 100.0, 0.0);
    let flat = path.flatten(8, false);
    assert_eq!(flat.num_segments(), 8);
    assert!(close(flat.position(0.0), Point::new(0.0, 0.0)));
    assert!(close(flat.position(1.0), Point::new(100.0, 0.0)));
    assert!((flat.length() - path.length()).abs() / path.length() < 0.05);
}

#[test]
fn cubic_shortcut_endpoints() {
    let path = Path::cubic(0.0, 0.0, 0.0, 50.0, 50.0, 50.0, 50.0, 0.0);
    assert!(close(path.start_curve_position(), Point::new(0.0, 0.0)));
    assert!(close(path.end_curve_position(), Point::new(50.0, 0.0)));
}

#[test]
fn interaction_is_a_no_op_unless_enabled() {
    let mut path = Path::linear(0.0, 0.0, 100.0, 0.0);
    assert!(!path.press(100.0, 0.0));
    path.drag(200.0, 200.0);
    assert_eq!(path.end_curve_position(), Point::new(100.0, 0.0));
}

#[test]
fn drag_moves_grabbed_point_and_updates() {
    let mut path = Path::linear(0.0, 0.0, 100.0, 0.0);
    path.set_interactive(true);
    assert!(!path.press(50.0, 50.0));
    assert!(path.press(95.0, 3.0));
    path.drag(95.0, 43.0);
    path.release();
    assert_eq!(path.end_curve_position(), Point::new(100.0, 40.0));
    assert!((path.length() - Point::ORIGIN.distance(Point::new(100.0, 40.0))).abs() < 1e-9);

    path.drag(0.0, 0.0);
    assert_eq!(path.end_curve_position(), Point::new(100.0, 40.0));
}

#[test]
fn behaviors_reproject_the_base_shape() {
    let mut path = Path::linear(0.0, 0.0, 100.0, 0.0);
    path.add_behavior(RotateBehavior::new(0.0, PI).with_frame_time(0.0, 1000.0).boxed());

    path.apply_behaviors(500.0);
    assert!(close(path.start_curve_position(), Point::new(50.0, -50.0)));
    assert!(close(path.end_curve_position(), Point::new(50.0, 50.0)));

    // Same time again gives the same shape, not a compounded rotation.
    path.apply_behaviors(500.0);
    assert!(close(path.end_curve_position(), Point::new(50.0, 50.0)));
    assert!((path.length() - 100.0).abs() < 1e-9);
}

#[test]
fn scale_behavior_on_path_and_removal_by_id() {
    let mut path = Path::linear(0.0, 0.0, 100.0, 0.0);
    path.add_behavior(
        ScaleBehavior::new((1.0, 2.0), (1.0, 1.0))
            .with_frame_time(0.0, 100.0)
            .with_id("grow")
            .boxed(),
    );
    path.apply_behaviors(200.0);
    assert!(close(path.start_curve_position(), Point::new(-50.0, 0.0)));
    assert!(close(path.end_curve_position(), Point::new(150.0, 0.0)));

    assert_eq!(path.remove_behavior("grow"), 1);
    assert_eq!(path.remove_behavior("grow"), 0);
}

fn corners(path: &Path) -> Vec<Point> {
    (0..path.num_control_points())
        .map(|i| path.control_point(i).unwrap().get())
        .collect()
}

#[test]
fn rotating_a_rectangle_keeps_it_square() {
    let mut path = Path::rectangle(0.0, 0.0, 100.0, 100.0, true);
    path.add_behavior(RotateBehavior::new(0.0, PI / 2.0).with_frame_time(0.0, 1000.0).boxed());

    path.apply_behaviors(500.0);
    let h = 50.0 * 2f64.sqrt();
    let c = corners(&path);
    assert!(close(c[0], Point::new(50.0, 50.0 - h)), "{c:?}");
    assert!(close(c[1], Point::new(50.0 + h, 50.0)), "{c:?}");
    assert!(close(c[2], Point::new(50.0, 50.0 + h)), "{c:?}");
    assert!(close(c[3], Point::new(50.0 - h, 50.0)), "{c:?}");
    assert!((path.length() - 400.0).abs() < 1e-9);

    path.apply_behaviors(1000.0);
    let c = corners(&path);
    assert!(close(c[0], Point::new(100.0, 0.0)), "{c:?}");
    assert!(close(c[2], Point::new(0.0, 100.0)), "{c:?}");
    assert!((path.length() - 400.0).abs() < 1e-9);
}

#[test]
fn dragging_a_corner_of_a_rotated_rectangle_squares_in_its_own_frame() {
    let mut path = Path::rectangle(0.0, 0.0, 100.0, 100.0, true);
    path.add_behavior(RotateBehavior::new(0.0, PI / 2.0).with_frame_time(0.0, 1000.0).boxed());
    path.apply_behaviors(500.0);
    path.set_interactive(true);

    let m = *path.matrix();
    let grab = path.control_point(2).unwrap().get();
    assert!(path.press(grab.x, grab.y));
    let target = m.transform_point(Point::new(120.0, 130.0));
    path.drag(target.x, target.y);
    path.release();

    let expect = [(0.0, 0.0), (120.0, 0.0), (120.0, 130.0), (0.0, 130.0)]
        .map(|(x, y)| m.transform_point(Point::new(x, y)));
    let c = corners(&path);
    for (got, want) in c.iter().zip(expect) {
        assert!(close(*got, want), "{c:?}");
    }
    assert!((path.length() - 500.0).abs() < 1e-9);

    // The edit survives the next behavior pass.
    path.apply_behaviors(500.0);
    assert!(close(path.control_point(2).unwrap().get(), target));
    assert!((path.length() - 500.0).abs() < 1e-9);
}

#[test]
fn set_point_on_a_rectangle_keeps_the_corner_editable() {
    let mut path = Path::rectangle(0.0, 0.0, 100.0, 100.0, true);
    let replacement = SharedPoint::new(10.0, 10.0);
    path.set_point(replacement.clone(), 0).unwrap();
    path.update_path();
    assert_eq!(path.num_control_points(), 4);
    assert!(!path.control_point(0).unwrap().ptr_eq(&replacement));
    assert_eq!(path.start_curve_position(), Point::new(10.0, 10.0));

    path.set_interactive(true);
    assert!(path.press(10.0, 10.0));
    path.drag(20.0, 20.0);
    assert_eq!(path.start_curve_position(), Point::new(20.0, 20.0));
    assert_eq!(path.control_point(1).unwrap().get(), Point::new(100.0, 20.0));
    assert_eq!(path.length(), 320.0);
}

#[test]
fn set_point_on_a_joint_is_adopted_by_both_segments() {
    let mut path = l_shape();
    let joint = SharedPoint::new(30.0, 5.0);
    path.set_point(joint.clone(), 1).unwrap();
    assert_eq!(path.num_control_points(), 3);
    assert!(path.control_point(1).unwrap().ptr_eq(&joint));

    joint.set_xy(40.0, 0.0);
    path.update_path();
    let expected = 40.0 + Point::new(40.0, 0.0).distance(Point::new(30.0, 10.0));
    assert!((path.length() - expected).abs() < 1e-9);
}
