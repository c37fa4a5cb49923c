use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_midpoint_and_inverse() {
    assert_eq!(Interpolator::linear(false, false).value(0.5), 0.5);
    assert!(close(Interpolator::linear(false, true).value(0.25), 0.75));
}

#[test]
fn boundary_laws_hold_for_non_ping_pong_presets() {
    for (name, interp) in Interpolator::catalog() {
        if interp.ping_pong || matches!(interp.kind, InterpolatorKind::Linear { inverse: true }) {
            continue;
        }
        assert!(close(interp.value(0.0), 0.0), "{name} at 0");
        assert!(close(interp.value(1.0), 1.0), "{name} at 1");
    }
}

#[test]
fn elastic_boundaries_are_exact() {
    for interp in [
        Interpolator::elastic_in(1.1, 0.4, false),
        Interpolator::elastic_out(1.1, 0.4, false),
        Interpolator::elastic_in_out(1.1, 0.4, false),
        Interpolator::elastic_out(0.5, 0.3, false),
    ] {
        assert_eq!(interp.value(0.0), 0.0);
        assert_eq!(interp.value(1.0), 1.0);
        assert!(interp.value(0.37).is_finite());
    }
}

#[test]
fn elastic_in_out_passes_through_half() {
    let interp = Interpolator::elastic_in_out(1.2, 0.45, false);
    assert!(close(interp.value(0.5), 0.5));
}

#[test]
fn ping_pong_folds_time() {
    let interp = Interpolator::linear(true, false);
    assert!(close(interp.value(0.25), 0.5));
    assert!(close(interp.value(0.5), 1.0));
    assert!(close(interp.value(0.75), 0.5));
    assert!(close(interp.value(1.0), 0.0));
}

#[test]
fn exponential_shapes() {
    assert!(close(Interpolator::exponential_in(2.0, false).value(0.5), 0.25));
    assert!(close(Interpolator::exponential_out(2.0, false).value(0.5), 0.75));
    let io = Interpolator::exponential_in_out(3.0, false);
    assert!(close(io.value(0.25), 0.0625));
    assert!(close(io.value(0.5), 0.5));
    assert!(close(io.value(0.75), 0.9375));
}

#[test]
fn bounce_out_stays_in_unit_range() {
    let interp = Interpolator::bounce_out(false);
    for p in interp.contour(200) {
        assert!((-1e-9..=1.0 + 1e-9).contains(&p.y), "{p}");
    }
    assert!(close(interp.value(1.0 / 2.75), 1.0));
}

#[test]
fn bounce_in_out_is_symmetric_at_half() {
    let interp = Interpolator::bounce_in_out(false);
    assert!(close(interp.value(0.5), 0.5));
}

#[test]
fn bezier_requires_three_or_four_points() {
    let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    assert!(matches!(
        Interpolator::bezier(&pts, false),
        Err(KinemaError::Config(_))
    ));

    let quad = Interpolator::bezier(
        &[Point::new(0.0, 0.0), Point::new(0.5, 1.0), Point::new(1.0, 1.0)],
        false,
    )
    .unwrap();
    assert!(close(quad.value(0.5), 0.75));
}

#[test]
fn position_clamps_input() {
    let interp = Interpolator::linear(false, false);
    assert_eq!(interp.position(1.5), Point::new(1.0, 1.0));
    assert_eq!(interp.position(-2.0), Point::new(0.0, 0.0));
}

#[test]
fn contour_has_n_plus_one_samples() {
    let c = Interpolator::bounce_in(false).contour(10);
    assert_eq!(c.len(), 11);
    assert_eq!(c[0].x, 0.0);
    assert_eq!(c[10].x, 1.0);
}

#[test]
fn catalog_names_are_unique_and_resolvable() {
    let cat = Interpolator::catalog();
    for (name, interp) in &cat {
        assert_eq!(cat.iter().filter(|(n, _)| n == name).count(), 1);
        assert_eq!(Interpolator::by_name(name), Some(*interp));
    }
    assert!(Interpolator::by_name("nope").is_none());
}

#[test]
fn serde_shape_is_tagged() {
    let v = serde_json::to_value(Interpolator::elastic_out(1.1, 0.4, true)).unwrap();
    assert_eq!(v["kind"], "elastic_out");
    assert_eq!(v["ping_pong"], true);
    let back: Interpolator = serde_json::from_value(v).unwrap();
    assert_eq!(back, Interpolator::elastic_out(1.1, 0.4, true));
}
