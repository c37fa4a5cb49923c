use super::*;
use crate::{animation::behavior::BehaviorExt, scene::actor::ActorState};

fn line(x0: f64, x1: f64) -> Rc<RefCell<Path>> {
    Rc::new(RefCell::new(Path::linear(x0, 0.0, x1, 0.0)))
}

#[test]
fn follows_path_with_translation() {
    let mut state = ActorState::default();
    let mut b = PathBehavior::new(line(0.0, 100.0))
        .with_translation(5.0, 7.0)
        .with_frame_time(0.0, 10.0);
    b.apply(5.0, &mut state);
    assert_eq!((state.x(), state.y()), (55.0, 7.0));
}

#[test]
fn left_to_right_flips_when_moving_left() {
    let mut state = ActorState::default();
    let mut b = PathBehavior::new(line(100.0, 0.0))
        .with_auto_rotate(true, AutoRotate::LeftToRight)
        .with_frame_time(0.0, 100.0);
    b.apply(10.0, &mut state);
    b.apply(20.0, &mut state);
    assert_eq!(state.image_flip(), ImageFlip::Horizontal);
    // Heading is PI; adding PI for the mirrored artwork makes a full turn.
    assert!((state.rotation_angle() - 2.0 * PI).abs() < 1e-9);
}

#[test]
fn right_to_left_flips_when_moving_right() {
    let mut state = ActorState::default();
    let mut b = PathBehavior::new(line(0.0, 100.0))
        .with_auto_rotate(true, AutoRotate::RightToLeft)
        .with_frame_time(0.0, 100.0);
    b.apply(10.0, &mut state);
    b.apply(20.0, &mut state);
    assert_eq!(state.image_flip(), ImageFlip::Horizontal);
    assert_eq!(state.rotation_angle(), 0.0);
}

#[test]
fn free_rotation_follows_heading() {
    let path = Rc::new(RefCell::new(Path::linear(0.0, 0.0, 0.0, 100.0)));
    let mut state = ActorState::default();
    let mut b = PathBehavior::new(path)
        .with_auto_rotate(true, AutoRotate::FreeRotate)
        .with_frame_time(0.0, 100.0);
    b.apply(10.0, &mut state);
    b.apply(20.0, &mut state);
    assert!((state.rotation_angle() - PI / 2.0).abs() < 1e-9);
    assert_eq!(state.image_flip(), ImageFlip::None);
}

#[test]
fn without_path_does_nothing() {
    let mut state = ActorState::default();
    let mut b = PathBehavior::default().with_frame_time(0.0, 10.0);
    b.apply(5.0, &mut state);
    assert_eq!((state.x(), state.y()), (0.0, 0.0));
    assert!(b.position(0.5).is_none());
}
