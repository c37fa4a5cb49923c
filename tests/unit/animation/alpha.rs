use super::*;
use crate::{animation::behavior::BehaviorExt, scene::actor::ActorState};

#[test]
fn fades_linearly_and_lands_on_end_value() {
    let mut state = ActorState::default();
    let mut fade = AlphaBehavior::new(1.0, 0.0).with_frame_time(0.0, 200.0);

    fade.apply(50.0, &mut state);
    assert!((state.alpha() - 0.75).abs() < 1e-12);

    fade.apply(400.0, &mut state);
    assert_eq!(state.alpha(), 0.0);
    assert!(fade.core().is_expired());
}

#[test]
fn disabled_value_application_leaves_target_alone() {
    let mut state = ActorState::default();
    let mut fade = AlphaBehavior::new(0.0, 0.5)
        .with_frame_time(0.0, 100.0)
        .with_value_application(false);
    fade.apply(50.0, &mut state);
    assert_eq!(state.alpha(), 1.0);
}
