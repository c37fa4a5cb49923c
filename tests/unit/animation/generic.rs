use super::*;
use crate::{animation::behavior::BehaviorExt, scene::actor::ActorState};

#[derive(Default)]
struct Volume {
    level: f64,
}

impl PropertyTarget for Volume {
    fn set_property(&mut self, name: &str, value: f64) -> bool {
        if name == "level" {
            self.level = value;
            true
        } else {
            false
        }
    }
}

#[test]
fn writes_to_shared_target() {
    let volume = Rc::new(RefCell::new(Volume::default()));
    let target: Rc<RefCell<dyn PropertyTarget>> = volume.clone();
    let mut b = GenericBehavior::shared(0.0, 10.0, target, "level").with_frame_time(0.0, 100.0);

    let mut state = ActorState::default();
    b.apply(30.0, &mut state);
    assert!((volume.borrow().level - 3.0).abs() < 1e-12);
}

#[test]
fn writes_to_applied_target_property() {
    let mut state = ActorState::default();
    let mut b = GenericBehavior::property(0.0, 100.0, "x").with_frame_time(0.0, 10.0);
    b.apply(5.0, &mut state);
    assert_eq!(state.x(), 50.0);

    let mut unknown = GenericBehavior::property(0.0, 1.0, "nope").with_frame_time(0.0, 10.0);
    unknown.apply(5.0, &mut state);
    assert_eq!(state.x(), 50.0);
}

#[test]
fn callback_receives_value_and_target() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut b = GenericBehavior::callback(10.0, 20.0, move |v, target| {
        sink.borrow_mut().push(v);
        target.set_alpha(v / 20.0);
    })
    .with_frame_time(0.0, 100.0);

    let mut state = ActorState::default();
    b.apply(50.0, &mut state);
    b.apply(150.0, &mut state);
    assert_eq!(*seen.borrow(), vec![15.0, 20.0]);
    assert_eq!(state.alpha(), 1.0);
}
