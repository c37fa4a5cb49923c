use super::*;
use crate::scene::{
    actor::Actor,
    interaction::{Button, Interaction},
};

fn director(n: usize) -> Director {
    let mut d = Director::new(DirectorOpts::default());
    for _ in 0..n {
        d.create_scene();
    }
    d
}

fn root_x(d: &Director, index: usize) -> f64 {
    d.scene(index)
        .and_then(Scene::root_actor)
        .map_or(f64::NAN, |a| a.state().x())
}

#[test]
fn first_scene_is_current_others_hidden() {
    let d = director(3);
    assert_eq!(d.current_scene_index(), Some(0));
    assert_eq!(d.paint_order(), &[0]);
    assert!(d.scene(1).is_some_and(Scene::is_hidden));
    assert!(d.scene(0).is_some_and(Scene::is_input_enabled));
    assert_eq!(d.scene(0).and_then(Scene::root_actor).map(|a| a.state().width()), Some(800.0));
}

#[test]
fn set_scene_switches_immediately() {
    let mut d = director(2);
    d.set_scene(1).unwrap();
    assert_eq!(d.current_scene_index(), Some(1));
    assert_eq!(d.paint_order(), &[1]);
    assert!(d.scene(0).is_some_and(Scene::is_hidden));
    assert!(matches!(d.set_scene(5), Err(KinemaError::Scene(_))));
}

#[test]
fn switch_slides_new_scene_in_from_the_right() {
    let mut d = director(2);
    d.switch_to_scene(1, 1000.0, false).unwrap();
    assert_eq!(d.paint_order(), &[0, 1]);
    assert_eq!(d.scene(0).and_then(Scene::easing), Some(EaseDirection::Out));
    assert_eq!(d.scene(1).and_then(Scene::easing), Some(EaseDirection::In));
    assert_eq!(d.dispatch(PointerEvent::Move { x: 1.0, y: 1.0 }), None);

    assert!(d.advance(500.0).is_empty());
    assert_eq!(root_x(&d, 0), -400.0);
    assert_eq!(root_x(&d, 1), 400.0);

    let events = d.advance(500.0);
    assert_eq!(
        events,
        vec![DirectorEvent::SceneHidden(0), DirectorEvent::SceneActivated(1)]
    );
    assert_eq!(d.current_scene_index(), Some(1));
    assert_eq!(d.paint_order(), &[1]);
    assert!(d.scene(0).is_some_and(Scene::is_hidden));
    assert!(d.scene(1).is_some_and(Scene::is_input_enabled));
    assert_eq!(root_x(&d, 1), 0.0);
}

#[test]
fn ease_in_then_out_of_single_scene() {
    let mut d = director(2);
    let spec = EaseSpec::new(EaseKind::Scale, Anchor::Center, 200.0).with_fade(true);
    d.ease_in(1, &spec).unwrap();
    assert_eq!(d.paint_order(), &[1]);
    assert_eq!(d.advance(200.0), vec![DirectorEvent::SceneActivated(1)]);

    d.ease_out(1, &spec).unwrap();
    assert_eq!(d.advance(100.0), vec![]);
    assert_eq!(d.advance(100.0), vec![DirectorEvent::SceneHidden(1)]);
    assert_eq!(d.current_scene_index(), None);
    assert!(d.paint_order().is_empty());
}

#[test]
fn next_and_prev_wrap_around() {
    let mut d = director(3);
    d.switch_to_prev_scene(0.0, false).unwrap();
    assert_eq!(d.current_scene_index(), Some(2));
    d.switch_to_next_scene(0.0, false).unwrap();
    assert_eq!(d.current_scene_index(), Some(0));
    d.switch_to_next_scene(0.0, false).unwrap();
    assert_eq!(d.current_scene_index(), Some(1));

    assert!(director(0).switch_to_next_scene(0.0, false).is_err());
}

#[test]
fn switching_to_current_scene_is_immediate() {
    let mut d = director(2);
    d.switch_to_scene(0, 1000.0, true).unwrap();
    assert_eq!(d.scene(0).and_then(Scene::easing), None);
    assert!(d.scene(0).is_some_and(Scene::is_input_enabled));
}

#[test]
fn only_live_scenes_advance() {
    let mut d = director(2);
    d.advance(100.0);
    assert_eq!(d.time(), 100.0);
    assert_eq!(d.scene(0).map(Scene::time), Some(100.0));
    assert_eq!(d.scene(1).map(Scene::time), Some(0.0));
}

#[test]
fn input_goes_to_current_scene() {
    let mut d = director(1);
    let scene = d.current_scene_mut().unwrap();
    let button = scene
        .add_actor(
            Actor::new()
                .with_bounds(10.0, 10.0, 10.0, 10.0)
                .with_interaction(Interaction::button(Button::new())),
        )
        .unwrap();
    d.dispatch(PointerEvent::Press { x: 12.0, y: 12.0 });
    assert_eq!(d.dispatch(PointerEvent::Release { x: 12.0, y: 12.0 }), Some(button));
    let clicks = d
        .current_scene()
        .and_then(|s| s.graph().get(button))
        .and_then(|a| a.interaction())
        .and_then(Interaction::as_button)
        .map(Button::clicks);
    assert_eq!(clicks, Some(1));
}

#[test]
fn resize_reaches_every_scene() {
    let mut d = director(2);
    d.resize(1024.0, 768.0);
    assert_eq!(d.opts().width, 1024.0);
    for i in 0..2 {
        let size = d
            .scene(i)
            .and_then(Scene::root_actor)
            .map(|a| (a.state().width(), a.state().height()));
        assert_eq!(size, Some((1024.0, 768.0)));
    }
}
