use super::*;
use crate::scene::director::DirectorOpts;

fn runtime(fps: f64) -> Runtime {
    Runtime::new(RuntimeOpts {
        fps,
        max_delta: 250.0,
    })
    .unwrap()
}

fn two_scene_director() -> Director {
    let mut d = Director::new(DirectorOpts::default());
    d.create_scene();
    d.create_scene();
    d
}

#[test]
fn rejects_bad_options() {
    assert!(Runtime::new(RuntimeOpts { fps: 0.0, ..RuntimeOpts::default() }).is_err());
    assert!(Runtime::new(RuntimeOpts { fps: f64::INFINITY, ..RuntimeOpts::default() }).is_err());
    assert!(matches!(
        RuntimeOpts { max_delta: f64::NAN, ..RuntimeOpts::default() }.validate(),
        Err(KinemaError::Config(_))
    ));
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: RuntimeOpts = serde_json::from_str(r#"{"fps":30}"#).unwrap();
    assert_eq!(opts.fps, 30.0);
    assert_eq!(opts.max_delta, 250.0);
}

#[test]
fn register_and_deregister() {
    let mut rt = runtime(60.0);
    let a = rt.register_director(two_scene_director());
    let b = rt.register_director(two_scene_director());
    assert_ne!(a, b);
    assert_eq!(rt.num_directors(), 2);

    let d = rt.deregister_director(a).unwrap();
    assert_eq!(d.num_scenes(), 2);
    assert!(rt.director(a).is_none());
    assert!(rt.director(b).is_some());
    assert!(matches!(rt.deregister_director(a), Err(KinemaError::Scene(_))));
}

#[test]
fn advance_clamps_delta() {
    let mut rt = runtime(60.0);
    let id = rt.register_director(two_scene_director());

    rt.advance(1000.0);
    assert_eq!(rt.director(id).map(Director::time), Some(250.0));
    rt.advance(-5.0);
    rt.advance(f64::NAN);
    assert_eq!(rt.time(), 250.0);
}

#[test]
fn run_for_steps_at_frame_rate() {
    let mut rt = runtime(50.0);
    let id = rt.register_director(two_scene_director());
    rt.run_for(110.0);
    assert_eq!(rt.time(), 110.0);
    let scene_time = rt
        .director(id)
        .and_then(Director::current_scene)
        .map(|s| s.time());
    assert_eq!(scene_time, Some(110.0));
}

#[test]
fn run_for_reports_transition_events() {
    let mut rt = runtime(50.0);
    let id = rt.register_director(two_scene_director());
    if let Some(d) = rt.director_mut(id) {
        d.switch_to_scene(1, 100.0, true).unwrap();
    }
    let events = rt.run_for(200.0);
    assert_eq!(
        events,
        vec![
            (id, DirectorEvent::SceneHidden(0)),
            (id, DirectorEvent::SceneActivated(1)),
        ]
    );
}

#[test]
fn resize_forwards_to_directors() {
    let mut rt = runtime(60.0);
    let id = rt.register_director(two_scene_director());
    rt.resize(640.0, 480.0);
    assert_eq!(rt.director(id).map(|d| d.opts().height), Some(480.0));
}
