use std::{cell::RefCell, f64::consts::TAU, rc::Rc};

use kinema::{
    Actor, AlphaBehavior, Anchor, AutoRotate, BehaviorExt, ContainerBehavior, Director,
    DirectorEvent, DirectorOpts, EaseKind, EaseSpec, Interpolator, Path, PathBehavior, Point,
    RotateBehavior, Runtime, RuntimeOpts, ScaleBehavior,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut director = Director::new(DirectorOpts {
        width: 640.0,
        height: 360.0,
    });

    // Scene 0: a spinner that pulses forever.
    let intro = director.create_scene();
    let spinner = {
        let scene = director
            .scene_mut(intro)
            .ok_or_else(|| anyhow::anyhow!("missing scene {intro}"))?;
        let pulse = ContainerBehavior::new()
            .with_behavior(
                ScaleBehavior::new((1.0, 1.4), (1.0, 1.4))
                    .with_frame_time(0.0, 400.0)
                    .with_interpolator(Interpolator::exponential_out(2.0, true))
                    .boxed(),
            )
            .with_frame_time(0.0, 400.0)
            .with_cycle(true);
        scene.add_actor(
            Actor::new()
                .with_name("spinner")
                .with_bounds(300.0, 160.0, 40.0, 40.0)
                .with_behavior(
                    RotateBehavior::new(0.0, TAU)
                        .with_frame_time(0.0, 1000.0)
                        .with_cycle(true)
                        .boxed(),
                )
                .with_behavior(pulse.boxed()),
        )?
    };

    // Scene 1: a fish swimming along a closed spline.
    let pond = director.create_scene();
    let fish = {
        let scene = director
            .scene_mut(pond)
            .ok_or_else(|| anyhow::anyhow!("missing scene {pond}"))?;
        let route = Path::catmull_rom(
            &[
                Point::new(80.0, 180.0),
                Point::new(320.0, 60.0),
                Point::new(560.0, 180.0),
                Point::new(320.0, 300.0),
            ],
            true,
        )?;
        scene.add_actor(
            Actor::new()
                .with_name("fish")
                .with_bounds(0.0, 0.0, 32.0, 16.0)
                .with_behavior(
                    PathBehavior::new(Rc::new(RefCell::new(route)))
                        .with_auto_rotate(true, AutoRotate::LeftToRight)
                        .with_frame_time(0.0, 3000.0)
                        .with_cycle(true)
                        .boxed(),
                )
                .with_behavior(AlphaBehavior::new(0.0, 1.0).with_frame_time(0.0, 500.0).boxed()),
        )?
    };

    let mut runtime = Runtime::new(RuntimeOpts::default())?;
    let id = runtime.register_director(director);

    let report = |runtime: &Runtime, events: Vec<(kinema::DirectorId, DirectorEvent)>| {
        for (_, event) in events {
            println!("t={:>6.1}ms {event:?}", runtime.time());
        }
    };

    let events = runtime.run_for(1200.0);
    report(&runtime, events);

    if let Some(d) = runtime.director_mut(id) {
        d.switch_to_scene(pond, 800.0, true)?;
    }
    let events = runtime.run_for(2000.0);
    report(&runtime, events);

    if let Some(d) = runtime.director_mut(id) {
        let spin_out = EaseSpec::new(EaseKind::Rotate, Anchor::Center, 600.0).with_fade(true);
        let zoom_in = EaseSpec::new(EaseKind::Scale, Anchor::TopLeft, 600.0);
        d.ease_in_out(intro, &zoom_in, pond, &spin_out)?;
    }
    let events = runtime.run_for(1000.0);
    report(&runtime, events);

    if let Some(d) = runtime.director(id) {
        for (index, actor) in [(intro, spinner), (pond, fish)] {
            if let Some(a) = d.scene(index).and_then(|s| s.graph().get(actor)) {
                let s = a.state();
                println!(
                    "{:<8} pos=({:.1}, {:.1}) angle={:.3} scale={:?} alpha={:.2}",
                    a.name().unwrap_or("?"),
                    s.x(),
                    s.y(),
                    s.rotation_angle(),
                    s.scale(),
                    s.alpha()
                );
            }
        }
    }
    Ok(())
}
