use std::sync::Arc;

use zmotion_engine::{
    adapter::MotionSensorAdapter,
    config::AdapterConfig,
    dispatch,
    event::{Event, EventKind},
    orientation::SharedOrientation,
    source::{Source, SourceStatus},
    Engine,
};

use crate::{source::synthetic::Synthetic, util::thread::ThreadHandle};

use super::{scene, Gui};

fn gui() -> Gui {
    let orientation = Arc::new(SharedOrientation::default());
    let (engine, event_channel) = Engine::new(orientation.clone());
    let engine = Arc::new(engine);

    let event_thread = {
        let engine = engine.clone();
        ThreadHandle::spawn("events", move |stop| {
            dispatch::new_event_thread(dispatch::Thread {
                event_channel,
                engine,
                stop,
            })()
        })
        .unwrap()
    };

    let adapter = MotionSensorAdapter::new(engine.clone(), AdapterConfig::default(), scene::render);
    adapter.activate();

    let synthetic: Arc<dyn Source + Send + Sync> = Arc::new(Synthetic::new());
    synthetic.init(engine.clone());

    Gui::new(engine, orientation, adapter, vec![synthetic], event_thread)
}

#[test]
fn shutdown_stops_everything() {
    let mut gui = gui();
    assert!(gui.adapter.is_active());
    assert_eq!(gui.sources.sources[0].status(), SourceStatus::Running);

    gui.shutdown();

    assert!(!gui.adapter.is_active());
    assert_eq!(gui.engine.listener_count(EventKind::MotionUpdate), 0);
    assert_eq!(gui.engine.listener_count(EventKind::OrientationChange), 0);
    assert!(gui.event_thread.is_none());
    assert_eq!(gui.sources.sources[0].status(), SourceStatus::Stopped);

    // the event thread is gone, so nothing drains the channel any more
    assert_eq!(gui.engine.post(Event::OrientationChange), Err(zmotion_engine::EngineStopped));
}

#[test]
fn shutdown_twice_is_harmless() {
    let mut gui = gui();
    gui.shutdown();
    gui.shutdown();

    assert!(!gui.adapter.is_active());
}
