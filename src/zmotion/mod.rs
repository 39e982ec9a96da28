use std::sync::Arc;

use anyhow::{Context, Result};
use zmotion_engine::{
    adapter::MotionSensorAdapter, config::AdapterConfig, dispatch, eframe,
    orientation::SharedOrientation, source::Source, Engine,
};

use crate::{
    gui::{scene, Gui},
    util::thread::ThreadHandle,
};

pub struct ZMotion {
    sources: Vec<Arc<dyn Source + Send + Sync>>,
    engine: Arc<Engine>,
    orientation: Arc<SharedOrientation>,
    config: AdapterConfig,

    event_thread: ThreadHandle<()>,
}

impl ZMotion {
    pub fn new(config: AdapterConfig) -> Result<Self> {
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
            .context("failed to spawn event thread")?
        };

        Ok(ZMotion {
            sources: Vec::new(),
            engine,
            orientation,
            config,

            event_thread,
        })
    }

    pub fn add_source(&mut self, source: Arc<dyn Source + Send + Sync>, init: bool) {
        if init {
            source.init(self.engine.clone());
        }

        self.sources.push(source);
    }

    pub fn run(self) -> Result<()> {
        let adapter = MotionSensorAdapter::new(self.engine.clone(), self.config, scene::render);
        adapter.activate();

        let app = Gui::new(
            self.engine,
            self.orientation,
            adapter,
            self.sources,
            self.event_thread,
        );
        let options = eframe::NativeOptions::default();

        eframe::run_native("zmotion", options, Box::new(|_| Box::new(app)));
    }
}
