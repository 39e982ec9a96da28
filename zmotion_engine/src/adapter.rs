use std::sync::Arc;

use parking_lot::Mutex;
use zmotion_device::{MotionEvent, Orientation, Position, RotationRate, SensorReading};

use crate::{
    config::AdapterConfig,
    event::{Event, EventKind},
    orientation::ScreenOrientation,
    Engine, Listener,
};


const T: &'static str = "adapter";

/// What the render function receives: the position and rotation rate once
/// motion data exists, `None` before that.
pub type RenderArgs = Option<(Position, Option<RotationRate>)>;

type RenderFn<R> = Box<dyn FnMut(RenderArgs) -> R + Send>;

/// Turns motion and orientation events from an [`Engine`] into calls to a
/// render function.
///
/// The render function runs on whichever thread triggered the state change,
/// normally the engine's dispatch thread. It must not call back into the
/// adapter.
pub struct MotionSensorAdapter<R> {
    engine: Arc<Engine>,
    config: AdapterConfig,
    state: Arc<Mutex<State<R>>>,

    on_motion: Listener,
    on_orientation: Listener,
}

impl<R> MotionSensorAdapter<R>
where
    R: Send + 'static,
{
    pub fn new<F>(engine: Arc<Engine>, config: AdapterConfig, render: F) -> Self
    where
        F: FnMut(RenderArgs) -> R + Send + 'static,
    {
        let state = Arc::new(Mutex::new(State {
            reading: SensorReading::UNSET,
            orientation: Orientation::Portrait,
            active: false,
            render: Box::new(render),
            output: None,
        }));

        let on_motion = {
            let state = state.clone();
            let config = config.clone();
            Listener::new(move |event| {
                if let Event::MotionUpdate(motion) = event {
                    state.lock().handle_motion(&config, motion);
                }
            })
        };

        let on_orientation = {
            let state = state.clone();
            let source = engine.orientation_source();
            Listener::new(move |_| state.lock().handle_orientation(&*source))
        };

        MotionSensorAdapter {
            engine,
            config,
            state,

            on_motion,
            on_orientation,
        }
    }

    /// Reads the current orientation, then starts listening for events.
    /// Does nothing if already active.
    pub fn activate(&self) {
        {
            let mut state = self.state.lock();
            if state.active {
                return;
            }

            state.active = true;
            state.handle_orientation(&*self.engine.orientation_source());
        }

        self.engine.add_listener(EventKind::MotionUpdate, &self.on_motion);
        self.engine.add_listener(EventKind::OrientationChange, &self.on_orientation);

        log::info!(
            target: T,
            "activated (multiplier {}, gravity {})",
            self.config.multiplier,
            self.config.use_gravity
        );
    }

    /// Stops listening for events. Does nothing if not active.
    pub fn deactivate(&self) {
        {
            let mut state = self.state.lock();
            if !state.active {
                return;
            }

            state.active = false;
        }

        self.engine.remove_listener(EventKind::MotionUpdate, &self.on_motion);
        self.engine.remove_listener(EventKind::OrientationChange, &self.on_orientation);

        log::info!(target: T, "deactivated");
    }

    pub fn handle_orientation(&self) {
        self.state.lock().handle_orientation(&*self.engine.orientation_source());
    }

    pub fn handle_motion(&self, event: &MotionEvent) {
        self.state.lock().handle_motion(&self.config, event);
    }

    /// Calls the render function with the current reading.
    pub fn render(&self) -> R {
        self.state.lock().render()
    }

    pub fn reading(&self) -> SensorReading {
        self.state.lock().reading
    }

    pub fn orientation(&self) -> Orientation {
        self.state.lock().orientation
    }

    pub fn is_active(&self) -> bool {
        self.state.lock().active
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl<R> MotionSensorAdapter<R>
where
    R: Clone,
{
    /// What the render function returned on the last state change.
    pub fn output(&self) -> Option<R> {
        self.state.lock().output.clone()
    }
}

impl<R> Drop for MotionSensorAdapter<R> {
    fn drop(&mut self) {
        let was_active = std::mem::replace(&mut self.state.lock().active, false);
        if was_active {
            self.engine.remove_listener(EventKind::MotionUpdate, &self.on_motion);
            self.engine.remove_listener(EventKind::OrientationChange, &self.on_orientation);
        }
    }
}

struct State<R> {
    reading: SensorReading,
    orientation: Orientation,
    active: bool,

    render: RenderFn<R>,
    output: Option<R>,
}

impl<R> State<R> {
    fn handle_orientation(&mut self, source: &dyn ScreenOrientation) {
        if !self.active {
            log::trace!(target: T, "ignoring orientation change while inactive");
            return;
        }

        let angle = source.angle();
        self.orientation = Orientation::from_angle(angle);
        log::debug!(target: T, "orientation {:?} is {}", angle, self.orientation);

        self.rerender();
    }

    fn handle_motion(&mut self, config: &AdapterConfig, event: &MotionEvent) {
        if !self.active {
            log::trace!(target: T, "ignoring motion update while inactive");
            return;
        }

        let mut accel = event.select_acceleration(config.use_gravity);
        if self.orientation.is_landscape() {
            accel = accel.swap_xy();
        }
        let accel = accel.scale(config.multiplier);

        self.reading = SensorReading::new(accel, event.rotation_rate);
        log::trace!(target: T, "reading {:?}", self.reading);

        self.rerender();
    }

    fn render(&mut self) -> R {
        let args = self
            .reading
            .position()
            .map(|position| (position, self.reading.rotation));

        (self.render)(args)
    }

    fn rerender(&mut self) {
        let output = self.render();
        self.output = Some(output);
    }
}
