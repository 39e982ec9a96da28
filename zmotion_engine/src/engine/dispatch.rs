use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crossbeam_channel::{select, Receiver};

use crate::{event::Event, Engine};

const T: &'static str = "events";

const STOP_POLL: Duration = Duration::from_millis(50);

pub struct Thread {
    pub event_channel: Receiver<Event>,
    pub engine: Arc<Engine>,
    pub stop: Arc<AtomicBool>,
}

pub fn new_event_thread(thread: Thread) -> impl FnOnce() {
    move || event_thread(thread)
}

fn event_thread(
    Thread {
        event_channel,
        engine,
        stop,
    }: Thread,
) {
    log::info!(target: T, "event thread started");

    while !stop.load(Ordering::Acquire) {
        select! {
            recv(event_channel) -> event => {
                match event {
                    Ok(event) => {
                        log::trace!(target: T, "dispatching {}", event.kind());
                        engine.dispatch(&event);
                    }
                    Err(err) => {
                        log::error!(target: T, "event channel received error: {}", err);
                        break;
                    }
                }
            }
            default(STOP_POLL) => {}
        }
    }

    log::info!(target: T, "event thread stopped");
}

/// Dispatches everything already queued without waiting for more.
/// Returns the number of events dispatched.
pub fn drain(engine: &Engine, event_channel: &Receiver<Event>) -> usize {
    let mut count = 0;
    while let Ok(event) = event_channel.try_recv() {
        engine.dispatch(&event);
        count += 1;
    }

    count
}
