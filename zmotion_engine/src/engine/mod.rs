use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use dashmap::DashMap;

use crate::{
    event::{Event, EventKind},
    orientation::ScreenOrientation,
};

pub mod dispatch;
mod listener;


pub use self::listener::Listener;

const T: &'static str = "engine";

/// Where sensor events are posted and where listeners subscribe to them.
pub struct Engine {
    listeners: DashMap<EventKind, Vec<Listener>>,
    orientation: Arc<dyn ScreenOrientation + Send + Sync>,

    event_channel: Sender<Event>,
}

impl Engine {
    /// The returned receiver must be drained, usually by a thread from
    /// [`dispatch::new_event_thread`], for posted events to reach listeners.
    pub fn new(orientation: Arc<dyn ScreenOrientation + Send + Sync>) -> (Self, Receiver<Event>) {
        let (event_channel, receiver) = crossbeam_channel::unbounded();

        let engine = Engine {
            listeners: DashMap::new(),
            orientation,

            event_channel,
        };

        (engine, receiver)
    }

    /// Adding the same listener twice for the same kind has no effect.
    pub fn add_listener(&self, kind: EventKind, listener: &Listener) {
        let mut listeners = self.listeners.entry(kind).or_default();
        if listeners.contains(listener) {
            return;
        }

        listeners.push(listener.clone());
        log::trace!(target: T, "added {} listener {}", kind, listener.id());
    }

    /// Returns `false` if the listener wasn't registered for `kind`.
    pub fn remove_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        let Some(mut listeners) = self.listeners.get_mut(&kind)
        else { return false; };

        let Some(index) = listeners.iter().position(|l| l == listener)
        else { return false; };

        listeners.remove(index);
        log::trace!(target: T, "removed {} listener {}", kind, listener.id());

        true
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, |listeners| listeners.len())
    }

    /// Queues an event for the dispatch thread. Can be called from any thread.
    pub fn post(&self, event: Event) -> Result<(), EngineStopped> {
        self.event_channel.send(event).map_err(|_| EngineStopped)
    }

    /// Calls every listener registered for the event's kind, in the order they
    /// were added, on the calling thread.
    ///
    /// Listeners see a snapshot taken before the first call, so they are free
    /// to add or remove listeners themselves.
    pub fn dispatch(&self, event: &Event) {
        let kind = event.kind();
        let snapshot = match self.listeners.get(&kind) {
            Some(listeners) => listeners.value().clone(),
            None => return,
        };

        for listener in &snapshot {
            listener.call(event);
        }
    }

    /// Current screen rotation in degrees.
    pub fn orientation(&self) -> Option<i32> {
        self.orientation.angle()
    }

    pub fn orientation_source(&self) -> Arc<dyn ScreenOrientation + Send + Sync> {
        self.orientation.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineStopped;

impl std::fmt::Display for EngineStopped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "engine is no longer dispatching events")
    }
}

impl std::error::Error for EngineStopped {}
