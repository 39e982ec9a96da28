use std::sync::Arc;

use uuid::Uuid;

use crate::event::Event;

/// An event handler with a stable identity.
///
/// Clones share the identity, so the value used to subscribe is also the
/// value that unsubscribes. Two listeners created from the same closure are
/// still different listeners.
#[derive(Clone)]
pub struct Listener {
    id: Uuid,
    handler: Arc<dyn Fn(&Event) + Send + Sync>,
}

impl Listener {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        Listener {
            id: Uuid::new_v4(),
            handler: Arc::new(handler),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn call(&self, event: &Event) {
        (self.handler)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Listener {}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Listener").field(&self.id).finish()
    }
}
