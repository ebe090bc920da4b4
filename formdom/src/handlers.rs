use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::event::Event;

/// What a handler sees: the element it is attached to and the event that reached it.
#[derive(Debug, Clone)]
pub struct EventContext {
    /// Differs from the event's own target while a click bubbles.
    pub current_target: String,
    pub event: Event,
}

pub type Handler = Arc<dyn Fn(&EventContext) + Send + Sync>;

type ElementHandlers = HashMap<&'static str, Handler>;

/// Event handlers for one rendered frame, per element id and event name.
///
/// Components fill a new registry on every render and the document swaps it
/// in on commit. Clones share the same table.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    elements: Arc<RwLock<HashMap<String, ElementHandlers>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `event` (`"click"`, `"change"`, `"focus"`, `"blur"`) on
    /// `element_id`, replacing any earlier one.
    pub fn register(&self, element_id: &str, event: &'static str, handler: Handler) {
        let Ok(mut elements) = self.elements.write() else {
            log::warn!("handler registry poisoned; dropping {event} handler for '{element_id}'");
            return;
        };
        elements
            .entry(element_id.to_string())
            .or_default()
            .insert(event, handler);
    }

    pub fn on(
        &self,
        element_id: &str,
        event: &'static str,
        f: impl Fn(&EventContext) + Send + Sync + 'static,
    ) {
        self.register(element_id, event, Arc::new(f));
    }

    /// The handler is cloned out so no lock is held while it runs.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        let elements = self.elements.read().ok()?;
        elements.get(element_id)?.get(event).cloned()
    }

    pub fn contains(&self, element_id: &str, event: &str) -> bool {
        self.get(element_id, event).is_some()
    }

    /// Number of (element, event) pairs with a handler.
    pub fn len(&self) -> usize {
        self.elements
            .read()
            .map(|elements| elements.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.len())
            .finish()
    }
}
