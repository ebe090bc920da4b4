//! Component-level notifications.
//!
//! Components report user intent through [`NonCancelableCustomEvent`]s. The
//! component has already decided what happened by the time the event fires,
//! so there is nothing for a listener to veto.

use std::sync::Arc;

/// An advisory notification carrying `detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonCancelableCustomEvent<D> {
    pub detail: D,
}

impl<D> NonCancelableCustomEvent<D> {
    pub fn new(detail: D) -> Self {
        Self { detail }
    }

    /// Always false.
    pub fn cancelable(&self) -> bool {
        false
    }

    /// Has no effect. Kept so listeners written against cancelable events still work.
    pub fn prevent_default(&self) {
        log::debug!("prevent_default called on a non-cancelable event, ignoring");
    }
}

/// Listener for a non-cancelable event.
pub type NonCancelableEventHandler<D> = Arc<dyn Fn(&NonCancelableCustomEvent<D>) + Send + Sync>;

/// Deliver `detail` to `handler`, if there is one.
///
/// Returns whether a listener was called.
pub fn fire_non_cancelable_event<D>(handler: Option<&NonCancelableEventHandler<D>>, detail: D) -> bool {
    match handler {
        Some(handler) => {
            handler(&NonCancelableCustomEvent::new(detail));
            true
        }
        None => false,
    }
}
