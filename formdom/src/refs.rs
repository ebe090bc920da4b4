//! Element references.
//!
//! A node's `node_ref` is written with a [`NodeHandle`] when the node is
//! committed and cleared when it leaves the tree. [`MergedRef`] fans one
//! mount/unmount out to several slots so a component can keep its own
//! reference while still forwarding one to its caller.

use std::sync::{Arc, RwLock, Weak};

use crate::document::DocumentState;
use crate::error::DomError;

/// Anything that can receive a node handle on mount (`Some`) and unmount (`None`).
pub trait RefTarget: Send + Sync {
    fn set(&self, node: Option<NodeHandle>);
}

/// Type-erased ref stored on an element.
#[derive(Clone)]
pub struct ElementRef(Arc<dyn RefTarget>);

impl ElementRef {
    pub fn new(target: Arc<dyn RefTarget>) -> Self {
        Self(target)
    }

    pub fn set(&self, node: Option<NodeHandle>) {
        self.0.set(node);
    }
}

impl std::fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementRef(..)")
    }
}

impl PartialEq for ElementRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A shared slot holding the handle of whatever node it is attached to.
///
/// Cloning shares the slot.
#[derive(Clone, Default)]
pub struct NodeRef {
    slot: Arc<RwLock<Option<NodeHandle>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle of the attached node, if mounted.
    pub fn current(&self) -> Option<NodeHandle> {
        self.slot.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_attached(&self) -> bool {
        self.slot.read().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Focus the attached node. Returns `Ok(false)` when nothing is attached
    /// or the node cannot take focus.
    pub fn focus(&self) -> Result<bool, DomError> {
        match self.current() {
            Some(handle) => handle.focus(),
            None => Ok(false),
        }
    }
}

impl RefTarget for NodeRef {
    fn set(&self, node: Option<NodeHandle>) {
        if let Ok(mut guard) = self.slot.write() {
            *guard = node;
        }
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeRef").field(&self.current()).finish()
    }
}

/// Writes every mount/unmount into each of its targets.
#[derive(Default)]
pub struct MergedRef {
    targets: Vec<Arc<dyn RefTarget>>,
}

impl MergedRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, target: impl RefTarget + 'static) -> Self {
        self.targets.push(Arc::new(target));
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl RefTarget for MergedRef {
    fn set(&self, node: Option<NodeHandle>) {
        for target in &self.targets {
            target.set(node.clone());
        }
    }
}

/// Merge several optional slots into one ref target. Absent slots are skipped.
pub fn merge_refs(refs: impl IntoIterator<Item = Option<NodeRef>>) -> MergedRef {
    refs.into_iter()
        .flatten()
        .fold(MergedRef::new(), |merged, node_ref| merged.push(node_ref))
}

/// Imperative access to a mounted node.
#[derive(Clone)]
pub struct NodeHandle {
    id: String,
    state: Weak<DocumentState>,
}

impl NodeHandle {
    pub(crate) fn new(id: impl Into<String>, state: &Arc<DocumentState>) -> Self {
        Self {
            id: id.into(),
            state: Arc::downgrade(state),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_mounted(&self) -> bool {
        self.state().is_ok()
    }

    /// Move input focus to this node.
    ///
    /// Returns whether focus moved. Disabled and non-focusable nodes never take focus.
    pub fn focus(&self) -> Result<bool, DomError> {
        let state = self.state()?;
        let info = state.node(&self.id).ok_or_else(|| self.detached())?;
        if !info.focusable || info.disabled {
            log::debug!("focus on '{}' ignored (not focusable)", self.id);
            return Ok(false);
        }
        let changed = state
            .focus
            .write()
            .map(|mut focus| focus.focus(&self.id))
            .unwrap_or(false);
        Ok(changed)
    }

    pub fn is_focused(&self) -> bool {
        let Ok(state) = self.state() else {
            return false;
        };
        let Ok(focus) = state.focus.read() else {
            return false;
        };
        focus.focused() == Some(self.id.as_str())
    }

    /// The platform checked flag of this node's native control.
    pub fn is_checked(&self) -> Result<bool, DomError> {
        let state = self.state()?;
        let checked = state
            .inputs
            .read()
            .ok()
            .and_then(|inputs| inputs.is_checked(&self.id));
        checked.ok_or_else(|| DomError::NotAControl(self.id.clone()))
    }

    pub fn is_disabled(&self) -> Result<bool, DomError> {
        let state = self.state()?;
        state
            .node(&self.id)
            .map(|info| info.disabled)
            .ok_or_else(|| self.detached())
    }

    fn state(&self) -> Result<Arc<DocumentState>, DomError> {
        let state = self.state.upgrade().ok_or_else(|| self.detached())?;
        if state.node(&self.id).is_none() {
            return Err(self.detached());
        }
        Ok(state)
    }

    fn detached(&self) -> DomError {
        DomError::Detached(self.id.clone())
    }
}

impl std::fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeHandle").field("id", &self.id).finish()
    }
}

impl PartialEq for NodeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Weak::ptr_eq(&self.state, &other.state)
    }
}
