//! The committed element tree and the platform behavior around it.
//!
//! Components render a fresh [`Element`] tree plus a [`HandlerRegistry`] on
//! every pass and hand both to [`Document::commit`]. The document keeps the
//! platform-side state that must survive re-renders (focus and the native
//! inputs' checked flags), writes node handles into refs, and turns raw
//! events into handler calls with native default actions in between.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::buffer::Buffer;
use crate::control::{NativeControl, NativeInputs};
use crate::element::{find_element, find_path, Content, Element};
use crate::error::DomError;
use crate::event::{Event, Key, Modifiers};
use crate::focus::FocusState;
use crate::handlers::{EventContext, HandlerRegistry};
use crate::hit::hit_test;
use crate::layout::{layout, LayoutResult, Rect};
use crate::refs::{ElementRef, NodeHandle};
use crate::render::render_to_buffer;
use crate::types::{ColorContext, DefaultTheme, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeInfo {
    pub(crate) focusable: bool,
    /// Disabled itself or through an ancestor.
    pub(crate) disabled: bool,
}

/// State shared with [`NodeHandle`]s.
#[derive(Debug, Default)]
pub(crate) struct DocumentState {
    pub(crate) focus: RwLock<FocusState>,
    pub(crate) inputs: RwLock<NativeInputs>,
    nodes: RwLock<HashMap<String, NodeInfo>>,
}

impl DocumentState {
    pub(crate) fn node(&self, id: &str) -> Option<NodeInfo> {
        self.nodes.read().ok().and_then(|nodes| nodes.get(id).copied())
    }
}

pub struct Document {
    root: Element,
    registry: HandlerRegistry,
    layout: LayoutResult,
    refs: Vec<ElementRef>,
    state: Arc<DocumentState>,
    theme: Box<dyn Theme>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_theme(DefaultTheme::new())
    }

    pub fn with_theme(theme: impl Theme + 'static) -> Self {
        Self {
            root: Element::box_(),
            registry: HandlerRegistry::new(),
            layout: LayoutResult::new(),
            refs: Vec::new(),
            state: Arc::new(DocumentState::default()),
            theme: Box::new(theme),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Install a freshly rendered tree and its handlers.
    ///
    /// Native inputs are forced to their `checked` attributes, refs are moved
    /// from the old tree to the new one, and focus is dropped if the focused
    /// node is gone or can no longer take focus.
    pub fn commit(&mut self, mut root: Element, registry: HandlerRegistry) {
        let mut nodes = HashMap::new();
        let mut controls = Vec::new();
        let mut refs = Vec::new();
        index_tree(&root, false, &mut nodes, &mut controls, &mut refs);
        log::debug!(
            "commit: {} nodes, {} native controls, {} refs",
            nodes.len(),
            controls.len(),
            refs.len()
        );

        for old in self.refs.drain(..) {
            old.set(None);
        }

        if let Ok(mut inputs) = self.state.inputs.write() {
            inputs.commit(controls);
        }

        let focused = self.focused();
        if let Some(id) = &focused {
            let keep = nodes
                .get(id)
                .map(|info: &NodeInfo| info.focusable && !info.disabled)
                .unwrap_or(false);
            if !keep {
                log::debug!("commit: dropping focus from '{id}'");
                if let Ok(mut focus) = self.state.focus.write() {
                    focus.blur();
                }
            }
        }

        if let Ok(mut guard) = self.state.nodes.write() {
            *guard = nodes;
        }

        mark_focused(&mut root, self.focused().as_deref());
        self.root = root;
        self.registry = registry;
        self.layout.clear();

        for (id, node_ref) in refs {
            node_ref.set(Some(NodeHandle::new(id, &self.state)));
            self.refs.push(node_ref);
        }
    }

    /// Dispatch one event. Returns whether anything handled it.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match event {
            Event::Click { target, x, y, .. } => {
                self.set_keyboard_modality(false);
                let target = match target {
                    Some(target) => Some(target.clone()),
                    None => hit_test(&self.layout, &self.root, *x, *y),
                };
                match target {
                    Some(target) => self.click(&target),
                    None => false,
                }
            }
            Event::Key {
                target,
                key,
                modifiers,
            } => {
                self.set_keyboard_modality(true);
                self.key(target.as_deref(), *key, *modifiers)
            }
            Event::Focus { target } => {
                let moved = self.handle(target).and_then(|h| h.focus()).unwrap_or(false);
                self.fire(target, "focus", event) || moved
            }
            Event::Blur { target } => {
                if self.focused().as_deref() == Some(target.as_str()) {
                    if let Ok(mut focus) = self.state.focus.write() {
                        focus.blur();
                    }
                }
                self.fire(target, "blur", event)
            }
            Event::Change { target } => self.fire(target, "change", event),
            Event::Resize { .. } => {
                self.layout.clear();
                true
            }
        }
    }

    /// Handle for a mounted node.
    pub fn handle(&self, id: &str) -> Result<NodeHandle, DomError> {
        if self.state.node(id).is_none() {
            return Err(DomError::UnknownElement(id.to_string()));
        }
        Ok(NodeHandle::new(id, &self.state))
    }

    pub fn focused(&self) -> Option<String> {
        self.state
            .focus
            .read()
            .ok()
            .and_then(|focus| focus.focused().map(str::to_string))
    }

    /// Whether the focused node currently shows a focus ring.
    pub fn focus_visible(&self) -> bool {
        self.state
            .focus
            .read()
            .map(|focus| focus.is_visible())
            .unwrap_or(false)
    }

    /// The platform checked flag of a native control.
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.state.inputs.read().ok()?.is_checked(id)
    }

    /// Ids of the checked radios named `name`.
    pub fn checked_in_group(&self, name: &str) -> Vec<String> {
        self.state
            .inputs
            .read()
            .map(|inputs| {
                inputs
                    .checked_in_group(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Lay the tree out in `area`, keeping the result for hit testing.
    pub fn layout(&mut self, area: Rect) -> &LayoutResult {
        self.layout = layout(&self.root, area);
        &self.layout
    }

    /// Lay out and paint the tree into `buf`.
    pub fn render(&mut self, buf: &mut Buffer) {
        let focused = self.focused();
        mark_focused(&mut self.root, focused.as_deref());
        self.layout = layout(&self.root, Rect::from_size(buf.width(), buf.height()));

        let colors = ColorContext::new(self.theme.as_ref());
        if let Ok(focus) = self.state.focus.read() {
            render_to_buffer(&self.root, &self.layout, buf, &colors, &focus);
        }
    }

    fn set_keyboard_modality(&self, keyboard: bool) {
        if let Ok(mut focus) = self.state.focus.write() {
            focus.set_keyboard_modality(keyboard);
        }
    }

    /// Activation: redirect label clicks to their control, run the native
    /// default action, bubble `click`, fire `change` when the platform flag
    /// moved, then put every controlled input back to its attribute.
    fn click(&mut self, target: &str) -> bool {
        let Some(path) = find_path(&self.root, target) else {
            log::debug!("click on unknown element '{target}'");
            return false;
        };
        if path.iter().any(|el| el.disabled) {
            log::debug!("click on disabled '{target}' suppressed");
            return false;
        }

        let control = match path.last() {
            Some(el) if el.native_control().is_some() => Some(target.to_string()),
            _ => path.iter().rev().find_map(|el| el.label_for.clone()),
        };

        let origin = control.clone().unwrap_or_else(|| target.to_string());
        let Some(origin_path) = find_path(&self.root, &origin) else {
            log::warn!("label points at missing control '{origin}'");
            return false;
        };
        if origin_path.iter().any(|el| el.disabled) {
            log::debug!("activation of disabled control '{origin}' suppressed");
            return false;
        }
        let bubble: Vec<String> = origin_path.iter().rev().map(|el| el.id.clone()).collect();

        let changed = match &control {
            Some(id) => self
                .state
                .inputs
                .write()
                .map_err(|_| DomError::NotAControl(id.clone()))
                .and_then(|mut inputs| inputs.activate(id))
                .unwrap_or_else(|err| {
                    log::warn!("native activation failed: {err}");
                    false
                }),
            None => false,
        };

        let click = Event::click(origin.clone());
        let mut handled = control.is_some();
        for id in &bubble {
            handled |= self.fire(id, "click", &click);
        }

        if changed {
            self.fire(&origin, "change", &Event::Change { target: origin.clone() });
        }

        if let Ok(mut inputs) = self.state.inputs.write() {
            let restored = inputs.restore_controlled();
            if !restored.is_empty() {
                log::debug!("restored controlled inputs {restored:?}");
            }
        }

        handled
    }

    fn key(&mut self, target: Option<&str>, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::Tab if !modifiers.shift => return self.move_focus(true),
            Key::Tab | Key::BackTab => return self.move_focus(false),
            _ => {}
        }

        let Some(target) = target.map(str::to_string).or_else(|| self.focused()) else {
            return false;
        };

        match key {
            Key::Char(' ') if modifiers.none() => self.click(&target),
            Key::Up | Key::Left => self.step_radio(&target, false),
            Key::Down | Key::Right => self.step_radio(&target, true),
            _ => false,
        }
    }

    fn move_focus(&mut self, forward: bool) -> bool {
        let old = self.focused();
        let new = match self.state.focus.write() {
            Ok(mut focus) => {
                if forward {
                    focus.focus_next(&self.root)
                } else {
                    focus.focus_prev(&self.root)
                }
            }
            Err(_) => None,
        };

        let Some(new) = new else {
            return false;
        };
        self.notify_focus_change(old, &new);
        true
    }

    /// Arrow keys inside a radio group move to the next enabled member and select it.
    fn step_radio(&mut self, target: &str, forward: bool) -> bool {
        let group: Vec<String> = match self.state.inputs.read() {
            Ok(inputs) => {
                let Some(name) = inputs
                    .attrs(target)
                    .filter(|attrs| attrs.is_radio())
                    .and_then(|attrs| attrs.name.clone())
                else {
                    return false;
                };
                inputs
                    .group(&name)
                    .into_iter()
                    .filter(|id| self.state.node(id).map(|n| !n.disabled).unwrap_or(false))
                    .map(str::to_string)
                    .collect()
            }
            Err(_) => return false,
        };

        let Some(idx) = group.iter().position(|id| id == target) else {
            return false;
        };
        let next = if forward {
            (idx + 1) % group.len()
        } else {
            (idx + group.len() - 1) % group.len()
        };
        let next = group[next].clone();

        let old = self.focused();
        if let Ok(mut focus) = self.state.focus.write() {
            focus.focus_visible(&next);
        }
        if old.as_deref() != Some(next.as_str()) {
            self.notify_focus_change(old, &next);
        }
        self.click(&next)
    }

    fn notify_focus_change(&self, old: Option<String>, new: &str) {
        if let Some(old) = old {
            self.fire(&old, "blur", &Event::Blur { target: old.clone() });
        }
        self.fire(new, "focus", &Event::Focus { target: new.to_string() });
    }

    fn fire(&self, id: &str, name: &str, event: &Event) -> bool {
        match self.registry.get(id, name) {
            Some(handler) => {
                handler(&EventContext {
                    current_target: id.to_string(),
                    event: event.clone(),
                });
                true
            }
            None => false,
        }
    }
}

fn index_tree(
    element: &Element,
    parent_disabled: bool,
    nodes: &mut HashMap<String, NodeInfo>,
    controls: &mut Vec<(String, NativeControl)>,
    refs: &mut Vec<(String, ElementRef)>,
) {
    let disabled = parent_disabled || element.disabled;
    let info = NodeInfo {
        focusable: element.focusable,
        disabled,
    };
    if nodes.insert(element.id.clone(), info).is_some() {
        log::warn!("duplicate element id '{}'", element.id);
    }
    if let Some(control) = element.native_control() {
        controls.push((element.id.clone(), control.clone()));
    }
    if let Some(node_ref) = &element.node_ref {
        refs.push((element.id.clone(), node_ref.clone()));
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            index_tree(child, disabled, nodes, controls, refs);
        }
    }
}

fn mark_focused(element: &mut Element, focused: Option<&str>) {
    element.focused = focused == Some(element.id.as_str());
    if let Content::Children(children) = &mut element.content {
        for child in children {
            mark_focused(child, focused);
        }
    }
}
