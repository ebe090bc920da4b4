use crate::element::{Content, Element};

/// Tracks which element is focused and whether its focus ring should show.
///
/// The ring follows input modality: focus that arrives while the user is on
/// the keyboard is visible, focus that arrives from the pointer is not. This
/// also covers programmatic focus, which inherits the current modality.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    visible: bool,
    keyboard_modality: bool,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Whether the focused element should draw a focus ring.
    pub fn is_visible(&self) -> bool {
        self.focused.is_some() && self.visible
    }

    /// Whether `id` is focused with a visible ring.
    pub fn has_focus_ring(&self, id: &str) -> bool {
        self.is_visible() && self.focused() == Some(id)
    }

    /// Record the modality of the latest user input.
    pub fn set_keyboard_modality(&mut self, keyboard: bool) {
        self.keyboard_modality = keyboard;
    }

    /// Focus an element by ID. Ring visibility follows the current modality.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        self.visible = self.keyboard_modality;
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Focus an element from keyboard navigation (ring visible).
    /// Returns true if focus changed.
    pub fn focus_visible(&mut self, id: &str) -> bool {
        self.keyboard_modality = true;
        self.focus(id)
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.visible = false;
        self.focused.take().is_some()
    }

    /// Focus the next tab stop (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, true)
    }

    /// Focus the previous tab stop (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, false)
    }

    fn step(&mut self, root: &Element, forward: bool) -> Option<String> {
        let entries = focus_entries(root);
        let stops = tab_stops(&entries);
        if stops.is_empty() {
            return None;
        }

        let current = self
            .focused
            .as_ref()
            .and_then(|id| entries.iter().position(|e| &e.id == id));

        let next = match current {
            None => {
                if forward {
                    stops[0]
                } else {
                    stops[stops.len() - 1]
                }
            }
            Some(ci) => {
                // Leaving a radio group skips its other members.
                let other = |s: &&usize| match &entries[ci].group {
                    Some(group) => entries[**s].group.as_ref() != Some(group),
                    None => **s != ci,
                };
                let found = if forward {
                    stops
                        .iter()
                        .filter(other)
                        .find(|s| **s > ci)
                        .or_else(|| stops.iter().find(other))
                } else {
                    stops
                        .iter()
                        .rev()
                        .filter(other)
                        .find(|s| **s < ci)
                        .or_else(|| stops.iter().rev().find(other))
                };
                *found?
            }
        };

        let new_focus = entries[next].id.clone();
        self.focus_visible(&new_focus).then_some(new_focus)
    }
}

/// Collect all focusable element IDs in document order.
/// Disabled elements, and everything under a disabled element, are skipped.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    focus_entries(root).into_iter().map(|e| e.id).collect()
}

struct FocusEntry {
    id: String,
    /// Radio group name for native radios.
    group: Option<String>,
    checked: bool,
}

fn focus_entries(root: &Element) -> Vec<FocusEntry> {
    let mut entries = Vec::new();
    collect_entries(root, false, &mut entries);
    entries
}

fn collect_entries(element: &Element, parent_disabled: bool, out: &mut Vec<FocusEntry>) {
    let disabled = parent_disabled || element.disabled;

    if element.focusable && !disabled {
        let (group, checked) = match &element.content {
            Content::Control(control) if control.is_radio() => {
                (control.name.clone(), control.checked)
            }
            _ => (None, false),
        };
        out.push(FocusEntry {
            id: element.id.clone(),
            group,
            checked,
        });
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_entries(child, disabled, out);
        }
    }
}

/// Indices of the entries Tab can land on: every non-radio, and one radio
/// per group (the checked one, else the first).
fn tab_stops(entries: &[FocusEntry]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(i, entry)| match &entry.group {
            None => true,
            Some(group) => {
                let members = || entries.iter().enumerate().filter(|(_, e)| e.group.as_ref() == Some(group));
                match members().find(|(_, e)| e.checked) {
                    Some((checked, _)) => checked == *i,
                    None => members().next().map(|(first, _)| first) == Some(*i),
                }
            }
        })
        .map(|(i, _)| i)
        .collect()
}
