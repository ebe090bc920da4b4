//! Native checkable inputs.
//!
//! A [`NativeControl`] is what a render *asks for*: the attributes of an input
//! element. [`NativeInputs`] is what the platform *holds*: one internal checked
//! flag per mounted input, mutated by the input's default action the way a
//! browser mutates `HTMLInputElement.checked` on click.
//!
//! Controls are always controlled: every commit forces the internal flag to
//! the attribute, and [`NativeInputs::restore_controlled`] undoes any
//! self-toggle once event handlers have run.

use crate::error::DomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Radio,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeControl {
    pub kind: ControlKind,
    /// Radios sharing a name are mutually exclusive.
    pub name: Option<String>,
    pub value: String,
    pub checked: bool,
}

impl NativeControl {
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: ControlKind::Radio,
            name: Some(name.into()),
            value: value.into(),
            checked: false,
        }
    }

    pub fn checkbox(value: impl Into<String>) -> Self {
        Self {
            kind: ControlKind::Checkbox,
            name: None,
            value: value.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_radio(&self) -> bool {
        self.kind == ControlKind::Radio
    }
}

#[derive(Debug, Clone)]
struct InputSlot {
    id: String,
    attrs: NativeControl,
    checked: bool,
}

/// Platform-side state of every mounted input, in document order.
#[derive(Debug, Default)]
pub struct NativeInputs {
    slots: Vec<InputSlot>,
}

impl NativeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mounted set. Each internal flag is forced to its `checked` attribute.
    pub fn commit(&mut self, controls: impl IntoIterator<Item = (String, NativeControl)>) {
        self.slots = controls
            .into_iter()
            .map(|(id, attrs)| InputSlot {
                checked: attrs.checked,
                id,
                attrs,
            })
            .collect();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slot(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The internal checked flag of a mounted input.
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.slot(id).map(|slot| slot.checked)
    }

    /// The attributes an input was last committed with.
    pub fn attrs(&self, id: &str) -> Option<&NativeControl> {
        self.slot(id).map(|slot| &slot.attrs)
    }

    /// Run the platform default action for a click on `id`.
    ///
    /// A radio becomes checked and unchecks every other radio sharing its
    /// name. A checkbox toggles. Returns whether the internal flag changed,
    /// which is when the platform fires a native change event.
    pub fn activate(&mut self, id: &str) -> Result<bool, DomError> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or_else(|| DomError::NotAControl(id.to_string()))?;

        let attrs = self.slots[index].attrs.clone();
        match attrs.kind {
            ControlKind::Checkbox => {
                let slot = &mut self.slots[index];
                slot.checked = !slot.checked;
                Ok(true)
            }
            ControlKind::Radio => {
                if self.slots[index].checked {
                    return Ok(false);
                }
                self.slots[index].checked = true;
                if let Some(name) = &attrs.name {
                    for (i, slot) in self.slots.iter_mut().enumerate() {
                        if i != index
                            && slot.attrs.kind == ControlKind::Radio
                            && slot.attrs.name.as_ref() == Some(name)
                        {
                            slot.checked = false;
                        }
                    }
                }
                Ok(true)
            }
        }
    }

    /// Reset every input to its committed attribute.
    /// Returns the ids whose internal flag had drifted.
    pub fn restore_controlled(&mut self) -> Vec<String> {
        let mut restored = Vec::new();
        for slot in &mut self.slots {
            if slot.checked != slot.attrs.checked {
                slot.checked = slot.attrs.checked;
                restored.push(slot.id.clone());
            }
        }
        restored
    }

    /// Ids of the radios named `name`, in document order.
    pub fn group(&self, name: &str) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.attrs.is_radio() && slot.attrs.name.as_deref() == Some(name))
            .map(|slot| slot.id.as_str())
            .collect()
    }

    /// Ids of the radios named `name` whose internal flag is set.
    pub fn checked_in_group(&self, name: &str) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| {
                slot.checked && slot.attrs.is_radio() && slot.attrs.name.as_deref() == Some(name)
            })
            .map(|slot| slot.id.as_str())
            .collect()
    }

    fn slot(&self, id: &str) -> Option<&InputSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }
}
