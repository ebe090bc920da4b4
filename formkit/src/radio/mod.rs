//! Single-selection radio groups.
//!
//! A [`RadioGroup`] renders one [`RadioButton`] per option definition. The
//! selection is owned by the caller: the group never changes it, it only
//! reports which option the user picked. Each option is a native radio input
//! (focus, keyboard traversal and grouping come from the document) under an
//! owner-drawn pair of circles re-derived from props on every render.

mod button;
mod error;
mod group;
pub mod styles;

use serde::{Deserialize, Serialize};

pub use button::RadioButton;
pub use error::RadioGroupError;
pub use group::{RadioGroup, RadioGroupDirection, RadioGroupRef, validate_unique_values};

/// Values a radio option can carry. The string form is the native input's value.
pub trait RadioValue: AsRef<str> + Clone + PartialEq + Send + Sync + 'static {}

impl<T> RadioValue for T where T: AsRef<str> + Clone + PartialEq + Send + Sync + 'static {}

/// One option of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioButtonDefinition<T> {
    /// Identity of the option. Unique within a group.
    pub value: T,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Id for the native input. Generated from the group id and value if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
}

impl<T> RadioButtonDefinition<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            description: None,
            disabled: false,
            control_id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn control_id(mut self, id: impl Into<String>) -> Self {
        self.control_id = Some(id.into());
        self
    }
}

/// Payload of a group's change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDetail<T> {
    pub value: T,
}
