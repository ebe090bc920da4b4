use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use formdom::{DomError, Element, NodeRef};

use super::styles::{GROUP_CLASS, HORIZONTAL_CLASS};
use super::{ChangeDetail, RadioButton, RadioButtonDefinition, RadioGroupError, RadioValue};
use crate::base::{BaseComponentProps, Component, apply_display_name, use_base_component};
use crate::context::RenderContext;
use crate::events::{NonCancelableCustomEvent, NonCancelableEventHandler};
use crate::id::use_unique_id;

/// How the options of a group are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioGroupDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// A group of mutually exclusive options bound to a caller-owned value.
///
/// The group id (and with it the default native `name`) is generated once,
/// in [`RadioGroup::new`], and stays the same however often the group is
/// rendered. Keep the group around between frames and update its value with
/// [`RadioGroup::set_value`].
///
/// # Example
///
/// ```ignore
/// let mut size = RadioGroup::new()
///     .items([
///         RadioButtonDefinition::new("s", "Small"),
///         RadioButtonDefinition::new("m", "Medium"),
///     ])
///     .on_change(|event| log::info!("picked {}", event.detail.value));
///
/// // every frame
/// size.set_value(current.clone());
/// let root = size.build(&cx);
/// ```
#[derive(Clone)]
pub struct RadioGroup<T: RadioValue> {
    id: String,
    items: Vec<RadioButtonDefinition<T>>,
    value: Option<T>,
    name: Option<String>,
    disabled: bool,
    read_only: bool,
    direction: RadioGroupDirection,
    aria_label: Option<String>,
    aria_labelled_by: Option<String>,
    aria_described_by: Option<String>,
    aria_required: bool,
    on_change: Option<NonCancelableEventHandler<ChangeDetail<T>>>,
    base: BaseComponentProps,
    group_ref: RadioGroupRef,
}

impl<T: RadioValue> Component for RadioGroup<T> {
    const DISPLAY_NAME: &'static str = "RadioGroup";
}

impl<T: RadioValue> Default for RadioGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RadioValue> RadioGroup<T> {
    pub fn new() -> Self {
        Self {
            id: use_unique_id("formkit-radio-group-"),
            items: Vec::new(),
            value: None,
            name: None,
            disabled: false,
            read_only: false,
            direction: RadioGroupDirection::Vertical,
            aria_label: None,
            aria_labelled_by: None,
            aria_described_by: None,
            aria_required: false,
            on_change: None,
            base: BaseComponentProps::default(),
            group_ref: RadioGroupRef::default(),
        }
    }

    pub fn items(mut self, items: impl IntoIterator<Item = RadioButtonDefinition<T>>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    /// Override the native `name` shared by the group's inputs.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Disable every option.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Options stay focusable but picking one never notifies.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn direction(mut self, direction: RadioGroupDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn aria_labelled_by(mut self, id: impl Into<String>) -> Self {
        self.aria_labelled_by = Some(id.into());
        self
    }

    pub fn aria_described_by(mut self, id: impl Into<String>) -> Self {
        self.aria_described_by = Some(id.into());
        self
    }

    pub fn aria_required(mut self, required: bool) -> Self {
        self.aria_required = required;
        self
    }

    pub fn on_change(
        mut self,
        f: impl Fn(&NonCancelableCustomEvent<ChangeDetail<T>>) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn base_props(mut self, props: BaseComponentProps) -> Self {
        self.base = props;
        self
    }

    pub fn set_value(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn set_items(&mut self, items: impl IntoIterator<Item = RadioButtonDefinition<T>>) {
        self.items = items.into_iter().collect();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn selected(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The native `name` the inputs share.
    pub fn group_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Id of the native input rendered for `item`.
    ///
    /// The value is hex-encoded so no value can reproduce another option's
    /// derived element ids (`-label`, `-wrapper` and the rest).
    pub fn control_id(&self, item: &RadioButtonDefinition<T>) -> String {
        item.control_id
            .clone()
            .unwrap_or_else(|| format!("{}-{}", self.id, hex(item.value.as_ref())))
    }

    /// Imperative handle to the rendered group.
    pub fn group_ref(&self) -> RadioGroupRef {
        self.group_ref.clone()
    }

    /// Check that no two options share a value.
    pub fn validate(&self) -> Result<(), RadioGroupError> {
        validate_unique_values(&self.items)
    }

    pub fn build(&self, cx: &RenderContext) -> Element {
        let base = use_base_component(Self::DISPLAY_NAME, &self.base);
        base.root(apply_display_name::<Self>(self.build_internal(cx)))
    }

    fn build_internal(&self, cx: &RenderContext) -> Element {
        if let Some(value) = &self.value {
            if !self.items.iter().any(|item| &item.value == value) {
                log::debug!(
                    "radio group '{}': value '{}' matches no option",
                    self.id,
                    value.as_ref()
                );
            }
        }

        let name = self.group_name().to_string();
        let on_change = if self.read_only {
            None
        } else {
            self.on_change.clone()
        };

        let mut slots = Vec::with_capacity(self.items.len());
        let mut options = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let checked = self.value.as_ref() == Some(&item.value);
            let mut definition = item.clone();
            definition.disabled |= self.disabled;
            definition.control_id = Some(self.control_id(item));

            let node_ref = NodeRef::new();
            slots.push(RefSlot {
                node_ref: node_ref.clone(),
                checked,
                disabled: definition.disabled,
            });
            options.push(
                RadioButton::new(name.clone(), definition, checked)
                    .on_change(on_change.clone())
                    .node_ref(node_ref)
                    .build(cx),
            );
        }
        self.group_ref.replace(slots);

        let gap = cx.config().gap;
        let root = match self.direction {
            RadioGroupDirection::Vertical => Element::col().gap(gap),
            RadioGroupDirection::Horizontal => Element::row().class(HORIZONTAL_CLASS).gap(gap.max(2)),
        };
        let mut root = root
            .id(self.id.clone())
            .class(GROUP_CLASS)
            .aria("role", "radiogroup")
            .children(options);

        if let Some(label) = &self.aria_label {
            root = root.aria("aria-label", label.clone());
        }
        if let Some(id) = &self.aria_labelled_by {
            root = root.aria("aria-labelledby", id.clone());
        }
        if let Some(id) = &self.aria_described_by {
            root = root.aria("aria-describedby", id.clone());
        }
        if self.aria_required {
            root = root.aria("aria-required", "true");
        }
        if self.read_only {
            root = root.aria("aria-readonly", "true");
        }
        root
    }
}

#[derive(Debug, Clone)]
struct RefSlot {
    node_ref: NodeRef,
    checked: bool,
    disabled: bool,
}

/// Imperative access to a rendered [`RadioGroup`].
#[derive(Debug, Clone, Default)]
pub struct RadioGroupRef {
    slots: Arc<RwLock<Vec<RefSlot>>>,
}

impl RadioGroupRef {
    fn replace(&self, slots: Vec<RefSlot>) {
        if let Ok(mut guard) = self.slots.write() {
            *guard = slots;
        }
    }

    /// Focus the checked option, or the first enabled one if nothing is checked.
    ///
    /// Returns `Ok(false)` when no option can take focus.
    pub fn focus(&self) -> Result<bool, DomError> {
        let slots = self
            .slots
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        let target = slots
            .iter()
            .find(|slot| slot.checked && !slot.disabled)
            .or_else(|| slots.iter().find(|slot| !slot.disabled));

        match target {
            Some(slot) => slot.node_ref.focus(),
            None => {
                log::debug!("radio group has no focusable option");
                Ok(false)
            }
        }
    }
}

fn hex(value: &str) -> String {
    value.bytes().map(|b| format!("{b:02x}")).collect()
}

/// Check that no two definitions share a value.
pub fn validate_unique_values<T: RadioValue>(
    items: &[RadioButtonDefinition<T>],
) -> Result<(), RadioGroupError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.value.as_ref()) {
            return Err(RadioGroupError::DuplicateValue(item.value.as_ref().to_string()));
        }
    }
    Ok(())
}
