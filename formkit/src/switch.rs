//! Shared presentation for checkable controls.
//!
//! [`AbstractSwitch`] lays out a control box (the owner-drawn visual, the
//! native input and a focus outline stacked on top of each other) next to a
//! label and an optional description. Clicks anywhere on the label reach the
//! native input, and the switch's click handler hangs off that input.

use std::sync::Arc;

use formdom::{Color, Element, Position, Size, Style};

use crate::context::RenderContext;
use crate::id::use_unique_id;

pub const WRAPPER_CLASS: &str = "abstract-switch";
pub const CONTENT_CLASS: &str = "abstract-switch__content";
pub const LABEL_CLASS: &str = "abstract-switch__label";
pub const DESCRIPTION_CLASS: &str = "abstract-switch__description";
pub const DISABLED_CLASS: &str = "abstract-switch--disabled";

/// Attributes the switch wants on its native input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeControlProps {
    pub id: String,
    pub disabled: bool,
    pub labelled_by: Option<String>,
    pub described_by: Option<String>,
}

impl NativeControlProps {
    /// Spread the props onto a native input element.
    pub fn apply(&self, control: Element) -> Element {
        let mut control = control
            .id(self.id.clone())
            .disabled(self.disabled)
            .focusable(!self.disabled)
            .clickable(!self.disabled);
        if let Some(label) = &self.labelled_by {
            control = control.aria("aria-labelledby", label.clone());
        }
        if let Some(description) = &self.described_by {
            control = control.aria("aria-describedby", description.clone());
        }
        if self.disabled {
            control = control.aria("aria-disabled", "true");
        }
        control
    }
}

type NativeControlFn<'a> = Box<dyn FnOnce(NativeControlProps) -> Element + 'a>;
type ClickFn = Arc<dyn Fn() + Send + Sync>;

pub struct AbstractSwitch<'a> {
    label: Option<String>,
    description: Option<String>,
    disabled: bool,
    control_id: Option<String>,
    native_control: Option<NativeControlFn<'a>>,
    styled_control: Option<Element>,
    on_click: Option<ClickFn>,
    class_name: Option<String>,
    control_class_name: Option<String>,
    outline_class_name: Option<String>,
}

impl Default for AbstractSwitch<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AbstractSwitch<'a> {
    pub fn new() -> Self {
        Self {
            label: None,
            description: None,
            disabled: false,
            control_id: None,
            native_control: None,
            styled_control: None,
            on_click: None,
            class_name: None,
            control_class_name: None,
            outline_class_name: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Id of the native input. Without one a fresh id is generated on every
    /// build, which drops focus across re-renders.
    pub fn control_id(mut self, id: Option<String>) -> Self {
        self.control_id = id;
        self
    }

    /// Render the native input from the props the switch computes.
    pub fn native_control(mut self, render: impl FnOnce(NativeControlProps) -> Element + 'a) -> Self {
        self.native_control = Some(Box::new(render));
        self
    }

    /// The owner-drawn visual, drawn under the native input.
    pub fn styled_control(mut self, element: Element) -> Self {
        self.styled_control = Some(element);
        self
    }

    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn control_class_name(mut self, class: impl Into<String>) -> Self {
        self.control_class_name = Some(class.into());
        self
    }

    pub fn outline_class_name(mut self, class: impl Into<String>) -> Self {
        self.outline_class_name = Some(class.into());
        self
    }

    pub fn build(self, cx: &RenderContext) -> Element {
        let control_id = self
            .control_id
            .unwrap_or_else(|| use_unique_id("formkit-switch-"));
        let label_id = self.label.as_ref().map(|_| format!("{control_id}-label"));
        let description_id = self
            .description
            .as_ref()
            .map(|_| format!("{control_id}-description"));

        let props = NativeControlProps {
            id: control_id.clone(),
            disabled: self.disabled,
            labelled_by: label_id.clone(),
            described_by: description_id.clone(),
        };
        let native = match self.native_control {
            Some(render) => render(props),
            None => {
                log::warn!("switch '{control_id}' has no native control");
                Element::box_().id(control_id.clone())
            }
        };

        if !self.disabled {
            if let Some(on_click) = self.on_click {
                cx.registry()
                    .on(&control_id, "click", move |_| on_click());
            }
        }

        let config = cx.config();
        let mut control = Element::box_()
            .id(format!("{control_id}-control"))
            .width(Size::Fixed(config.control_width))
            .height(Size::Fixed(config.control_height));
        if let Some(class) = self.control_class_name {
            control = control.class(class);
        }
        if let Some(styled) = self.styled_control {
            control = control.child(
                styled
                    .id(format!("{control_id}-styled"))
                    .position(Position::Absolute),
            );
        }
        let mut outline = Element::outline(control_id.clone()).id(format!("{control_id}-outline"));
        if let Some(class) = self.outline_class_name {
            outline = outline.class(class);
        }
        control = control.child(native).child(outline);

        let text_disabled = Style::new().foreground(Color::var("text.disabled"));
        let mut content = Element::col()
            .id(format!("{control_id}-content"))
            .class(CONTENT_CLASS);
        if let (Some(label), Some(id)) = (self.label, label_id) {
            content = content.child(
                Element::text(label)
                    .id(id)
                    .class(LABEL_CLASS)
                    .label_for(control_id.clone())
                    .clickable(!self.disabled)
                    .style_disabled(text_disabled.clone()),
            );
        }
        if let (Some(description), Some(id)) = (self.description, description_id) {
            content = content.child(
                Element::text(description)
                    .id(id)
                    .class(DESCRIPTION_CLASS)
                    .label_for(control_id.clone())
                    .clickable(!self.disabled)
                    .style(Style::new().foreground(Color::var("muted")))
                    .style_disabled(text_disabled),
            );
        }

        let mut wrapper = Element::row()
            .id(format!("{control_id}-wrapper"))
            .class(WRAPPER_CLASS)
            .gap(1)
            .children(vec![control, content]);
        if let Some(class) = self.class_name {
            wrapper = wrapper.class(class);
        }
        if self.disabled {
            wrapper = wrapper
                .class(DISABLED_CLASS)
                .disabled(true)
                .aria("aria-disabled", "true");
        }
        wrapper
    }
}
