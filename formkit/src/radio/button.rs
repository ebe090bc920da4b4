use formdom::{Element, NativeControl, NodeRef, merge_refs};

use super::styles::{
    CONTROL_CLASS, HAS_DESCRIPTION_CLASS, OUTLINE_CLASS, RADIO_CLASS, VisualState, styled_control,
};
use super::{ChangeDetail, RadioButtonDefinition, RadioValue};
use crate::base::{Component, apply_display_name};
use crate::context::RenderContext;
use crate::events::{NonCancelableEventHandler, fire_non_cancelable_event};
use crate::switch::{AbstractSwitch, NativeControlProps};
use crate::visual_mode::use_visual_refresh;

/// One option of a radio group.
///
/// The native input always carries `checked` as given. Its own change event
/// is swallowed; the click handler decides whether to notify.
pub struct RadioButton<T: RadioValue> {
    name: String,
    definition: RadioButtonDefinition<T>,
    checked: bool,
    on_change: Option<NonCancelableEventHandler<ChangeDetail<T>>>,
    node_ref: Option<NodeRef>,
}

impl<T: RadioValue> Component for RadioButton<T> {
    const DISPLAY_NAME: &'static str = "RadioButton";
}

impl<T: RadioValue> RadioButton<T> {
    pub fn new(name: impl Into<String>, definition: RadioButtonDefinition<T>, checked: bool) -> Self {
        Self {
            name: name.into(),
            definition,
            checked,
            on_change: None,
            node_ref: None,
        }
    }

    pub fn on_change(mut self, handler: Option<NonCancelableEventHandler<ChangeDetail<T>>>) -> Self {
        self.on_change = handler;
        self
    }

    /// Also receive the native input's handle in `node_ref`.
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn build(self, cx: &RenderContext) -> Element {
        let Self {
            name,
            definition,
            checked,
            on_change,
            node_ref,
        } = self;
        let RadioButtonDefinition {
            value,
            label,
            description,
            disabled,
            control_id,
        } = definition;

        let state = VisualState {
            checked,
            disabled,
            refresh: use_visual_refresh(cx),
        };
        let has_description = description.is_some();

        let own_ref = NodeRef::new();
        let input_ref = merge_refs([Some(own_ref.clone()), node_ref]);

        let registry = cx.registry().clone();
        let native_value = value.as_ref().to_string();
        let native = move |props: NativeControlProps| {
            registry.on(&props.id, "change", |_| {});
            props
                .apply(Element::control(
                    NativeControl::radio(name, native_value).checked(checked),
                ))
                .node_ref(input_ref)
        };

        let on_click = move || {
            if let Err(err) = own_ref.focus() {
                log::warn!("could not focus radio '{}': {err}", value.as_ref());
            }
            if checked {
                return;
            }
            log::debug!("radio '{}' selected", value.as_ref());
            fire_non_cancelable_event(on_change.as_ref(), ChangeDetail {
                value: value.clone(),
            });
        };

        let element = AbstractSwitch::new()
            .class_name(RADIO_CLASS)
            .control_class_name(CONTROL_CLASS)
            .outline_class_name(OUTLINE_CLASS)
            .label(label)
            .description(description)
            .disabled(disabled)
            .control_id(control_id)
            .native_control(native)
            .styled_control(styled_control(&state, cx.config().glyphs))
            .on_click(on_click)
            .build(cx);

        let element = if has_description {
            element.class(HAS_DESCRIPTION_CLASS)
        } else {
            element
        };
        apply_display_name::<Self>(element)
    }
}
