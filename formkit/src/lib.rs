//! Form controls built on [`formdom`].
//!
//! Components are plain builders rendered once per frame into a
//! [`formdom::Element`] tree. Handlers registered while rendering are
//! collected in the frame's [`RenderContext`] and committed to the document
//! together with the tree.

pub mod base;
pub mod config;
pub mod context;
pub mod events;
pub mod id;
pub mod radio;
pub mod switch;
pub mod visual_mode;

pub use context::RenderContext;

pub mod prelude {
    pub use crate::base::{BaseComponentProps, Component, apply_display_name, use_base_component};
    pub use crate::config::{ControlGlyphs, FormConfig};
    pub use crate::context::RenderContext;
    pub use crate::events::{
        NonCancelableCustomEvent, NonCancelableEventHandler, fire_non_cancelable_event,
    };
    pub use crate::id::use_unique_id;
    pub use crate::radio::{
        ChangeDetail, RadioButton, RadioButtonDefinition, RadioGroup, RadioGroupDirection,
        RadioGroupError, RadioGroupRef, RadioValue, validate_unique_values,
    };
    pub use crate::switch::{AbstractSwitch, NativeControlProps};
    pub use crate::visual_mode::{VisualMode, VisualModeSignal, use_visual_refresh};
}
