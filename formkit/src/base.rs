//! Instrumentation shared by every public component.

use std::collections::BTreeMap;

use formdom::Element;

/// Data attribute carrying the component name on its root element.
pub const COMPONENT_ATTRIBUTE: &str = "component";

/// Props every public component accepts on top of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseComponentProps {
    pub class_name: Option<String>,
    /// Instrumentation attributes, written to the root as `data-*`.
    pub data: BTreeMap<String, String>,
}

impl BaseComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Add an instrumentation attribute. A leading `data-` is stripped.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.strip_prefix("data-").map(str::to_string).unwrap_or(key);
        self.data.insert(key, value.into());
        self
    }

    /// Spread these props onto a component root.
    pub fn apply(&self, mut root: Element) -> Element {
        if let Some(class) = &self.class_name {
            root = root.class(class.clone());
        }
        for (key, value) in &self.data {
            root = root.data(key.clone(), value.clone());
        }
        root
    }
}

/// What [`use_base_component`] hands back to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseComponent {
    pub name: &'static str,
    pub props: BaseComponentProps,
}

impl BaseComponent {
    /// Mark `root` as this component's root and spread the caller's props on it.
    pub fn root(&self, root: Element) -> Element {
        self.props
            .apply(root)
            .data(COMPONENT_ATTRIBUTE, self.name)
    }
}

/// Register one render of the public component `name`.
pub fn use_base_component(name: &'static str, props: &BaseComponentProps) -> BaseComponent {
    log::trace!("render {name} ({} data attributes)", props.data.len());
    BaseComponent {
        name,
        props: props.clone(),
    }
}

/// A component with a stable display name.
pub trait Component {
    const DISPLAY_NAME: &'static str;
}

/// Tag `element` with the display name of `C`.
pub fn apply_display_name<C: Component>(element: Element) -> Element {
    element.data("display-name", C::DISPLAY_NAME)
}
