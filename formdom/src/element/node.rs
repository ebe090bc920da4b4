use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Content;
use crate::canvas::Graphic;
use crate::control::NativeControl;
use crate::refs::{ElementRef, RefTarget};
use crate::types::{Direction, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Auto-generated ids are `{kind}-{n}`; components that need stable ids set their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    /// Presentation class names, kept for inspection and tests.
    pub classes: Vec<String>,
    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub direction: Direction,
    pub gap: u16,
    pub position: Position,

    pub style: Style,
    pub style_focused: Option<Style>,
    pub style_disabled: Option<Style>,

    pub focusable: bool,
    pub clickable: bool,
    /// Clicks on this element or its descendants activate the control with this id.
    pub label_for: Option<String>,
    /// Written by the document on commit.
    pub focused: bool,
    /// Also disables every descendant.
    pub disabled: bool,

    /// `role` and `aria-*` attributes.
    pub aria: BTreeMap<String, String>,
    pub data: BTreeMap<String, String>,
    /// Written with this node's handle on mount.
    pub node_ref: Option<ElementRef>,
}

impl Element {
    fn fresh(kind: &str, content: Content) -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("{kind}-{n}"),
            classes: Vec::new(),
            content,
            width: Size::Auto,
            height: Size::Auto,
            direction: Direction::Column,
            gap: 0,
            position: Position::Static,
            style: Style::default(),
            style_focused: None,
            style_disabled: None,
            focusable: false,
            clickable: false,
            label_for: None,
            focused: false,
            disabled: false,
            aria: BTreeMap::new(),
            data: BTreeMap::new(),
            node_ref: None,
        }
    }

    pub fn box_() -> Self {
        Self::fresh("box", Content::None)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::fresh("text", Content::Text(content.into()))
    }

    pub fn col() -> Self {
        Self::fresh("col", Content::None)
    }

    pub fn row() -> Self {
        Self::fresh("row", Content::None).direction(Direction::Row)
    }

    /// A native checkable input. Focusable and clickable unless disabled later.
    pub fn control(control: NativeControl) -> Self {
        Self {
            position: Position::Absolute,
            focusable: true,
            clickable: true,
            ..Self::fresh("input", Content::Control(control))
        }
    }

    pub fn canvas(graphic: Graphic) -> Self {
        Self::fresh("canvas", Content::Canvas(graphic))
    }

    /// Focus ring overlay for the control `control_id`.
    pub fn outline(control_id: impl Into<String>) -> Self {
        let control = control_id.into();
        Self::fresh("outline", Content::Outline { control }).position(Position::Absolute)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn label_for(mut self, control_id: impl Into<String>) -> Self {
        self.label_for = Some(control_id.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn aria(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.aria.insert(key.into(), value.into());
        self
    }

    pub fn get_aria(&self, key: &str) -> Option<&String> {
        self.aria.get(key)
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn node_ref(mut self, target: impl RefTarget + 'static) -> Self {
        self.node_ref = Some(ElementRef::new(Arc::new(target)));
        self
    }

    /// The native control carried by this element, if any.
    pub fn native_control(&self) -> Option<&NativeControl> {
        match &self.content {
            Content::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
