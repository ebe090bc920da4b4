use crate::canvas::Graphic;
use crate::control::NativeControl;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// A platform checkable input. Invisible; it only carries focus and selection semantics.
    Control(NativeControl),
    /// Owner-drawn vector graphic, rasterized to braille cells.
    Canvas(Graphic),
    /// Focus ring for the control with the given id. Painted only while that
    /// control holds keyboard-visible focus.
    Outline { control: String },
}
