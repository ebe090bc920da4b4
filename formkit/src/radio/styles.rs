//! Radio visuals: class names, circle geometry and state colors.
//!
//! The drawn control is two concentric circles in a 100×100 view box. The
//! border ring is always drawn; the fill ring only when checked. Nothing
//! here depends on the native input's internal flag, only on props.

use formdom::{Circle, Color, Element, Graphic, Style};

use crate::config::ControlGlyphs;

pub const RADIO_CLASS: &str = "radio";
pub const HAS_DESCRIPTION_CLASS: &str = "radio--has-description";
pub const CONTROL_CLASS: &str = "radio-control";
pub const OUTLINE_CLASS: &str = "outline";
pub const GROUP_CLASS: &str = "radio-group";
pub const HORIZONTAL_CLASS: &str = "radio-group--horizontal";

pub const VIEW_BOX: f32 = 100.0;
pub const CENTER: f32 = 50.0;

/// Stroke width and radius of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub stroke_width: f32,
    pub radius: f32,
}

pub const CLASSIC_BORDER: Ring = Ring {
    stroke_width: 8.0,
    radius: 46.0,
};

/// Heavier border of the refreshed visuals; the outer edge stays at 50.
pub const REFRESH_BORDER: Ring = Ring {
    stroke_width: 12.0,
    radius: 44.0,
};

pub const FILL: Ring = Ring {
    stroke_width: 30.0,
    radius: 35.0,
};

/// Everything the drawn control depends on, derived from props each render.
///
/// The focus ring is not part of it: the document draws the outline from its
/// own focus state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub checked: bool,
    pub disabled: bool,
    pub refresh: bool,
}

pub fn border_ring(refresh: bool) -> Ring {
    if refresh { REFRESH_BORDER } else { CLASSIC_BORDER }
}

pub fn border_color(state: &VisualState) -> Color {
    if state.disabled {
        Color::var("control.disabled")
    } else {
        Color::var("control.border")
    }
}

/// `None` while unchecked: the fill ring is transparent.
pub fn fill_color(state: &VisualState) -> Option<Color> {
    match (state.checked, state.disabled) {
        (false, _) => None,
        (true, true) => Some(Color::var("control.disabled")),
        (true, false) => Some(Color::var("control.checked")),
    }
}

/// The two rings for `state`, border first.
pub fn styled_circles(state: &VisualState) -> Graphic {
    let border = border_ring(state.refresh);
    Graphic::new(VIEW_BOX, VIEW_BOX)
        .circle(
            Circle::new(CENTER, CENTER, border.radius)
                .stroke_width(border.stroke_width)
                .stroke(Some(border_color(state))),
        )
        .circle(
            Circle::new(CENTER, CENTER, FILL.radius)
                .stroke_width(FILL.stroke_width)
                .stroke(fill_color(state)),
        )
}

/// The drawn control element for the configured glyph style.
pub fn styled_control(state: &VisualState, glyphs: ControlGlyphs) -> Element {
    match glyphs {
        ControlGlyphs::Braille => Element::canvas(styled_circles(state)),
        ControlGlyphs::Symbols { checked, unchecked } => {
            let glyph = if state.checked { checked } else { unchecked };
            let color = fill_color(state).unwrap_or_else(|| border_color(state));
            Element::text(glyph.to_string()).style(Style::new().foreground(color))
        }
    }
}
