use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::focus::FocusState;
use crate::layout::{LayoutResult, Rect};
use crate::text::truncate_to_width;
use crate::types::{Color, ColorContext, Rgb, Style};

/// Paint the tree into `buf`. Children paint over their parents, later siblings over earlier ones.
pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext,
    focus: &FocusState,
) {
    let fg = colors.rgb(&Color::var("foreground"));
    render_element(root, layout, buf, colors, focus, fg, false);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext,
    focus: &FocusState,
    inherited_fg: Rgb,
    parent_disabled: bool,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    let disabled = parent_disabled || element.disabled;
    let style = effective_style(element, disabled);

    if let Some(bg) = &style.background {
        fill_background(buf, rect, colors.rgb(bg));
    }
    let fg = style
        .foreground
        .as_ref()
        .map(|c| colors.rgb(c))
        .unwrap_or(inherited_fg);

    match &element.content {
        Content::None | Content::Control(_) => {}
        Content::Text(text) => draw_text(buf, rect, text, fg, style),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, colors, focus, fg, disabled);
            }
        }
        Content::Canvas(graphic) => graphic.paint(rect, buf, colors),
        Content::Outline { control } => {
            if focus.has_focus_ring(control) {
                fill_background(buf, rect, colors.rgb(&Color::var("control.outline")));
            }
        }
    }
}

fn effective_style(element: &Element, disabled: bool) -> &Style {
    if disabled {
        if let Some(style) = &element.style_disabled {
            return style;
        }
    }
    if element.focused {
        if let Some(style) = &element.style_focused {
            return style;
        }
    }
    &element.style
}

fn fill_background(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            buf.set_bg(x, y, bg);
        }
    }
}

fn draw_text(buf: &mut Buffer, rect: Rect, text: &str, fg: Rgb, style: &Style) {
    for (row, line) in text.lines().enumerate().take(usize::from(rect.height)) {
        let line = truncate_to_width(line, usize::from(rect.width));
        let y = rect.y + row as u16;
        let mut x = rect.x;
        for ch in line.chars() {
            let width = buf.put(x, y, ch, fg, style.text_style);
            x = x.saturating_add(width);
        }
    }
}
