use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Default footprint of a canvas with no fixed size.
const CANVAS_SIZE: (u16, u16) = (2, 1);

/// Lay the tree out inside `available`.
///
/// Flow children stack along their parent's direction with `gap` cells
/// between them. Absolute children are overlays: they take their parent's rect.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(element, available, false, &mut result);
    result
}

fn place(element: &Element, available: Rect, overlay: bool, result: &mut LayoutResult) {
    let rect = if overlay {
        available
    } else {
        let (width, height) = measure(element);
        Rect::new(
            available.x,
            available.y,
            width.min(available.width),
            height.min(available.height),
        )
    };
    if result.insert(element.id.clone(), rect).is_some() {
        log::warn!("duplicate element id '{}' in layout", element.id);
    }

    let Content::Children(children) = &element.content else {
        return;
    };

    let is_row = element.direction == Direction::Row;
    let mut offset = 0u16;
    for child in children {
        if child.position == Position::Absolute {
            place(child, rect, true, result);
            continue;
        }

        let slot = if is_row {
            rect.shrink(0, 0, 0, offset)
        } else {
            rect.shrink(offset, 0, 0, 0)
        };
        place(child, slot, false, result);

        let (cw, ch) = measure(child);
        let advance = if is_row { cw } else { ch };
        offset = offset.saturating_add(advance).saturating_add(element.gap);
    }
}

/// Natural size of an element in cells.
pub fn measure(element: &Element) -> (u16, u16) {
    let (iw, ih) = intrinsic(element);
    let width = match element.width {
        Size::Fixed(w) => w,
        Size::Auto => iw,
    };
    let height = match element.height {
        Size::Fixed(h) => h,
        Size::Auto => ih,
    };
    (width, height)
}

fn intrinsic(element: &Element) -> (u16, u16) {
    match &element.content {
        Content::None | Content::Control(_) | Content::Outline { .. } => (0, 0),
        Content::Text(text) => {
            let width = text.lines().map(display_width).max().unwrap_or(0);
            let height = text.lines().count().max(1);
            (clamp(width), clamp(height))
        }
        Content::Canvas(_) => CANVAS_SIZE,
        Content::Children(children) => {
            let flow: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| c.position != Position::Absolute)
                .map(measure)
                .collect();
            let gaps = element.gap.saturating_mul(clamp(flow.len().saturating_sub(1)));
            if element.direction == Direction::Row {
                let width = flow.iter().fold(0u16, |acc, (w, _)| acc.saturating_add(*w));
                let height = flow.iter().map(|(_, h)| *h).max().unwrap_or(0);
                (width.saturating_add(gaps), height)
            } else {
                let width = flow.iter().map(|(w, _)| *w).max().unwrap_or(0);
                let height = flow.iter().fold(0u16, |acc, (_, h)| acc.saturating_add(*h));
                (width, height.saturating_add(gaps))
            }
        }
    }
}

fn clamp(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
