use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// The topmost clickable element under (x, y). Later siblings paint over earlier ones.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    if !layout.get(&root.id)?.contains(x, y) {
        return None;
    }

    let from_children = match &root.content {
        Content::Children(children) => children
            .iter()
            .rev()
            .find_map(|child| hit_test(layout, child, x, y)),
        _ => None,
    };

    from_children.or_else(|| root.clickable.then(|| root.id.clone()))
}
