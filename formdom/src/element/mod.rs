mod content;
mod node;

pub use content::Content;
pub use node::Element;

pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find_path(root, id).and_then(|mut path| path.pop())
}

/// Find the chain of elements from the root down to `id` (inclusive).
/// Returns None if `id` is not in the tree.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    collect_path(root, id, &mut path).then_some(path)
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    let found = match &element.content {
        Content::Children(children) => children.iter().any(|child| collect_path(child, id, path)),
        _ => false,
    };
    if !found {
        path.pop();
    }
    found
}
