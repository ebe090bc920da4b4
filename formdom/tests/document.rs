use std::sync::{Arc, Mutex};

use formdom::{
    Buffer, Document, DomError, Element, Event, HandlerRegistry, Key, Modifiers, NativeControl,
    NodeRef, Rect, Size,
};

type Log = Arc<Mutex<Vec<String>>>;

fn radio(id: &str, checked: Option<&str>) -> Element {
    Element::control(NativeControl::radio("size", id).checked(checked == Some(id))).id(id)
}

fn radios(checked: Option<&str>) -> Element {
    Element::col().id("root").children(vec![
        radio("a", checked),
        radio("b", checked),
        radio("c", checked),
        Element::text("Label B").id("label-b").clickable(true).label_for("b"),
    ])
}

/// Record every click and change on the radios and the root.
fn recording_registry(log: &Log) -> HandlerRegistry {
    let registry = HandlerRegistry::new();
    for id in ["a", "b", "c", "root"] {
        for name in ["click", "change"] {
            let log = log.clone();
            registry.on(id, name, move |cx| {
                log.lock().unwrap().push(format!("{name}:{}", cx.current_target));
            });
        }
    }
    registry
}

fn mounted(root: Element) -> (Document, Log) {
    let log: Log = Arc::default();
    let mut doc = Document::new();
    doc.commit(root, recording_registry(&log));
    (doc, log)
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_click_unchecked_radio_fires_click_then_change() {
    let (mut doc, log) = mounted(radios(Some("a")));

    assert!(doc.dispatch(&Event::click("b")));
    assert_eq!(entries(&log), vec!["click:b", "click:root", "change:b"]);
}

#[test]
fn test_checked_flag_restored_after_dispatch() {
    let (mut doc, _log) = mounted(radios(Some("a")));

    doc.dispatch(&Event::click("b"));
    assert_eq!(doc.is_checked("a"), Some(true));
    assert_eq!(doc.is_checked("b"), Some(false));
    assert_eq!(doc.checked_in_group("size"), vec!["a".to_string()]);
}

#[test]
fn test_recommit_moves_checked_flag() {
    let (mut doc, log) = mounted(radios(Some("a")));
    doc.dispatch(&Event::click("b"));

    doc.commit(radios(Some("b")), recording_registry(&log));
    assert_eq!(doc.is_checked("a"), Some(false));
    assert_eq!(doc.is_checked("b"), Some(true));
}

#[test]
fn test_click_checked_radio_has_no_change() {
    let (mut doc, log) = mounted(radios(Some("a")));

    doc.dispatch(&Event::click("a"));
    assert_eq!(entries(&log), vec!["click:a", "click:root"]);
}

#[test]
fn test_label_click_activates_its_control() {
    let (mut doc, log) = mounted(radios(None));

    doc.dispatch(&Event::click("label-b"));
    assert_eq!(entries(&log), vec!["click:b", "click:root", "change:b"]);
}

#[test]
fn test_disabled_control_ignores_clicks() {
    let root = Element::col()
        .id("root")
        .child(radio("a", None).disabled(true));
    let (mut doc, log) = mounted(root);

    assert!(!doc.dispatch(&Event::click("a")));
    assert!(entries(&log).is_empty());
    assert_eq!(doc.is_checked("a"), Some(false));
}

#[test]
fn test_disabled_ancestor_ignores_clicks() {
    let root = Element::col().id("root").child(
        Element::box_()
            .id("wrap")
            .disabled(true)
            .child(radio("a", None)),
    );
    let (mut doc, log) = mounted(root);

    assert!(!doc.dispatch(&Event::click("a")));
    assert!(entries(&log).is_empty());
}

#[test]
fn test_label_for_disabled_control_does_nothing() {
    let root = Element::col().id("root").children(vec![
        radio("a", None).disabled(true),
        Element::text("A").id("label-a").clickable(true).label_for("a"),
    ]);
    let (mut doc, log) = mounted(root);

    assert!(!doc.dispatch(&Event::click("label-a")));
    assert!(entries(&log).is_empty());
}

#[test]
fn test_click_unknown_element() {
    let (mut doc, log) = mounted(radios(None));
    assert!(!doc.dispatch(&Event::click("ghost")));
    assert!(entries(&log).is_empty());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_tab_focuses_checked_radio_with_ring() {
    let (mut doc, _log) = mounted(radios(Some("b")));

    doc.dispatch(&Event::key(Key::Tab));
    assert_eq!(doc.focused().as_deref(), Some("b"));
    assert!(doc.focus_visible());
}

#[test]
fn test_arrow_moves_selection_within_group() {
    let (mut doc, log) = mounted(radios(Some("a")));
    doc.dispatch(&Event::key(Key::Tab));

    doc.dispatch(&Event::key(Key::Down));
    assert_eq!(doc.focused().as_deref(), Some("b"));
    assert!(entries(&log).contains(&"change:b".to_string()));
}

#[test]
fn test_arrow_wraps_and_skips_disabled() {
    let root = Element::col().id("root").children(vec![
        radio("a", Some("a")),
        radio("b", Some("a")).disabled(true),
        radio("c", Some("a")),
    ]);
    let (mut doc, log) = mounted(root);
    doc.dispatch(&Event::key(Key::Tab));

    doc.dispatch(&Event::key(Key::Right));
    assert_eq!(doc.focused().as_deref(), Some("c"));

    doc.dispatch(&Event::key(Key::Down));
    assert_eq!(doc.focused().as_deref(), Some("a"));
    assert!(!entries(&log).iter().any(|e| e.ends_with(":b")));
}

#[test]
fn test_arrow_up_wraps_backwards() {
    let (mut doc, _log) = mounted(radios(Some("a")));
    doc.dispatch(&Event::key(Key::Tab));

    doc.dispatch(&Event::key(Key::Up));
    assert_eq!(doc.focused().as_deref(), Some("c"));
}

#[test]
fn test_space_activates_focused_control() {
    let (mut doc, log) = mounted(radios(None));
    doc.dispatch(&Event::key(Key::Tab));

    doc.dispatch(&Event::key(Key::Char(' ')));
    assert_eq!(entries(&log), vec!["click:a", "click:root", "change:a"]);
}

#[test]
fn test_shift_tab_wraps_to_last_stop() {
    let root = Element::col().id("root").children(vec![
        Element::box_().id("first").focusable(true),
        Element::box_().id("last").focusable(true),
    ]);
    let (mut doc, _log) = mounted(root);

    doc.dispatch(&Event::Key {
        target: None,
        key: Key::Tab,
        modifiers: Modifiers::shift(),
    });
    assert_eq!(doc.focused().as_deref(), Some("last"));
}

#[test]
fn test_focus_and_blur_handlers_fire_on_tab() {
    let log: Log = Arc::default();
    let registry = HandlerRegistry::new();
    for id in ["x", "y"] {
        for name in ["focus", "blur"] {
            let log = log.clone();
            registry.on(id, name, move |cx| {
                log.lock().unwrap().push(format!("{name}:{}", cx.current_target));
            });
        }
    }
    let root = Element::col().id("root").children(vec![
        Element::box_().id("x").focusable(true),
        Element::box_().id("y").focusable(true),
    ]);
    let mut doc = Document::new();
    doc.commit(root, registry);

    doc.dispatch(&Event::key(Key::Tab));
    doc.dispatch(&Event::key(Key::Tab));
    assert_eq!(entries(&log), vec!["focus:x", "blur:x", "focus:y"]);
}

// ============================================================================
// Refs and handles
// ============================================================================

#[test]
fn test_ref_attached_on_commit() {
    let node_ref = NodeRef::new();
    let root = Element::col()
        .id("root")
        .child(radio("a", None).node_ref(node_ref.clone()));
    let (_doc, _log) = mounted(root);

    let handle = node_ref.current().unwrap();
    assert_eq!(handle.id(), "a");
    assert!(handle.is_mounted());
    assert_eq!(handle.is_checked(), Ok(false));
    assert_eq!(handle.is_disabled(), Ok(false));
}

#[test]
fn test_ref_detached_when_node_leaves() {
    let node_ref = NodeRef::new();
    let root = Element::col()
        .id("root")
        .child(radio("a", None).node_ref(node_ref.clone()));
    let (mut doc, log) = mounted(root);
    let handle = node_ref.current().unwrap();

    doc.commit(Element::col().id("root"), recording_registry(&log));
    assert!(!node_ref.is_attached());
    assert!(!handle.is_mounted());
    assert_eq!(handle.focus(), Err(DomError::Detached("a".to_string())));
}

#[test]
fn test_programmatic_focus_inherits_modality() {
    let node_ref = NodeRef::new();
    let root = radios(None).child(
        Element::box_()
            .id("other")
            .focusable(true)
            .node_ref(node_ref.clone()),
    );
    let (mut doc, _log) = mounted(root);

    doc.dispatch(&Event::click("a"));
    assert_eq!(node_ref.focus(), Ok(true));
    assert_eq!(doc.focused().as_deref(), Some("other"));
    assert!(!doc.focus_visible());

    doc.dispatch(&Event::key(Key::Escape));
    doc.handle("a").unwrap().focus().unwrap();
    assert!(doc.focus_visible());
}

#[test]
fn test_disabled_node_refuses_focus() {
    let root = Element::col()
        .id("root")
        .child(radio("a", None).disabled(true));
    let (doc, _log) = mounted(root);

    assert_eq!(doc.handle("a").unwrap().focus(), Ok(false));
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_handle_unknown_element() {
    let (doc, _log) = mounted(radios(None));
    assert_eq!(
        doc.handle("ghost").unwrap_err(),
        DomError::UnknownElement("ghost".to_string())
    );
}

#[test]
fn test_commit_drops_focus_from_removed_node() {
    let (mut doc, log) = mounted(radios(None));
    doc.dispatch(&Event::key(Key::Tab));
    assert_eq!(doc.focused().as_deref(), Some("a"));

    doc.commit(Element::col().id("root"), recording_registry(&log));
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_commit_marks_focused_element() {
    let (mut doc, log) = mounted(radios(None));
    doc.dispatch(&Event::key(Key::Tab));

    doc.commit(radios(None), recording_registry(&log));
    assert!(doc.find("a").unwrap().focused);
    assert!(!doc.find("b").unwrap().focused);
}

// ============================================================================
// Rendering and pointer input
// ============================================================================

fn labelled_control() -> Element {
    Element::row().id("root").children(vec![
        Element::box_()
            .id("wrap")
            .width(Size::Fixed(2))
            .height(Size::Fixed(1))
            .child(radio("a", None)),
        Element::text("Alpha").id("label").clickable(true).label_for("a"),
    ])
}

#[test]
fn test_render_draws_label_text() {
    let (mut doc, _log) = mounted(labelled_control());
    let mut buf = Buffer::new(10, 1);

    doc.render(&mut buf);
    assert_eq!(buf.row_text(0), "  Alpha   ");
}

#[test]
fn test_pointer_click_hits_control_and_label() {
    let (mut doc, log) = mounted(labelled_control());
    doc.layout(Rect::from_size(10, 1));

    doc.dispatch(&Event::click_at(0, 0));
    doc.dispatch(&Event::click_at(3, 0));
    assert_eq!(
        entries(&log),
        vec!["click:a", "click:root", "change:a", "click:a", "click:root", "change:a"]
    );
}

#[test]
fn test_pointer_click_on_empty_space() {
    let (mut doc, log) = mounted(labelled_control());
    doc.layout(Rect::from_size(10, 1));

    assert!(!doc.dispatch(&Event::click_at(9, 0)));
    assert!(entries(&log).is_empty());
}
