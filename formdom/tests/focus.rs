use formdom::{collect_focusable, Element, FocusState, NativeControl};

fn radio(id: &str, checked: bool) -> Element {
    Element::control(NativeControl::radio("size", id).checked(checked)).id(id)
}

fn form(checked: Option<&str>) -> Element {
    Element::col().id("root").children(vec![
        Element::box_().id("before").focusable(true),
        radio("s", checked == Some("s")),
        radio("m", checked == Some("m")),
        radio("l", checked == Some("l")),
        Element::box_().id("after").focusable(true),
    ])
}

// ============================================================================
// Collecting
// ============================================================================

#[test]
fn test_collect_focusable_in_document_order() {
    assert_eq!(
        collect_focusable(&form(None)),
        vec!["before", "s", "m", "l", "after"]
    );
}

#[test]
fn test_collect_focusable_skips_disabled_subtrees() {
    let root = Element::col().id("root").children(vec![
        Element::box_().id("a").focusable(true).disabled(true),
        Element::box_()
            .id("wrap")
            .disabled(true)
            .child(Element::box_().id("inner").focusable(true)),
        Element::box_().id("b").focusable(true),
    ]);
    assert_eq!(collect_focusable(&root), vec!["b"]);
}

// ============================================================================
// Tab order
// ============================================================================

#[test]
fn test_tab_visits_checked_radio_once() {
    let root = form(Some("m"));
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("before".to_string()));
    assert_eq!(focus.focus_next(&root), Some("m".to_string()));
    assert_eq!(focus.focus_next(&root), Some("after".to_string()));
    assert_eq!(focus.focus_next(&root), Some("before".to_string()));
}

#[test]
fn test_tab_lands_on_first_radio_without_selection() {
    let root = form(None);
    let mut focus = FocusState::new();
    focus.focus("before");

    assert_eq!(focus.focus_next(&root), Some("s".to_string()));
}

#[test]
fn test_shift_tab_leaves_group() {
    let root = form(Some("l"));
    let mut focus = FocusState::new();
    focus.focus("after");

    assert_eq!(focus.focus_prev(&root), Some("l".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("before".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("after".to_string()));
}

#[test]
fn test_tab_leaves_group_from_unchecked_member() {
    let root = form(Some("l"));
    let mut focus = FocusState::new();
    focus.focus("s");

    assert_eq!(focus.focus_next(&root), Some("after".to_string()));
}

#[test]
fn test_tab_with_nothing_focusable() {
    let root = Element::col().id("root").child(Element::text("hi"));
    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Focus ring
// ============================================================================

#[test]
fn test_ring_follows_modality() {
    let mut focus = FocusState::new();

    assert!(focus.focus("a"));
    assert!(!focus.is_visible());

    focus.set_keyboard_modality(true);
    assert!(focus.focus("b"));
    assert!(focus.is_visible());
    assert!(focus.has_focus_ring("b"));
    assert!(!focus.has_focus_ring("a"));
}

#[test]
fn test_refocusing_same_element_updates_ring() {
    let mut focus = FocusState::new();
    focus.focus("a");
    focus.set_keyboard_modality(true);

    assert!(!focus.focus("a"));
    assert!(focus.has_focus_ring("a"));
}

#[test]
fn test_tab_focus_is_visible() {
    let root = form(None);
    let mut focus = FocusState::new();
    focus.focus_next(&root);
    assert!(focus.is_visible());
}

#[test]
fn test_blur_clears_focus_and_ring() {
    let mut focus = FocusState::new();
    focus.focus_visible("a");

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.is_visible());
    assert!(!focus.blur());
}
