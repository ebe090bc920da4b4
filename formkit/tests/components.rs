use std::sync::{Arc, Mutex};

use formdom::Element;
use formkit::prelude::*;

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_fire_without_handler() {
    assert!(!fire_non_cancelable_event::<u8>(None, 1));
}

#[test]
fn test_fire_delivers_detail() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let handler: NonCancelableEventHandler<String> =
        Arc::new(move |event: &NonCancelableCustomEvent<String>| {
            event.prevent_default();
            sink.lock().unwrap().push((event.detail.clone(), event.cancelable()));
        });

    assert!(fire_non_cancelable_event(Some(&handler), "b".to_string()));
    assert_eq!(*seen.lock().unwrap(), vec![("b".to_string(), false)]);
}

// ============================================================================
// Visual mode
// ============================================================================

#[test]
fn test_visual_mode_defaults_to_classic() {
    let signal = VisualModeSignal::default();
    assert_eq!(signal.get(), VisualMode::Classic);
    assert!(!use_visual_refresh(&RenderContext::default()));
}

#[test]
fn test_visual_mode_is_shared_between_clones() {
    let signal = VisualModeSignal::new(VisualMode::Classic);
    let cx = RenderContext::new(signal.clone(), FormConfig::default());

    assert_eq!(signal.toggle(), VisualMode::Refresh);
    assert!(use_visual_refresh(&cx));
    assert_eq!(signal.toggle(), VisualMode::Classic);
    assert!(!use_visual_refresh(&cx));
}

// ============================================================================
// Base component
// ============================================================================

struct Widget;

impl Component for Widget {
    const DISPLAY_NAME: &'static str = "Widget";
}

#[test]
fn test_base_component_root() {
    let props = BaseComponentProps::new()
        .class_name("custom")
        .data("data-analytics", "signup")
        .data("plain", "1");
    let base = use_base_component("Widget", &props);
    let root = base.root(Element::box_());

    assert!(root.has_class("custom"));
    assert_eq!(root.get_data("analytics").map(String::as_str), Some("signup"));
    assert_eq!(root.get_data("plain").map(String::as_str), Some("1"));
    assert_eq!(root.get_data("component").map(String::as_str), Some("Widget"));
}

#[test]
fn test_apply_display_name() {
    let el = apply_display_name::<Widget>(Element::box_());
    assert_eq!(el.get_data("display-name").map(String::as_str), Some("Widget"));
}

// ============================================================================
// Ids and config
// ============================================================================

#[test]
fn test_unique_ids() {
    let a = use_unique_id("x-");
    let b = use_unique_id("x-");
    assert_ne!(a, b);
    assert!(a.starts_with("x-"));
    assert_eq!(a.len(), "x-".len() + 32);
}

#[test]
fn test_form_config_builder() {
    let config = FormConfig::new().control_size(0, 3).gap(1);
    assert_eq!((config.control_width, config.control_height), (1, 3));
    assert_eq!(config.gap, 1);
    assert_eq!(config.glyphs, ControlGlyphs::Braille);

    let compact = FormConfig::new().compact();
    assert_eq!((compact.control_width, compact.control_height), (1, 1));
    assert_eq!(
        compact.glyphs,
        ControlGlyphs::Symbols {
            checked: '◉',
            unchecked: '◯'
        }
    );
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_change_detail_json() {
    let detail = ChangeDetail { value: "c".to_string() };
    assert_eq!(serde_json::to_string(&detail).unwrap(), r#"{"value":"c"}"#);
}

#[test]
fn test_definitions_from_json() {
    let json = r#"[
        {"value": "s", "label": "Small"},
        {"value": "l", "label": "Large", "description": "Roomy", "disabled": true}
    ]"#;
    let items: Vec<RadioButtonDefinition<String>> = serde_json::from_str(json).unwrap();

    assert_eq!(items[0], RadioButtonDefinition::new("s".to_string(), "Small"));
    assert_eq!(
        items[1],
        RadioButtonDefinition::new("l".to_string(), "Large")
            .description("Roomy")
            .disabled(true)
    );
    assert_eq!(validate_unique_values(&items), Ok(()));
}
