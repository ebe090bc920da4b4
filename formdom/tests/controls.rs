use formdom::{ControlKind, DomError, NativeControl, NativeInputs};

fn group(checked: Option<&str>) -> NativeInputs {
    let mut inputs = NativeInputs::new();
    inputs.commit(["a", "b", "c"].into_iter().map(|v| {
        (
            v.to_string(),
            NativeControl::radio("size", v).checked(checked == Some(v)),
        )
    }));
    inputs
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_control_constructors() {
    let radio = NativeControl::radio("size", "m").checked(true);
    assert_eq!(radio.kind, ControlKind::Radio);
    assert_eq!(radio.name.as_deref(), Some("size"));
    assert!(radio.is_radio());
    assert!(radio.checked);

    let checkbox = NativeControl::checkbox("agree");
    assert_eq!(checkbox.kind, ControlKind::Checkbox);
    assert_eq!(checkbox.name, None);
    assert!(!checkbox.checked);
}

#[test]
fn test_commit_forces_checked_flag() {
    let inputs = group(Some("b"));
    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs.is_checked("a"), Some(false));
    assert_eq!(inputs.is_checked("b"), Some(true));
    assert_eq!(inputs.is_checked("missing"), None);
}

// ============================================================================
// Default actions
// ============================================================================

#[test]
fn test_radio_activation_unchecks_siblings() {
    let mut inputs = group(Some("a"));

    assert_eq!(inputs.activate("c"), Ok(true));
    assert_eq!(inputs.checked_in_group("size"), vec!["c"]);
}

#[test]
fn test_activating_checked_radio_reports_no_change() {
    let mut inputs = group(Some("a"));
    assert_eq!(inputs.activate("a"), Ok(false));
    assert_eq!(inputs.is_checked("a"), Some(true));
}

#[test]
fn test_radios_in_other_groups_are_untouched() {
    let mut inputs = NativeInputs::new();
    inputs.commit(vec![
        ("x1".to_string(), NativeControl::radio("x", "1").checked(true)),
        ("y1".to_string(), NativeControl::radio("y", "1").checked(true)),
        ("y2".to_string(), NativeControl::radio("y", "2")),
    ]);

    inputs.activate("y2").unwrap();
    assert_eq!(inputs.is_checked("x1"), Some(true));
    assert_eq!(inputs.is_checked("y1"), Some(false));
    assert_eq!(inputs.group("y"), vec!["y1", "y2"]);
}

#[test]
fn test_checkbox_toggles() {
    let mut inputs = NativeInputs::new();
    inputs.commit(vec![("agree".to_string(), NativeControl::checkbox("yes"))]);

    assert_eq!(inputs.activate("agree"), Ok(true));
    assert_eq!(inputs.is_checked("agree"), Some(true));
    assert_eq!(inputs.activate("agree"), Ok(true));
    assert_eq!(inputs.is_checked("agree"), Some(false));
}

#[test]
fn test_activate_unknown_is_error() {
    let mut inputs = group(None);
    assert_eq!(
        inputs.activate("nope"),
        Err(DomError::NotAControl("nope".to_string()))
    );
}

// ============================================================================
// Controlled restore
// ============================================================================

#[test]
fn test_restore_controlled_undoes_self_toggle() {
    let mut inputs = group(Some("a"));
    inputs.activate("b").unwrap();

    let mut restored = inputs.restore_controlled();
    restored.sort();
    assert_eq!(restored, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(inputs.checked_in_group("size"), vec!["a"]);
}

#[test]
fn test_restore_controlled_is_noop_when_in_sync() {
    let mut inputs = group(None);
    assert!(inputs.restore_controlled().is_empty());
    assert!(inputs.checked_in_group("size").is_empty());
}
