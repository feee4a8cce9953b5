// Host-side tests for the tunables and the shared key map.

use pointcloud_core::controls::apply;
use pointcloud_core::{action_for_key, Control, KeyAction, SimParams};

#[test]
fn defaults_match_panel_defaults() {
    let p = SimParams::default();
    assert!(p.spring_to_logo);
    assert!(!p.inverted_colors);
    assert_eq!(p.spring_strength, 2.0);
    assert_eq!(p.spring_dampen, 9.5);
    assert_eq!(p.orb_strength, 1000.0);
    assert_eq!(p.camera_speed, 2.0);
}

#[test]
fn defaults_lie_inside_their_ranges() {
    let p = SimParams::default();
    for c in Control::ALL {
        let spec = c.spec();
        let v = p.value(c);
        assert!(v >= spec.min && v <= spec.max, "{} = {v}", spec.label);
    }
}

#[test]
fn nudge_clamps_to_range() {
    let mut p = SimParams::default();
    assert!(!p.nudge(Control::SpringDampen, 1));
    assert_eq!(p.spring_dampen, 9.5);
    assert!(p.nudge(Control::SpringDampen, -3));
    assert_eq!(p.spring_dampen, 8.0);

    assert!(p.nudge(Control::SpringStrength, 100));
    assert_eq!(p.spring_strength, 10.0);
    assert!(p.nudge(Control::CameraSpeed, -100));
    assert_eq!(p.camera_speed, 0.0);
    assert!(!p.nudge(Control::CameraSpeed, -1));
}

#[test]
fn nudge_snaps_to_step_grid() {
    let mut p = SimParams {
        orb_strength: 1003.0,
        ..SimParams::default()
    };
    assert!(p.nudge(Control::OrbStrength, 1));
    assert_eq!(p.orb_strength, 1010.0);
}

#[test]
fn toggles_flip_booleans_only() {
    let mut p = SimParams::default();
    assert!(p.toggle(Control::SpringToLogo));
    assert!(!p.spring_to_logo);
    assert!(p.nudge(Control::InvertedColors, 1));
    assert!(p.inverted_colors);
    assert!(!p.toggle(Control::OrbStrength));
}

#[test]
fn key_map_covers_every_control() {
    let keys = ["m", "i", "q", "w", "a", "s", "z", "x", "ArrowLeft", "ArrowRight"];
    for c in Control::ALL {
        let bound = keys.iter().any(|k| match action_for_key(k) {
            Some(KeyAction::Toggle(t)) => t == c,
            Some(KeyAction::Nudge(n, _)) => n == c,
            _ => false,
        });
        assert!(bound, "no key for {:?}", c);
    }
    assert_eq!(action_for_key("H"), Some(KeyAction::ToggleOverlay));
    assert_eq!(action_for_key("?"), None);
}

#[test]
fn reset_restores_defaults() {
    let mut p = SimParams::default();
    apply(&mut p, KeyAction::Nudge(Control::OrbStrength, -50));
    apply(&mut p, KeyAction::Toggle(Control::InvertedColors));
    assert!(apply(&mut p, KeyAction::ResetDefaults));
    assert_eq!(p, SimParams::default());
    assert!(!apply(&mut p, KeyAction::ResetDefaults));
}

#[test]
fn summary_lists_labels_in_panel_order() {
    let rows = SimParams::default().summary();
    let labels: Vec<_> = rows.iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        vec![
            "Maintain Logo",
            "Inverted Colors",
            "Logo Spring Strength",
            "Logo Spring Dampen",
            "Orb Strength",
            "Camera Speed"
        ]
    );
    assert_eq!(rows[0].1, "on");
    assert_eq!(rows[3].1, "9.5");
    assert!(SimParams::default().to_string().contains("Orb Strength: 1000"));
}
