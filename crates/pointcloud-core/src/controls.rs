use crate::params::{Control, SimParams};

/// What a key press does to the tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Toggle(Control),
    Nudge(Control, i32),
    ResetDefaults,
    ToggleOverlay,
}

/// Shared key map. `key` uses DOM `KeyboardEvent.key` names.
#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    use KeyAction::*;
    let action = match key {
        "m" | "M" => Toggle(Control::SpringToLogo),
        "i" | "I" => Toggle(Control::InvertedColors),
        "q" | "Q" => Nudge(Control::SpringStrength, -1),
        "w" | "W" => Nudge(Control::SpringStrength, 1),
        "a" | "A" => Nudge(Control::SpringDampen, -1),
        "s" | "S" => Nudge(Control::SpringDampen, 1),
        "z" | "Z" => Nudge(Control::OrbStrength, -10),
        "x" | "X" => Nudge(Control::OrbStrength, 10),
        "ArrowLeft" => Nudge(Control::CameraSpeed, -1),
        "ArrowRight" => Nudge(Control::CameraSpeed, 1),
        "0" => ResetDefaults,
        "h" | "H" => ToggleOverlay,
        _ => return None,
    };
    Some(action)
}

/// Apply a key action. Returns whether the tunables changed.
pub fn apply(params: &mut SimParams, action: KeyAction) -> bool {
    match action {
        KeyAction::Toggle(c) => params.toggle(c),
        KeyAction::Nudge(c, steps) => params.nudge(c, steps),
        KeyAction::ResetDefaults => {
            let changed = *params != SimParams::default();
            *params = SimParams::default();
            log::info!("[params] reset to defaults");
            changed
        }
        KeyAction::ToggleOverlay => false,
    }
}
