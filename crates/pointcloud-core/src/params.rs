//! Runtime tunables and the control table that edits them.

use std::fmt;

/// Values a user can change while the effect runs.
///
/// A copy is handed to every `Simulation::tick`; frontends only change
/// their copy between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub spring_to_logo: bool,
    pub inverted_colors: bool,
    pub spring_strength: f32,
    pub spring_dampen: f32,
    pub orb_strength: f32,
    pub camera_speed: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            spring_to_logo: true,
            inverted_colors: false,
            spring_strength: 2.0,
            spring_dampen: 9.5,
            orb_strength: 1000.0,
            camera_speed: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    SpringToLogo,
    InvertedColors,
    SpringStrength,
    SpringDampen,
    OrbStrength,
    CameraSpeed,
}

/// Label and slider range for a control. Toggles carry a 0..1 range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::SpringToLogo,
        Control::InvertedColors,
        Control::SpringStrength,
        Control::SpringDampen,
        Control::OrbStrength,
        Control::CameraSpeed,
    ];

    pub fn spec(self) -> ControlSpec {
        let (label, min, max, step) = match self {
            Control::SpringToLogo => ("Maintain Logo", 0.0, 1.0, 1.0),
            Control::InvertedColors => ("Inverted Colors", 0.0, 1.0, 1.0),
            Control::SpringStrength => ("Logo Spring Strength", 1.0, 10.0, 1.0),
            Control::SpringDampen => ("Logo Spring Dampen", 1.0, 9.5, 0.5),
            Control::OrbStrength => ("Orb Strength", 10.0, 2000.0, 10.0),
            Control::CameraSpeed => ("Camera Speed", 0.0, 5.0, 1.0),
        };
        ControlSpec {
            label,
            min,
            max,
            step,
        }
    }

    pub fn is_toggle(self) -> bool {
        matches!(self, Control::SpringToLogo | Control::InvertedColors)
    }
}

impl SimParams {
    pub fn value(&self, control: Control) -> f32 {
        match control {
            Control::SpringToLogo => self.spring_to_logo as u8 as f32,
            Control::InvertedColors => self.inverted_colors as u8 as f32,
            Control::SpringStrength => self.spring_strength,
            Control::SpringDampen => self.spring_dampen,
            Control::OrbStrength => self.orb_strength,
            Control::CameraSpeed => self.camera_speed,
        }
    }

    /// Flip a boolean control. Returns false for slider controls.
    pub fn toggle(&mut self, control: Control) -> bool {
        match control {
            Control::SpringToLogo => self.spring_to_logo = !self.spring_to_logo,
            Control::InvertedColors => self.inverted_colors = !self.inverted_colors,
            _ => return false,
        }
        log::info!("[params] {} -> {}", control.spec().label, self.value(control));
        true
    }

    /// Move a slider by whole steps, clamped to its range and snapped to its
    /// step grid. Toggles flip on any non-zero nudge. Returns whether the
    /// value changed.
    pub fn nudge(&mut self, control: Control, steps: i32) -> bool {
        if steps == 0 {
            return false;
        }
        let spec = control.spec();
        let slot = match control {
            Control::SpringStrength => &mut self.spring_strength,
            Control::SpringDampen => &mut self.spring_dampen,
            Control::OrbStrength => &mut self.orb_strength,
            Control::CameraSpeed => &mut self.camera_speed,
            Control::SpringToLogo | Control::InvertedColors => return self.toggle(control),
        };
        let current = *slot;
        let raw = current + spec.step * steps as f32;
        let snapped = spec.min + ((raw - spec.min) / spec.step).round() * spec.step;
        let next = snapped.clamp(spec.min, spec.max);
        if (next - current).abs() < f32::EPSILON {
            return false;
        }
        *slot = next;
        log::info!("[params] {} -> {}", spec.label, next);
        true
    }

    /// `(label, formatted value)` rows for an overlay panel.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        Control::ALL
            .iter()
            .map(|&c| {
                let text = if c.is_toggle() {
                    let on = self.value(c) > 0.5;
                    (if on { "on" } else { "off" }).to_string()
                } else if c.spec().step < 1.0 {
                    format!("{:.1}", self.value(c))
                } else {
                    format!("{:.0}", self.value(c))
                };
                (c.spec().label, text)
            })
            .collect()
    }
}

impl fmt::Display for SimParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.summary();
        for (i, (label, value)) in rows.iter().enumerate() {
            if i > 0 {
                write!(f, " • ")?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
