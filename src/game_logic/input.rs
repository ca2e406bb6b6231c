use bevy::prelude::*;

/// Physical key bound to each driving action
#[derive(Clone, Debug)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    /// Switches which start line crossings count as laps
    pub toggle_crossing_rule: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::ArrowUp,
            backward: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            toggle_crossing_rule: KeyCode::KeyG,
        }
    }
}

/// Driving actions for a single tick, read from the held keys
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DriveInput {
    pub fn from_keys(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Self {
        Self {
            forward: keys.pressed(bindings.forward),
            backward: keys.pressed(bindings.backward),
            left: keys.pressed(bindings.left),
            right: keys.pressed(bindings.right),
        }
    }
}
