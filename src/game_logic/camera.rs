use crate::game_logic::CAMERA_SMOOTHNESS;
use bevy::prelude::*;

/// Camera that eases toward its target every tick.
///
/// One-pole low-pass: it never quite reaches the target and, with a
/// smoothness in (0, 1), never passes it.
#[derive(Clone, Debug)]
pub struct FollowCamera {
    pub position: Vec2,
    pub smoothness: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            smoothness: CAMERA_SMOOTHNESS,
        }
    }
}

impl FollowCamera {
    pub fn follow(&mut self, target: Vec2) {
        self.position += (target - self.position) * self.smoothness;
    }
}
