use crate::canvas::Painter;
use crate::game_logic::{
    ACCELERATION, CAR_LENGTH, CAR_WIDTH, DRIFT_FACTOR, DriveInput, FRICTION, MAX_SPEED,
    REVERSE_RATIO, TURN_SPEED,
};
use bevy::prelude::*;

/// Per-tick handling constants for a car
#[derive(Clone, Debug)]
pub struct CarTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    /// Fraction of `acceleration` applied when braking/reversing
    pub reverse_ratio: f32,
    pub turn_speed: f32,
    pub friction: f32,
    pub drift_factor: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            acceleration: ACCELERATION,
            reverse_ratio: REVERSE_RATIO,
            turn_speed: TURN_SPEED,
            friction: FRICTION,
            drift_factor: DRIFT_FACTOR,
        }
    }
}

/// The player's car, in canvas coordinates (y down).
///
/// `speed` is the signed thrust along the heading; `velocity` is what actually
/// moves the car. Velocity accumulates thrust and decays by the drift factor,
/// so the direction of travel lags the heading and the car slides.
#[derive(Clone, Debug)]
pub struct Car {
    pub position: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub velocity: Vec2,
    pub tuning: CarTuning,
    pub color: Color,
}

impl Car {
    pub fn new(position: Vec2) -> Self {
        Self::with_tuning(position, CarTuning::default())
    }

    pub fn with_tuning(position: Vec2, tuning: CarTuning) -> Self {
        Self {
            position,
            angle: 0.0,
            speed: 0.0,
            velocity: Vec2::ZERO,
            tuning,
            color: Color::srgb_u8(0xe6, 0x39, 0x46),
        }
    }

    pub fn forward_vector(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Steering authority, 0 at a standstill up to 1 at top speed
    pub fn turn_influence(&self) -> f32 {
        (self.speed.abs() / self.tuning.max_speed).min(1.0)
    }

    /// Advance one tick
    pub fn update(&mut self, input: &DriveInput) {
        let tuning = &self.tuning;

        if input.forward {
            self.speed += tuning.acceleration;
        }
        if input.backward {
            self.speed -= tuning.acceleration * tuning.reverse_ratio;
        }

        // reverse top speed is half the forward one
        self.speed = self.speed.clamp(-tuning.max_speed / 2.0, tuning.max_speed);

        let turn = tuning.turn_speed * self.turn_influence();
        if input.left {
            self.angle -= turn;
        }
        if input.right {
            self.angle += turn;
        }

        let forward = self.forward_vector();
        self.velocity += forward * self.speed;
        self.velocity *= self.tuning.drift_factor;

        self.position += self.velocity;

        self.speed *= self.tuning.friction;
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        let size = Vec2::new(CAR_LENGTH, CAR_WIDTH);
        painter.save();
        painter.translate(self.position);
        painter.rotate(self.angle);
        painter.fill_rect(-size / 2.0, size, self.color);
        painter.restore();
    }
}
