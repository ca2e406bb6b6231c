use crate::canvas::{Painter, Stroke};
use crate::game_logic::{
    Car, MINIMAP_CAR_RADIUS, MINIMAP_OFFSET, MINIMAP_ROAD_WIDTH, MINIMAP_SCALE, Track,
};
use bevy::prelude::*;
use std::sync::Arc;

/// Scaled-down overview of the track, pinned to the top-left of the screen
#[derive(Clone, Debug)]
pub struct Minimap {
    track: Arc<Track>,
    pub scale: f32,
}

impl Minimap {
    pub fn new(track: Arc<Track>) -> Self {
        Self {
            track,
            scale: MINIMAP_SCALE,
        }
    }

    /// Draws in screen space; the car dot uses world coordinates, not the camera view.
    pub fn draw(&self, painter: &mut impl Painter, car: &Car) {
        painter.save();
        painter.translate(Vec2::splat(MINIMAP_OFFSET));
        painter.scale(self.scale);

        let outline = Stroke::new(MINIMAP_ROAD_WIDTH, Color::srgb_u8(0x88, 0x88, 0x88));
        painter.stroke_path(&self.track.path, true, &outline);
        painter.fill_circle(car.position, MINIMAP_CAR_RADIUS, Color::srgb_u8(0xf1, 0xfa, 0xee));

        painter.restore();
    }
}
