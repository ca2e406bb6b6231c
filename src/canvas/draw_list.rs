use crate::canvas::{LineJoin, Painter, Stroke};
use bevy::math::Affine2;
use bevy::prelude::*;

/// A draw call flattened into canvas pixel space
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Stroke {
        points: Vec<Vec2>,
        closed: bool,
        width: f32,
        join: LineJoin,
        color: Color,
    },
    /// Filled quadrilateral, corners in winding order
    Quad {
        corners: [Vec2; 4],
        color: Color,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        font_size: f32,
        color: Color,
    },
}

/// Recording painter: the display list of one frame.
#[derive(Resource, Clone, Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    transform: Affine2,
    saved: Vec<Affine2>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            transform: Affine2::IDENTITY,
            saved: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Text { .. }))
    }

    fn map(&self, point: Vec2) -> Vec2 {
        self.transform.transform_point2(point)
    }

    // Only uniform scales are ever applied, so one axis is enough.
    fn scale_factor(&self) -> f32 {
        self.transform.matrix2.x_axis.length()
    }
}

impl Painter for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.transform = Affine2::IDENTITY;
        self.saved.clear();
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform * Affine2::from_angle(angle);
    }

    fn scale(&mut self, factor: f32) {
        self.transform = self.transform * Affine2::from_scale(Vec2::splat(factor));
    }

    fn stroke_path(&mut self, points: &[Vec2], closed: bool, stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.map(*p)).collect();
        self.commands.push(DrawCommand::Stroke {
            points,
            closed,
            width: stroke.width * self.scale_factor(),
            join: stroke.join,
            color: stroke.color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        let corners = [
            origin,
            origin + Vec2::new(size.x, 0.0),
            origin + size,
            origin + Vec2::new(0.0, size.y),
        ]
        .map(|corner| self.map(corner));
        self.commands.push(DrawCommand::Quad { corners, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Disc {
            center: self.map(center),
            radius: radius * self.scale_factor(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position: self.map(position),
            font_size: font_size * self.scale_factor(),
            color,
        });
    }
}
