// Canvas-style render target used by the game's draw routines
//
// The game never touches Bevy rendering directly:
// 1. Draw routines issue canvas-2D calls against a `Painter`
// 2. `DrawList` records them in canvas pixel space (y down, origin top-left)
// 3. `CanvasMesh` turns the recorded strokes and fills into one coloured mesh
// 4. Text commands are presented separately as Text2d labels

pub mod draw_list;
pub mod tessellate;

pub use draw_list::{DrawCommand, DrawList};
pub use tessellate::CanvasMesh;

use bevy::prelude::*;

/// How consecutive stroke segments are joined
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    Round,
    #[default]
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub join: LineJoin,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            join: LineJoin::default(),
        }
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

/// A 2D drawing surface with canvas semantics.
///
/// Transforms compose onto the current state and apply to every later
/// call until the matching `restore`.
pub trait Painter {
    /// Drop everything drawn so far and reset the transform state.
    fn clear(&mut self);
    fn save(&mut self);
    /// Pop the last saved state; does nothing if none was saved.
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, factor: f32);

    fn stroke_path(&mut self, points: &[Vec2], closed: bool, stroke: &Stroke);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `position` is the left end of the text baseline.
    fn fill_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color);

    fn stroke_line(&mut self, a: Vec2, b: Vec2, stroke: &Stroke) {
        self.stroke_path(&[a, b], false, stroke);
    }
}
