use crate::canvas::{DrawCommand, LineJoin};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

/// Depth added per command so later draws cover earlier ones
const LAYER_STEP: f32 = 1e-4;

/// Triangle buffers for one frame of canvas fills and strokes.
///
/// Positions are in Bevy world space: canvas centre at the origin, y up.
#[derive(Clone, Debug, Default)]
pub struct CanvasMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl CanvasMesh {
    pub fn tessellate(commands: &[DrawCommand], canvas_size: Vec2) -> Self {
        let mut mesh = Self::default();
        let half = canvas_size / 2.0;
        let to_world = |p: Vec2| Vec2::new(p.x - half.x, half.y - p.y);

        for (layer, command) in commands.iter().enumerate() {
            let z = layer as f32 * LAYER_STEP;
            match command {
                DrawCommand::Stroke {
                    points,
                    closed,
                    width,
                    join,
                    color,
                } => {
                    let points: Vec<Vec2> = points.iter().map(|p| to_world(*p)).collect();
                    mesh.push_stroke(&points, *closed, *width, *join, *color, z);
                }
                DrawCommand::Quad { corners, color } => {
                    mesh.push_quad((*corners).map(|p| to_world(p)), *color, z);
                }
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => {
                    mesh.push_disc(to_world(*center), *radius, *color, z);
                }
                // presented as text labels instead
                DrawCommand::Text { .. } => {}
            }
        }
        mesh
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors)
            .with_inserted_indices(Indices::U32(self.indices))
    }

    fn push_vertex(&mut self, point: Vec2, z: f32, color: [f32; 4]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push([point.x, point.y, z]);
        self.colors.push(color);
        index
    }

    fn push_quad(&mut self, corners: [Vec2; 4], color: Color, z: f32) {
        let color = linear(color);
        let base = self.push_vertex(corners[0], z, color);
        for corner in &corners[1..] {
            self.push_vertex(*corner, z, color);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn push_disc(&mut self, center: Vec2, radius: f32, color: Color, z: f32) {
        if radius <= 0.0 {
            return;
        }
        let color = linear(color);
        let segments = disc_segments(radius);
        let hub = self.push_vertex(center, z, color);
        for i in 0..segments {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            self.push_vertex(center + Vec2::from_angle(angle) * radius, z, color);
        }
        for i in 0..segments {
            let next = (i + 1) % segments;
            self.indices.extend_from_slice(&[hub, hub + 1 + i, hub + 1 + next]);
        }
    }

    fn push_stroke(
        &mut self,
        points: &[Vec2],
        closed: bool,
        width: f32,
        join: LineJoin,
        color: Color,
        z: f32,
    ) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let half_width = width / 2.0;
        let segment_count = if closed { points.len() } else { points.len() - 1 };

        for i in 0..segment_count {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            let normal = (b - a).normalize_or_zero().perp() * half_width;
            self.push_quad([a + normal, b + normal, b - normal, a - normal], color, z);
        }

        // joints: every vertex on a closed path, interior ones on an open path
        let joints = if closed { 0..points.len() } else { 1..points.len() - 1 };
        for i in joints {
            let point = points[i];
            match join {
                LineJoin::Round => self.push_disc(point, half_width, color, z),
                LineJoin::Bevel => {
                    let prev = points[(i + points.len() - 1) % points.len()];
                    let next = points[(i + 1) % points.len()];
                    let n_in = (point - prev).normalize_or_zero().perp() * half_width;
                    let n_out = (next - point).normalize_or_zero().perp() * half_width;
                    // cover both sides, whichever is the outer one
                    self.push_triangle([point, point + n_in, point + n_out], color, z);
                    self.push_triangle([point, point - n_in, point - n_out], color, z);
                }
            }
        }
    }

    fn push_triangle(&mut self, corners: [Vec2; 3], color: Color, z: f32) {
        let color = linear(color);
        let base = self.push_vertex(corners[0], z, color);
        self.push_vertex(corners[1], z, color);
        self.push_vertex(corners[2], z, color);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

fn disc_segments(radius: f32) -> u32 {
    ((radius.sqrt() * 4.0).ceil() as u32).clamp(8, 48)
}

fn linear(color: Color) -> [f32; 4] {
    let c = color.to_linear();
    [c.red, c.green, c.blue, c.alpha]
}
