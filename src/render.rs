use crate::canvas::{CanvasMesh, DrawCommand, DrawList};
use crate::game_logic::Game;
use bevy::prelude::*;
use bevy::sprite::Anchor;

/// Share of the font size that hangs below the baseline for Bevy's
/// default font. Text2d anchors the text box, canvas text the baseline.
const FONT_DESCENT: f32 = 0.25;

/// The mesh every canvas fill and stroke is baked into
#[derive(Component)]
pub struct CanvasSurface;

/// A pooled Text2d used for canvas text commands
#[derive(Component)]
pub struct CanvasLabel;

pub fn spawn_canvas_surface(
    mut commands: Commands,
    game: Res<Game>,
    mut draw_list: ResMut<DrawList>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // paint once so the surface never starts out empty
    game.render(&mut *draw_list);
    let mesh = CanvasMesh::tessellate(draw_list.commands(), game.canvas_size()).into_mesh();

    commands.spawn((
        Mesh2d(meshes.add(mesh)),
        // white base so the vertex colours come through untouched
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::WHITE))),
        Transform::default(),
        CanvasSurface,
    ));
}

// One display frame: update then render into the draw list
pub fn run_frame(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<Game>,
    mut draw_list: ResMut<DrawList>,
) {
    game.frame(&keys, time.delta_secs(), &mut *draw_list);
}

pub fn present_canvas(
    game: Res<Game>,
    draw_list: Res<DrawList>,
    surface: Single<&Mesh2d, With<CanvasSurface>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(mesh) = meshes.get_mut(&surface.0) else {
        warn!("Canvas mesh missing, skipping frame");
        return;
    };
    *mesh = CanvasMesh::tessellate(draw_list.commands(), game.canvas_size()).into_mesh();
}

pub fn present_labels(
    mut commands: Commands,
    game: Res<Game>,
    draw_list: Res<DrawList>,
    mut labels: Query<
        (&mut Text2d, &mut TextFont, &mut TextColor, &mut Transform, &mut Visibility),
        With<CanvasLabel>,
    >,
) {
    let half = game.canvas_size() / 2.0;
    let mut texts = draw_list.texts();

    for (mut text, mut font, mut color, mut transform, mut visibility) in labels.iter_mut() {
        match texts.next() {
            Some(DrawCommand::Text { text: content, position, font_size, color: fill }) => {
                if text.0 != *content {
                    text.0 = content.clone();
                }
                font.font_size = *font_size;
                color.0 = *fill;
                transform.translation = label_translation(*position, *font_size, half);
                *visibility = Visibility::Inherited;
            }
            _ => *visibility = Visibility::Hidden,
        }
    }

    // grow the pool for any text left over
    for command in texts {
        if let DrawCommand::Text { text, position, font_size, color } = command {
            commands.spawn((
                Text2d::new(text.clone()),
                TextFont {
                    font_size: *font_size,
                    ..default()
                },
                TextColor(*color),
                Anchor::BottomLeft,
                Transform::from_translation(label_translation(*position, *font_size, half)),
                CanvasLabel,
            ));
        }
    }
}

// Canvas baseline to the bottom of the text box, in world space,
// in front of the canvas mesh
fn label_translation(position: Vec2, font_size: f32, half: Vec2) -> Vec3 {
    let bottom = position.y + font_size * FONT_DESCENT;
    Vec3::new(position.x - half.x, half.y - bottom, 10.)
}
