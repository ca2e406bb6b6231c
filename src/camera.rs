use crate::game_logic::Game;
use bevy::prelude::*;
use bevy::render::camera::{Projection, ScalingMode};
use bevy::window::{PrimaryWindow, WindowResized};

// Initial window size
pub const WIN_W: f32 = 1280.;
pub const WIN_H: f32 = 720.;

// The Bevy camera never moves: the game pans the world itself,
// so one world unit is one canvas pixel centred on the origin.
pub fn camera_setup(mut commands: Commands) {
    let mut projection = OrthographicProjection::default_2d();
    projection.scaling_mode = ScalingMode::WindowSize;
    projection.scale = 1.0;

    commands
        .spawn(Camera2d::default())
        .insert(Projection::Orthographic(projection));
}

// Size the canvas from the window on load
pub fn init_canvas_size(window: Single<&Window, With<PrimaryWindow>>, mut game: ResMut<Game>) {
    game.resize(window.width(), window.height());
}

// Keep the canvas the size of the window
pub fn sync_canvas_size(mut resized: EventReader<WindowResized>, mut game: ResMut<Game>) {
    for event in resized.read() {
        debug!("Canvas resized to {}x{}", event.width, event.height);
        game.resize(event.width, event.height);
    }
}
