mod camera;
mod canvas;
mod game_logic;
mod render;

use bevy::{prelude::*, window::PresentMode};
use camera::{camera_setup, init_canvas_size, sync_canvas_size, WIN_H, WIN_W};
use canvas::DrawList;
use game_logic::{Game, Track};
use render::{present_canvas, present_labels, run_frame, spawn_canvas_surface};

fn main() -> AppExit {
    let track = match Track::hexagon() {
        Ok(track) => track,
        Err(err) => {
            eprintln!("failed to load track: {err}");
            return AppExit::from_code(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Drift Racer".into(),
                resolution: (WIN_W, WIN_H).into(),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(0x1d, 0x1d, 0x1d)))
        .insert_resource(Game::new(track, Vec2::new(WIN_W, WIN_H)))
        .init_resource::<DrawList>()
        .add_systems(
            Startup,
            (camera_setup, init_canvas_size, spawn_canvas_surface).chain(),
        )
        .add_systems(
            Update,
            (
                sync_canvas_size,
                run_frame,
                present_canvas,
                present_labels,
            )
                .chain(),
        )
        .run()
}
