use crate::canvas::Painter;
use crate::game_logic::{
    CAR_START_X, CAR_START_Y, Car, DriveInput, FollowCamera, HUD_FONT_SIZE, HUD_MARGIN,
    KeyBindings, LapManager, Minimap, Track,
};
use bevy::prelude::*;
use std::sync::Arc;

/// Everything in a race, advanced and drawn once per display frame.
///
/// The host passes in the keyboard state each step and hands a `Painter` to
/// `render`; nothing here looks up windows or devices on its own.
#[derive(Resource)]
pub struct Game {
    bindings: KeyBindings,
    camera: FollowCamera,
    car: Car,
    track: Arc<Track>,
    laps: LapManager,
    minimap: Minimap,
    canvas_size: Vec2,
    ticks: u64,
}

impl Game {
    pub fn new(track: Track, canvas_size: Vec2) -> Self {
        let track = Arc::new(track);
        Self {
            bindings: KeyBindings::default(),
            camera: FollowCamera::default(),
            car: Car::new(Vec2::new(CAR_START_X, CAR_START_Y)),
            laps: LapManager::new(track.clone()),
            minimap: Minimap::new(track.clone()),
            track,
            canvas_size,
            ticks: 0,
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Only the render surface changes; the race state is untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas_size = Vec2::new(width, height);
    }

    pub fn update(&mut self, keys: &ButtonInput<KeyCode>) {
        self.ticks += 1;

        if keys.just_pressed(self.bindings.toggle_crossing_rule) {
            let rule = self.laps.rule().toggled();
            self.laps.set_rule(rule);
            info!("Lap crossing rule: {:?}", rule);
        }

        let input = DriveInput::from_keys(keys, &self.bindings);
        // camera and laps both read the already-moved car
        self.car.update(&input);
        self.camera.follow(self.car.position);

        if self.laps.update(&self.car) {
            let (lap, total) = (self.laps.current_lap, self.laps.total_laps());
            info!("Lap complete {}/{}", lap, total);
            if self.laps.is_finished() && lap == total {
                info!("Car finished all laps after {} ticks!", self.ticks);
            }
        }
    }

    /// One simulation step. Physics runs in fixed per-tick increments, so
    /// `_delta` is not used yet.
    pub fn step(&mut self, keys: &ButtonInput<KeyCode>, _delta: f32) {
        self.update(keys);
    }

    pub fn hud_text(&self) -> String {
        format!("Lap {}/{}", self.laps.current_lap, self.track.laps)
    }

    pub fn render(&self, painter: &mut impl Painter) {
        painter.clear();

        painter.save();
        painter.translate(self.canvas_size / 2.0 - self.camera.position);
        self.track.draw(painter);
        self.car.draw(painter);
        painter.restore();

        self.minimap.draw(painter, &self.car);

        painter.fill_text(
            &self.hud_text(),
            Vec2::new(HUD_MARGIN, self.canvas_size.y - HUD_MARGIN),
            HUD_FONT_SIZE,
            Color::WHITE,
        );
    }

    /// One display frame: a single update followed by a single render
    pub fn frame(&mut self, keys: &ButtonInput<KeyCode>, delta: f32, painter: &mut impl Painter) {
        self.step(keys, delta);
        self.render(painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};
    use crate::game_logic::CrossingRule;

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(Track::hexagon().unwrap(), Vec2::new(800.0, 600.0))
    }

    fn idle() -> ButtonInput<KeyCode> {
        ButtonInput::default()
    }

    fn holding(key: KeyCode) -> ButtonInput<KeyCode> {
        let mut keys = ButtonInput::default();
        keys.press(key);
        keys
    }

    #[test]
    fn test_starts_at_rest() {
        let game = game();
        assert_eq!(game.car.position, Vec2::new(0.0, -250.0));
        assert_eq!(game.car.speed, 0.0);
        assert_eq!(game.camera.position, Vec2::ZERO);
        assert_eq!(game.hud_text(), "Lap 0/3");
    }

    #[test]
    fn test_idle_steps_change_nothing_but_camera() {
        let mut game = game();
        game.step(&idle(), DT);
        assert_eq!(game.car.position, Vec2::new(0.0, -250.0));
        // camera eased toward the parked car
        assert!((game.camera.position.y + 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_update_order_uses_moved_car() {
        let mut game = game();
        game.step(&holding(KeyCode::ArrowUp), DT);

        let car_x = game.car.position.x;
        assert!(car_x > 0.0);
        assert!((game.camera.position.x - car_x * 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut game = game();
        game.step(&holding(KeyCode::KeyW), DT);
        assert_eq!(game.car.speed, 0.0);
    }

    #[test]
    fn test_resize_only_changes_canvas() {
        let mut game = game();
        let keys = holding(KeyCode::ArrowUp);
        for _ in 0..10 {
            game.step(&keys, DT);
        }
        let car = game.car.clone();
        let camera = game.camera.position;

        game.resize(1920.0, 1080.0);

        assert_eq!(game.canvas_size(), Vec2::new(1920.0, 1080.0));
        assert_eq!(game.car.position, car.position);
        assert_eq!(game.car.speed, car.speed);
        assert_eq!(game.camera.position, camera);
        assert_eq!(game.track.path.len(), 6);
    }

    #[test]
    fn test_render_layers() {
        let game = game();
        let mut list = DrawList::new();
        game.render(&mut list);

        let kinds: Vec<&str> = list
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::Stroke { .. } => "stroke",
                DrawCommand::Quad { .. } => "quad",
                DrawCommand::Disc { .. } => "disc",
                DrawCommand::Text { .. } => "text",
            })
            .collect();
        // road, start line, car, minimap outline, minimap dot, hud
        assert_eq!(kinds, ["stroke", "stroke", "quad", "stroke", "disc", "text"]);

        // camera at origin: world (0, -300) is 300px above the centre
        let DrawCommand::Stroke { points, .. } = &list.commands()[0] else {
            unreachable!();
        };
        assert_eq!(points[0], Vec2::new(400.0, 0.0));

        let DrawCommand::Text { text, position, .. } = &list.commands()[5] else {
            unreachable!();
        };
        assert_eq!(text, "Lap 0/3");
        assert_eq!(*position, Vec2::new(20.0, 580.0));
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let mut game = game();
        let mut list = DrawList::new();
        game.frame(&idle(), DT, &mut list);
        game.frame(&idle(), DT, &mut list);
        assert_eq!(list.commands().len(), 6);
    }

    #[test]
    fn test_camera_follows_into_world_offset() {
        let mut game = game();
        for _ in 0..30 {
            game.step(&idle(), DT);
        }
        let mut list = DrawList::new();
        game.render(&mut list);

        // the car is drawn where the camera offset puts it
        let DrawCommand::Quad { corners, .. } = &list.commands()[2] else {
            unreachable!();
        };
        let center = corners.iter().copied().sum::<Vec2>() / 4.0;
        let expected = Vec2::new(400.0, 300.0) + game.car.position - game.camera.position;
        assert!(center.distance(expected) < 1e-3);
    }

    #[test]
    fn test_driving_a_lap_counts() {
        let mut game = game();
        // approach the line from behind along the road
        game.car.position = Vec2::new(-60.0, -300.0);
        game.car.speed = 4.0;

        let keys = holding(KeyCode::ArrowUp);
        for _ in 0..20 {
            game.step(&keys, DT);
        }
        assert_eq!(game.laps.current_lap, 1);
        assert_eq!(game.hud_text(), "Lap 1/3");
    }

    #[test]
    fn test_toggle_key_switches_rule_once_per_press() {
        let mut game = game();
        let mut keys = holding(KeyCode::KeyG);
        game.step(&keys, DT);
        assert_eq!(game.laps.rule(), CrossingRule::OnRoad);

        // still held: no new press this frame
        keys.clear();
        game.step(&keys, DT);
        assert_eq!(game.laps.rule(), CrossingRule::OnRoad);

        keys.release(KeyCode::KeyG);
        keys.clear();
        keys.press(KeyCode::KeyG);
        game.step(&keys, DT);
        assert_eq!(game.laps.rule(), CrossingRule::Line);
    }

    #[test]
    fn test_on_road_rule_counts_road_lap() {
        let mut game = game();
        game.step(&holding(KeyCode::KeyG), DT);
        game.car.position = Vec2::new(-60.0, -300.0);
        game.car.speed = 4.0;

        let keys = holding(KeyCode::ArrowUp);
        for _ in 0..20 {
            game.step(&keys, DT);
        }
        assert_eq!(game.laps.current_lap, 1);
    }
}
