// Car tuning, applied once per tick (no delta scaling)
pub const MAX_SPEED: f32 = 6.0;
pub const ACCELERATION: f32 = 0.15;
pub const REVERSE_RATIO: f32 = 0.7; // braking/reverse is weaker than forward thrust
pub const TURN_SPEED: f32 = 0.045;
pub const FRICTION: f32 = 0.97;
pub const DRIFT_FACTOR: f32 = 0.85;

// Car body
pub const CAR_LENGTH: f32 = 20.0;
pub const CAR_WIDTH: f32 = 12.0;
pub const CAR_START_X: f32 = 0.0;
pub const CAR_START_Y: f32 = -250.0;

// Camera
pub const CAMERA_SMOOTHNESS: f32 = 0.08;

// Laps
pub const MIN_LAP_SPEED: f32 = 1.0;

// Track rendering
pub const ROAD_WIDTH: f32 = 40.0;
pub const START_LINE_WIDTH: f32 = 5.0;

// Minimap
pub const MINIMAP_SCALE: f32 = 0.12;
pub const MINIMAP_OFFSET: f32 = 20.0;
pub const MINIMAP_ROAD_WIDTH: f32 = 20.0;
pub const MINIMAP_CAR_RADIUS: f32 = 15.0;

// HUD
pub const HUD_MARGIN: f32 = 20.0;
pub const HUD_FONT_SIZE: f32 = 18.0;
