pub mod constants;
pub mod input;
pub mod camera;
pub mod car;
pub mod track;
pub mod lap_system;
pub mod minimap;
pub mod game;

pub use constants::*;
pub use input::*;
pub use camera::*;
pub use car::*;
pub use track::*;
pub use lap_system::*;
pub use minimap::*;
pub use game::*;
