pub mod burst;
pub mod camera;
pub mod constants;
pub mod drag;
pub mod node;
pub mod particles;
pub mod picking;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use burst::*;
pub use camera::*;
pub use constants::*;
pub use drag::*;
pub use node::*;
pub use particles::*;
pub use picking::*;
pub use scene::*;
