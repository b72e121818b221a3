pub mod camera;
pub mod clock;
pub mod constants;
pub mod field;
pub mod input;
pub mod location;
pub mod mesh;
pub mod ridge;
pub mod sampler;
pub mod session;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use field::*;
pub use input::*;
pub use location::*;
pub use mesh::*;
pub use ridge::*;
pub use sampler::*;
pub use session::*;

// Shader bundled as a string constant
pub static RIDGES_WGSL: &str = include_str!("../shaders/ridges.wgsl");
