//! WebGPU rendering module
//!
//! The widget is drawn as flat triangle meshes, rebuilt each frame from
//! the lock state and uploaded to a single vertex buffer.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
