//! 2D rendering over wgpu
//!
//! CPU-side tessellation into a single colored triangle list, one pipeline,
//! one draw per frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
