//! WebGPU rendering module
//!
//! Flat-color triangle lists rebuilt from simulation state each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
