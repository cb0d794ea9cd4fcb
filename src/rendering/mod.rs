/// Software rendering pipeline
/// Culling, projection and painter's-order face drawing onto a canvas-like surface
pub mod culling;
pub mod framebuffer;
pub mod projection;
pub mod renderer;
pub mod surface;

pub use culling::cull_hidden_faces;
pub use framebuffer::Framebuffer;
pub use projection::{ProjectionMode, Projector};
pub use renderer::{DrawRecord, FrameRenderer, RendererConfig};
pub use surface::{CommandRecorder, DrawCommand, RenderSurface, Rgba};
