/// Voxel Painter - painter's-algorithm voxel renderer
/// A fixed 16³ grid of unit voxels drawn with a hand-rolled perspective projection
pub mod camera;
pub mod error;
pub mod perf;
pub mod rendering;
pub mod scene;
pub mod voxel;
pub mod world;

use std::time::Duration;

pub use camera::{command_for_key, Camera, CameraCommand, RotationMode};
pub use error::{PlacementError, ProjectionError, RenderError, SceneError};
pub use perf::FrameStats;
pub use rendering::{
    CommandRecorder, DrawCommand, DrawRecord, FrameRenderer, Framebuffer, ProjectionMode,
    Projector, RenderSurface, RendererConfig, Rgba,
};
pub use scene::{Scene, SceneConfig};
pub use voxel::{FaceDir, FaceSet, Voxel, VOXEL_SIZE};
pub use world::{WorldGrid, GRID_SIZE};

/// Fixed redraw period of the render loop
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
