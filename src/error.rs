/// Error types for scene construction, projection and rendering
use crate::voxel::FaceDir;
use glam::DVec3;
use std::path::PathBuf;
use thiserror::Error;

/// A voxel anchor that cannot be mapped onto the world grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("voxel anchor {anchor} is not a multiple of the voxel size")]
    Misaligned { anchor: DVec3 },

    #[error("voxel anchor {anchor} maps to grid cell ({x}, {y}, {z}) outside 0..{size}")]
    OutOfBounds {
        anchor: DVec3,
        x: i64,
        y: i64,
        z: i64,
        size: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    #[error("cannot project vertex {vertex}: depth divisor is zero")]
    ZeroDepth { vertex: DVec3 },

    #[error("vertex {vertex} lies behind the camera")]
    BehindCamera { vertex: DVec3 },

    #[error("projection of vertex {vertex} is not finite")]
    NonFinite { vertex: DVec3 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("voxel {voxel} face {face:?}: {source}")]
    Projection {
        voxel: usize,
        face: FaceDir,
        #[source]
        source: ProjectionError,
    },
}

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("voxel #{index} cannot be placed: {source}")]
    Placement {
        index: usize,
        #[source]
        source: PlacementError,
    },
}
