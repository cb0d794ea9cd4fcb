/// Scene setup: voxel placement into the world grid and one-time face culling
/// Scenes are described by a `SceneConfig`, either the built-in starter scene or TOML
use crate::camera::{Camera, RotationMode};
use crate::error::SceneError;
use crate::rendering::culling::cull_hidden_faces;
use crate::voxel::Voxel;
use crate::world::{grid_coord_for, VoxelId, WorldGrid};
use glam::{DVec3, IVec3};
use log::info;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub position: [f64; 3],
    /// Degrees per axis, applied once at construction
    #[serde(default)]
    pub rotation: [f64; 3],
    #[serde(default = "default_fov")]
    pub fov: f64,
}

fn default_fov() -> f64 {
    90.0
}

impl CameraConfig {
    pub fn build(&self, mode: RotationMode) -> Camera {
        Camera::new(
            DVec3::from_array(self.position),
            DVec3::from_array(self.rotation),
            self.fov,
            mode,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoxelConfig {
    /// Front-left-bottom corner; each component a multiple of the voxel size
    pub position: [f64; 3],
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    #[serde(default)]
    pub voxels: Vec<VoxelConfig>,
}

impl SceneConfig {
    /// Four voxels and the camera framing them
    pub fn starter() -> Self {
        let voxel = |position: [f64; 3], color: &str| VoxelConfig {
            position,
            color: color.to_owned(),
        };
        Self {
            camera: CameraConfig {
                position: [-15.0, 85.0, -1050.0],
                rotation: [-0.2, 0.0, 0.0],
                fov: 90.0,
            },
            voxels: vec![
                voxel([10.0, 100.0, 100.0], "#4d3f31"),
                voxel([0.0, 100.0, 120.0], "#4g3f31"),
                voxel([10.0, 100.0, 110.0], "#cfba14"),
                voxel([10.0, 90.0, 110.0], "#2b8042"),
            ],
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let source = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn build_scene(&self) -> Result<Scene, SceneError> {
        Scene::new(
            self.voxels
                .iter()
                .map(|v| Voxel::new(DVec3::from_array(v.position), v.color.as_str()))
                .collect(),
        )
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::starter()
    }
}

/// Placed voxels plus the grid describing their adjacency
pub struct Scene {
    voxels: Vec<Voxel>,
    coords: Vec<IVec3>,
    grid: WorldGrid,
}

impl Scene {
    /// Place every voxel, then cull interior faces once.
    ///
    /// Voxels with an empty colour are kept for drawing but never occupy a
    /// grid cell. Two voxels in one cell: the later one owns the cell.
    pub fn new(mut voxels: Vec<Voxel>) -> Result<Self, SceneError> {
        let mut grid = WorldGrid::new();
        let mut coords = Vec::with_capacity(voxels.len());

        for (index, voxel) in voxels.iter().enumerate() {
            let coord = grid_coord_for(voxel.anchor())
                .map_err(|source| SceneError::Placement { index, source })?;
            if !voxel.is_empty_sentinel() {
                grid.place(index, coord)
                    .map_err(|source| SceneError::Placement { index, source })?;
            }
            coords.push(coord);
        }

        let mut culled = 0;
        for (voxel, &coord) in voxels.iter_mut().zip(&coords) {
            culled += cull_hidden_faces(voxel, coord, &grid);
        }

        info!(
            "scene ready: {} voxels, {} grid cells occupied, {} interior faces culled",
            voxels.len(),
            grid.occupied_count(),
            culled
        );

        Ok(Self {
            voxels,
            coords,
            grid,
        })
    }

    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Mutable access for moving voxels. Culling is not recomputed.
    #[inline]
    pub fn voxel_mut(&mut self, id: VoxelId) -> Option<&mut Voxel> {
        self.voxels.get_mut(id)
    }

    /// Grid cell a voxel was placed at
    #[inline]
    pub fn grid_coord(&self, id: VoxelId) -> Option<IVec3> {
        self.coords.get(id).copied()
    }

    #[inline]
    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}
