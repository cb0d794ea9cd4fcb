/// Fixed-size world grid used for voxel adjacency queries
/// Slots hold the id (index into the scene's voxel list) of the voxel anchored there
use crate::error::PlacementError;
use crate::voxel::VOXEL_SIZE;
use glam::{DVec3, IVec3};
use log::debug;

pub const GRID_SIZE: usize = 16;
pub const GRID_SIZE_I32: i32 = GRID_SIZE as i32;
pub const GRID_VOLUME: usize = GRID_SIZE * GRID_SIZE * GRID_SIZE;

pub type VoxelId = usize;

pub struct WorldGrid {
    slots: Box<[Option<VoxelId>; GRID_VOLUME]>,
}

impl WorldGrid {
    pub fn new() -> Self {
        Self {
            slots: Box::new([None; GRID_VOLUME]),
        }
    }

    /// Record a voxel at `coord`. An occupied slot is overwritten (last write wins).
    pub fn place(&mut self, id: VoxelId, coord: IVec3) -> Result<(), PlacementError> {
        let index = coords_to_index(coord).ok_or(PlacementError::OutOfBounds {
            anchor: coord.as_dvec3() * VOXEL_SIZE,
            x: coord.x as i64,
            y: coord.y as i64,
            z: coord.z as i64,
            size: GRID_SIZE,
        })?;

        if let Some(previous) = self.slots[index].replace(id) {
            debug!(
                "grid cell ({}, {}, {}) reassigned from voxel {} to voxel {}",
                coord.x, coord.y, coord.z, previous, id
            );
        }
        Ok(())
    }

    /// Voxel id at `coord`; None for empty or out-of-range cells
    #[inline]
    pub fn get(&self, coord: IVec3) -> Option<VoxelId> {
        coords_to_index(coord).and_then(|i| self.slots[i])
    }

    #[inline]
    pub fn is_occupied(&self, coord: IVec3) -> bool {
        self.get(coord).is_some()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub fn in_bounds(coord: IVec3) -> bool {
    coord.cmpge(IVec3::ZERO).all() && coord.cmplt(IVec3::splat(GRID_SIZE_I32)).all()
}

#[inline]
fn coords_to_index(coord: IVec3) -> Option<usize> {
    if !in_bounds(coord) {
        return None;
    }
    let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
    Some((z * GRID_SIZE * GRID_SIZE) + (y * GRID_SIZE) + x)
}

/// Convert a voxel anchor to its grid cell.
/// Every component must be an exact multiple of the voxel size inside the grid.
pub fn grid_coord_for(anchor: DVec3) -> Result<IVec3, PlacementError> {
    let scaled = anchor / VOXEL_SIZE;
    if scaled.fract() != DVec3::ZERO || !scaled.is_finite() {
        return Err(PlacementError::Misaligned { anchor });
    }

    let (x, y, z) = (scaled.x as i64, scaled.y as i64, scaled.z as i64);
    let size = GRID_SIZE as i64;
    if [x, y, z].iter().any(|c| !(0..size).contains(c)) {
        return Err(PlacementError::OutOfBounds {
            anchor,
            x,
            y,
            z,
            size: GRID_SIZE,
        });
    }

    Ok(IVec3::new(x as i32, y as i32, z as i32))
}
