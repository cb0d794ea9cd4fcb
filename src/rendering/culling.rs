use glam::IVec3;
use log::debug;

use crate::voxel::{FaceDir, Voxel};
use crate::world::{in_bounds, WorldGrid};

/// Remove faces of `voxel` that touch another filled grid cell.
///
/// `coord` is the voxel's own grid cell. Neighbours outside the grid are
/// skipped. Returns the number of faces removed by this call.
pub fn cull_hidden_faces(voxel: &mut Voxel, coord: IVec3, grid: &WorldGrid) -> usize {
    let mut removed = 0;

    for face in FaceDir::ALL {
        let neighbor = coord + IVec3::from_array(face.neighbor_offset());
        if !in_bounds(neighbor) {
            continue;
        }
        if grid.is_occupied(neighbor) && voxel.hide_face(face) {
            removed += 1;
        }
    }

    debug!(
        "voxel at ({}, {}, {}): {} interior faces culled, {} remain",
        coord.x,
        coord.y,
        coord.z,
        removed,
        voxel.visible_faces().len()
    );
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::FaceSet;
    use glam::DVec3;

    #[test]
    fn isolated_voxel_keeps_all_faces() {
        let mut grid = WorldGrid::new();
        let coord = IVec3::new(4, 4, 4);
        grid.place(0, coord).unwrap();
        let mut voxel = Voxel::new(DVec3::splat(40.0), "#abcdef");

        assert_eq!(cull_hidden_faces(&mut voxel, coord, &grid), 0);
        assert_eq!(voxel.visible_faces(), FaceSet::ALL);
    }

    #[test]
    fn corner_voxel_does_not_query_outside_grid() {
        let mut grid = WorldGrid::new();
        grid.place(0, IVec3::ZERO).unwrap();
        grid.place(1, IVec3::X).unwrap();
        let mut voxel = Voxel::new(DVec3::ZERO, "#abcdef");

        assert_eq!(cull_hidden_faces(&mut voxel, IVec3::ZERO, &grid), 1);
        assert!(!voxel.is_face_visible(FaceDir::Right));
    }

    #[test]
    fn fully_surrounded_voxel_hides_everything() {
        let mut grid = WorldGrid::new();
        let center = IVec3::splat(8);
        grid.place(0, center).unwrap();
        for (i, face) in FaceDir::ALL.into_iter().enumerate() {
            grid.place(i + 1, center + IVec3::from_array(face.neighbor_offset()))
                .unwrap();
        }
        let mut voxel = Voxel::new(DVec3::splat(80.0), "#abcdef");

        assert_eq!(cull_hidden_faces(&mut voxel, center, &grid), 6);
        assert!(voxel.visible_faces().is_empty());
    }
}
