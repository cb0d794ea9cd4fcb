/// Voxel geometry: a fixed-size cube with shared, index-addressed corners
pub mod face;

pub use face::{Edge, FaceDir, FaceSet, FACE_COUNT};

use glam::DVec3;

/// Edge length of every voxel in world units
pub const VOXEL_SIZE: f64 = 10.0;

// Corner slots. Front = anchor z, left = anchor x, bottom = anchor y.
pub const FLB: usize = 0;
pub const FLT: usize = 1;
pub const FRB: usize = 2;
pub const FRT: usize = 3;
pub const BLB: usize = 4;
pub const BLT: usize = 5;
pub const BRB: usize = 6;
pub const BRT: usize = 7;

const CORNER_OFFSETS_LUT: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],                      // FLB
    [0.0, VOXEL_SIZE, 0.0],               // FLT
    [VOXEL_SIZE, 0.0, 0.0],               // FRB
    [VOXEL_SIZE, VOXEL_SIZE, 0.0],        // FRT
    [0.0, 0.0, VOXEL_SIZE],               // BLB
    [0.0, VOXEL_SIZE, VOXEL_SIZE],        // BLT
    [VOXEL_SIZE, 0.0, VOXEL_SIZE],        // BRB
    [VOXEL_SIZE, VOXEL_SIZE, VOXEL_SIZE], // BRT
];

#[derive(Clone, Debug, PartialEq)]
pub struct Voxel {
    corners: [DVec3; 8],
    color: String,
    to_render: FaceSet,
}

impl Voxel {
    pub fn new(anchor: DVec3, color: impl Into<String>) -> Self {
        let corners = CORNER_OFFSETS_LUT.map(|o| anchor + DVec3::from_array(o));
        Self {
            corners,
            color: color.into(),
            to_render: FaceSet::ALL,
        }
    }

    /// The front-left-bottom corner
    #[inline]
    pub fn anchor(&self) -> DVec3 {
        self.corners[FLB]
    }

    #[inline]
    pub fn corners(&self) -> &[DVec3; 8] {
        &self.corners
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Voxels with an empty colour never occupy grid space.
    #[inline]
    pub fn is_empty_sentinel(&self) -> bool {
        self.color.is_empty()
    }

    /// Translate every corner once. Culling is not recomputed.
    pub fn move_by(&mut self, offset: DVec3) {
        for corner in &mut self.corners {
            *corner += offset;
        }
    }

    #[inline]
    pub fn face_corners(&self, face: FaceDir) -> [DVec3; 4] {
        face.corners().map(|i| self.corners[i])
    }

    pub fn face_edges(&self, face: FaceDir) -> [(DVec3, DVec3); 4] {
        face.edges()
            .map(|e| (self.corners[e.a], self.corners[e.b]))
    }

    /// Mean of the face's four `a` endpoints
    pub fn face_centroid(&self, face: FaceDir) -> DVec3 {
        self.face_corners(face)
            .iter()
            .fold(DVec3::ZERO, |acc, c| acc + *c / 4.0)
    }

    #[inline]
    pub fn visible_faces(&self) -> FaceSet {
        self.to_render
    }

    #[inline]
    pub fn is_face_visible(&self, face: FaceDir) -> bool {
        self.to_render.contains(face)
    }

    /// Returns true if the face was still marked for rendering
    #[inline]
    pub fn hide_face(&mut self, face: FaceDir) -> bool {
        self.to_render.remove(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_naming_convention() {
        let v = Voxel::new(DVec3::new(10.0, 100.0, 100.0), "#4d3f31");
        let c = v.corners();
        assert_eq!(c[FLB], DVec3::new(10.0, 100.0, 100.0));
        assert_eq!(c[FLT], DVec3::new(10.0, 110.0, 100.0));
        assert_eq!(c[FRB], DVec3::new(20.0, 100.0, 100.0));
        assert_eq!(c[BRT], DVec3::new(20.0, 110.0, 110.0));
        assert_eq!(v.anchor(), c[FLB]);
    }

    #[test]
    fn front_face_centroid_sits_on_anchor_plane() {
        let v = Voxel::new(DVec3::ZERO, "#fff");
        assert_eq!(v.face_centroid(FaceDir::Front), DVec3::new(5.0, 5.0, 0.0));
        assert_eq!(v.face_centroid(FaceDir::Back), DVec3::new(5.0, 5.0, 10.0));
        assert_eq!(v.face_centroid(FaceDir::Top), DVec3::new(5.0, 0.0, 5.0));
        assert_eq!(v.face_centroid(FaceDir::Bottom), DVec3::new(5.0, 10.0, 5.0));
    }

    #[test]
    fn move_translates_shared_corners_once() {
        let mut v = Voxel::new(DVec3::ZERO, "#fff");
        v.move_by(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.anchor(), DVec3::new(1.0, 2.0, 3.0));
        // FLB is shared by left, top and front faces
        assert_eq!(v.face_corners(FaceDir::Left)[0], DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.face_corners(FaceDir::Front)[0], DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn hidden_face_is_excluded() {
        let mut v = Voxel::new(DVec3::ZERO, "#fff");
        assert!(v.hide_face(FaceDir::Back));
        assert!(!v.is_face_visible(FaceDir::Back));
        assert_eq!(v.visible_faces().len(), 5);
    }
}
