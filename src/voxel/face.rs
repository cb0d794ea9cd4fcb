/// Face and edge tables for the unit voxel
/// Indices are positional: culling and draw ordering rely on them
use super::{BLB, BLT, BRB, BRT, FLB, FLT, FRB, FRT};

pub const FACE_COUNT: usize = 6;

/// The six quad sides of a voxel in their fixed index order.
///
/// `Top` lies on the anchor's y plane and `Bottom` on the y + size plane.
/// On a y-down canvas the minimum-y face appears on top, hence the names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FaceDir {
    Back = 0,
    Left = 1,
    Right = 2,
    Top = 3,
    Bottom = 4,
    Front = 5,
}

/// Corner indices of every face, listed as the `a` endpoint of each edge.
/// Consecutive entries (wrapping) form the face's 4 edges.
const FACE_CORNERS_LUT: [[usize; 4]; FACE_COUNT] = [
    [BLB, BLT, BRT, BRB], // Back
    [FLB, BLB, BLT, FLT], // Left
    [FRB, BRB, BRT, FRT], // Right
    [FRB, BRB, BLB, FLB], // Top
    [FRT, BRT, BLT, FLT], // Bottom
    [FLB, FLT, FRT, FRB], // Front
];

impl FaceDir {
    pub const ALL: [FaceDir; FACE_COUNT] = [
        FaceDir::Back,
        FaceDir::Left,
        FaceDir::Right,
        FaceDir::Top,
        FaceDir::Bottom,
        FaceDir::Front,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns None for indices outside 0..6
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(FaceDir::Back),
            1 => Some(FaceDir::Left),
            2 => Some(FaceDir::Right),
            3 => Some(FaceDir::Top),
            4 => Some(FaceDir::Bottom),
            5 => Some(FaceDir::Front),
            _ => None,
        }
    }

    #[inline]
    pub const fn corners(self) -> [usize; 4] {
        FACE_CORNERS_LUT[self as usize]
    }

    /// Edges in winding order; each edge ends where the next one starts.
    #[inline]
    pub fn edges(self) -> [Edge; 4] {
        let c = self.corners();
        [
            Edge { a: c[0], b: c[1] },
            Edge { a: c[1], b: c[2] },
            Edge { a: c[2], b: c[3] },
            Edge { a: c[3], b: c[0] },
        ]
    }

    /// Grid offset of the neighbour cell that hides this face when filled.
    #[inline]
    pub const fn neighbor_offset(self) -> [i32; 3] {
        match self {
            FaceDir::Back => [0, 0, 1],
            FaceDir::Front => [0, 0, -1],
            FaceDir::Top => [0, -1, 0],
            FaceDir::Bottom => [0, 1, 0],
            FaceDir::Left => [-1, 0, 0],
            FaceDir::Right => [1, 0, 0],
        }
    }
}

/// Ordered pair of corner indices within one voxel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// Compact set of face indices, one bit per face
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const ALL: FaceSet = FaceSet(0b11_1111);
    pub const EMPTY: FaceSet = FaceSet(0);

    #[inline]
    pub const fn contains(self, face: FaceDir) -> bool {
        self.0 & (1 << face as u8) != 0
    }

    /// Returns true if the face was present
    #[inline]
    pub fn remove(&mut self, face: FaceDir) -> bool {
        let present = self.contains(face);
        self.0 &= !(1 << face as u8);
        present
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FaceDir> {
        FaceDir::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl Default for FaceSet {
    fn default() -> Self {
        FaceSet::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_edges_share_endpoints() {
        for face in FaceDir::ALL {
            let edges = face.edges();
            for i in 0..4 {
                assert_eq!(edges[i].b, edges[(i + 1) % 4].a, "{face:?} edge {i}");
            }
        }
    }

    #[test]
    fn face_index_round_trips() {
        for (i, face) in FaceDir::ALL.into_iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(FaceDir::from_index(i), Some(face));
        }
        assert_eq!(FaceDir::from_index(6), None);
    }

    #[test]
    fn face_set_remove_is_reported_once() {
        let mut set = FaceSet::ALL;
        assert_eq!(set.len(), 6);
        assert!(set.remove(FaceDir::Top));
        assert!(!set.remove(FaceDir::Top));
        assert_eq!(set.len(), 5);
        assert!(!set.contains(FaceDir::Top));
        assert_eq!(set.iter().count(), 5);
    }
}
