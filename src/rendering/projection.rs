/// Vertex to canvas projection
use crate::camera::Camera;
use crate::error::ProjectionError;
use glam::{DVec2, DVec3};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Scale by `focal - camera.z` and divide by the vertex's absolute z.
    #[default]
    Compatibility,
    /// Scale by the focal length and divide by the depth relative to the camera.
    CameraRelative,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Projector {
    pub mode: ProjectionMode,
}

impl Projector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self { mode }
    }

    /// Project a world-space vertex to canvas coordinates.
    ///
    /// No viewport transform is applied: the result is used as canvas
    /// pixels directly, with y growing downwards.
    pub fn project(&self, camera: &Camera, vertex: DVec3) -> Result<DVec2, ProjectionError> {
        let (scale, depth) = match self.mode {
            ProjectionMode::Compatibility => {
                (camera.focal_length - camera.position.z, vertex.z)
            }
            ProjectionMode::CameraRelative => {
                let depth = vertex.z - camera.position.z;
                if depth < 0.0 {
                    return Err(ProjectionError::BehindCamera { vertex });
                }
                (camera.focal_length, depth)
            }
        };

        if depth == 0.0 {
            return Err(ProjectionError::ZeroDepth { vertex });
        }

        let offset = vertex - camera.position;
        let pixel = DVec2::new(offset.x * scale / depth, offset.y * scale / depth);
        if !pixel.is_finite() {
            return Err(ProjectionError::NonFinite { vertex });
        }
        Ok(pixel)
    }

    /// Project the four corners of a face
    pub fn project_quad(
        &self,
        camera: &Camera,
        corners: [DVec3; 4],
    ) -> Result<[DVec2; 4], ProjectionError> {
        let mut points = [DVec2::ZERO; 4];
        for (point, corner) in points.iter_mut().zip(corners) {
            *point = self.project(camera, corner)?;
        }
        Ok(points)
    }
}
