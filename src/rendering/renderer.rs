/// Painter's-algorithm frame renderer
/// Each voxel contributes its nearest visible faces; fills are drawn first,
/// outlines in a second pass over the same records
use std::time::Instant;

use glam::DVec2;
use log::warn;

use super::projection::{ProjectionMode, Projector};
use super::surface::RenderSurface;
use crate::camera::Camera;
use crate::error::RenderError;
use crate::perf::FrameStats;
use crate::perf_scope;
use crate::scene::Scene;
use crate::voxel::{FaceDir, Voxel, FACE_COUNT};
use crate::world::VoxelId;
use crate::TICK_INTERVAL;

#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Size of the window and framebuffer created for this renderer
    pub width: usize,
    pub height: usize,
    /// Drawn over the cleared canvas every frame
    pub background: String,
    pub outline: String,
    /// How many of each voxel's nearest faces are considered
    pub faces_per_voxel: usize,
    pub projection: ProjectionMode,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 720,
            height: 480,
            background: "#FFFFFF4f".to_owned(),
            outline: "#000000".to_owned(),
            faces_per_voxel: 3,
            projection: ProjectionMode::Compatibility,
        }
    }
}

/// One projected face queued for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub voxel: VoxelId,
    pub face: FaceDir,
    pub points: [DVec2; 4],
    pub color: String,
}

pub struct FrameRenderer {
    pub config: RendererConfig,
    projector: Projector,
    records: Vec<DrawRecord>,
}

impl FrameRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            projector: Projector::new(config.projection),
            config,
            records: Vec::new(),
        }
    }

    /// Records queued by the last `render` or `build_draw_list`
    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    /// Faces of `voxel` ordered nearest-first by centroid distance to the camera
    pub fn faces_by_distance(voxel: &Voxel, camera: &Camera) -> [(f64, FaceDir); FACE_COUNT] {
        let mut distances = FaceDir::ALL.map(|face| {
            (voxel.face_centroid(face).distance(camera.position), face)
        });
        // Equal distances go highest face index first
        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(b.1.cmp(&a.1)));
        distances
    }

    /// Queue the nearest visible faces of every voxel, in scene order.
    /// Returns how many nearest faces were skipped as interior.
    pub fn build_draw_list(&mut self, scene: &Scene, camera: &Camera) -> Result<usize, RenderError> {
        perf_scope!("build_draw_list");
        self.records.clear();
        let mut skipped = 0;

        for (id, voxel) in scene.voxels().iter().enumerate() {
            let nearest = Self::faces_by_distance(voxel, camera);

            for &(_, face) in nearest.iter().take(self.config.faces_per_voxel) {
                if !voxel.is_face_visible(face) {
                    skipped += 1;
                    continue;
                }

                let points = self
                    .projector
                    .project_quad(camera, voxel.face_corners(face))
                    .map_err(|source| RenderError::Projection {
                        voxel: id,
                        face,
                        source,
                    })?;

                self.records.push(DrawRecord {
                    voxel: id,
                    face,
                    points,
                    color: voxel.color().to_owned(),
                });
            }
        }

        Ok(skipped)
    }

    /// Draw one full frame onto `surface`.
    ///
    /// Nothing past the background is drawn if a projection fails.
    pub fn render<S: RenderSurface>(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        surface: &mut S,
    ) -> Result<FrameStats, RenderError> {
        let frame_start = Instant::now();
        let (width, height) = surface.size();
        let (width, height) = (width as f64, height as f64);

        surface.clear_rect(0.0, 0.0, width, height);
        surface.set_fill_color(&self.config.background);
        surface.fill_rect(0.0, 0.0, width, height);

        let culled_skipped = self.build_draw_list(scene, camera)?;

        {
            perf_scope!("fill_pass");
            for record in &self.records {
                surface.set_fill_color(&record.color);
                surface.fill_polygon(&record.points);
            }
        }

        {
            perf_scope!("outline_pass");
            surface.set_stroke_color(&self.config.outline);
            for record in &self.records {
                for i in 0..4 {
                    surface.stroke_line(record.points[i], record.points[(i + 1) % 4]);
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed > TICK_INTERVAL {
            warn!(
                "frame took {:.2}ms, longer than the {}ms tick",
                elapsed.as_secs_f64() * 1000.0,
                TICK_INTERVAL.as_millis()
            );
        }

        Ok(FrameStats {
            records: self.records.len(),
            culled_skipped,
            elapsed,
        })
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::RotationMode;
    use glam::DVec3;

    #[test]
    fn front_face_is_nearest_for_camera_in_front() {
        let voxel = Voxel::new(DVec3::new(0.0, 0.0, 100.0), "#fff");
        let camera = Camera::new(DVec3::new(5.0, 5.0, -500.0), DVec3::ZERO, 90.0, RotationMode::default());
        let order = FrameRenderer::faces_by_distance(&voxel, &camera);
        assert_eq!(order[0].1, FaceDir::Front);
        assert_eq!(order[5].1, FaceDir::Back);
        assert!(order.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn tied_faces_order_by_descending_index() {
        // Camera centred on the voxel in x and y: the four side faces tie
        let voxel = Voxel::new(DVec3::ZERO, "#fff");
        let camera = Camera::new(DVec3::new(5.0, 5.0, -500.0), DVec3::ZERO, 90.0, RotationMode::default());
        let order = FrameRenderer::faces_by_distance(&voxel, &camera);
        let faces: Vec<FaceDir> = order.iter().map(|&(_, face)| face).collect();
        assert_eq!(
            faces,
            [
                FaceDir::Front,
                FaceDir::Bottom,
                FaceDir::Top,
                FaceDir::Right,
                FaceDir::Left,
                FaceDir::Back,
            ]
        );
    }
}
