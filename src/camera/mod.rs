/// Orbit-style camera: rotation is applied to the camera's position
/// vector around the world origin, movement happens in world axes
pub mod controller;

pub use controller::{command_for_key, CameraCommand};

use glam::{DMat3, DVec3};

/// How `Camera::rotate` treats the stored rotation angles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// The stored rotation becomes `delta % 360`; repeated equal deltas
    /// leave it unchanged.
    #[default]
    Compatibility,
    /// The stored rotation accumulates `(rotation + delta) % 360`.
    Incremental,
}

/// Degrees to radians after wrapping into (-360, 360)
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    (degrees % 360.0) * (std::f64::consts::PI / 180.0)
}

/// Heuristic focal length used by the projector.
///
/// `(360 / sin(h)) * sin(90° - h)` with `h` the half FOV in radians.
pub fn focal_length_for_fov(fov_degrees: f64) -> f64 {
    let half = deg_to_rad(fov_degrees / 2.0);
    (360.0 / half.sin()) * (deg_to_rad(90.0) - half).sin()
}

/// Rotation matrix for per-axis angles in radians, composed Z * Y * X
/// (the general rotation with yaw = z, pitch = y, roll = x).
pub fn rotation_matrix(radians: DVec3) -> DMat3 {
    let (sx, cx) = radians.x.sin_cos();
    let (sy, cy) = radians.y.sin_cos();
    let (sz, cz) = radians.z.sin_cos();

    // Columns of the row-major matrix written out term by term
    DMat3::from_cols(
        DVec3::new(cy * cz, cy * sz, -sy),
        DVec3::new(sx * sy * cz - cx * sz, sx * sy * sz + cx * cz, sx * cy),
        DVec3::new(cx * sy * cz + sx * sz, cx * sy * sz - sx * cz, cx * cy),
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    /// Degrees per axis, each wrapped into (-360, 360)
    pub rotation: DVec3,
    pub fov: f64,
    pub focal_length: f64,
    pub mode: RotationMode,
}

impl Camera {
    /// The initial rotation is applied to `position` immediately.
    pub fn new(position: DVec3, rotation: DVec3, fov: f64, mode: RotationMode) -> Self {
        let mut camera = Self {
            position,
            rotation: DVec3::ZERO,
            fov,
            focal_length: focal_length_for_fov(fov),
            mode,
        };
        camera.rotate(rotation);
        camera
    }

    /// Update the stored rotation from `delta` (see `RotationMode`) and
    /// rotate the position about the origin by `delta`.
    pub fn rotate(&mut self, delta: DVec3) {
        let base = match self.mode {
            RotationMode::Compatibility => DVec3::ZERO,
            RotationMode::Incremental => self.rotation,
        };
        self.rotation = wrap_degrees(base + delta);

        let radians = match self.mode {
            RotationMode::Compatibility => self.rotation,
            RotationMode::Incremental => wrap_degrees(delta),
        }
        .to_array()
        .map(deg_to_rad);

        self.position = rotation_matrix(DVec3::from_array(radians)) * self.position;
        self.focal_length = focal_length_for_fov(self.fov);
    }

    /// Translate in world axes
    #[inline]
    pub fn move_by(&mut self, offset: DVec3) {
        self.position += offset;
    }
}

#[inline]
fn wrap_degrees(degrees: DVec3) -> DVec3 {
    DVec3::new(degrees.x % 360.0, degrees.y % 360.0, degrees.z % 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn fov_90_gives_focal_length_360() {
        assert!((focal_length_for_fov(90.0) - 360.0).abs() < EPS);
    }

    #[test]
    fn rotation_wraps_sign_preserving() {
        let mut camera = Camera::new(DVec3::ZERO, DVec3::ZERO, 90.0, RotationMode::Compatibility);
        camera.rotate(DVec3::new(370.0, -725.0, 0.5));
        assert!((camera.rotation - DVec3::new(10.0, -5.0, 0.5)).abs().max_element() < EPS);
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let m = rotation_matrix(DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
        let v = m * DVec3::X;
        assert!((v - DVec3::Y).abs().max_element() < EPS);
    }

    #[test]
    fn incremental_mode_accumulates_rotation() {
        let mut camera = Camera::new(DVec3::ZERO, DVec3::ZERO, 90.0, RotationMode::Incremental);
        camera.rotate(DVec3::new(0.0, 0.0, 1.0));
        camera.rotate(DVec3::new(0.0, 0.0, 1.0));
        assert!((camera.rotation.z - 2.0).abs() < EPS);

        let mut compat = Camera::new(DVec3::ZERO, DVec3::ZERO, 90.0, RotationMode::Compatibility);
        compat.rotate(DVec3::new(0.0, 0.0, 1.0));
        compat.rotate(DVec3::new(0.0, 0.0, 1.0));
        assert!((compat.rotation.z - 1.0).abs() < EPS);
    }
}
