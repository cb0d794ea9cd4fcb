/// Keyboard mapping for the camera
/// Keys use DOM-style identifiers ("w", "Shift", " ") so any front end can forward them
use super::Camera;
use glam::DVec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CameraCommand {
    /// World-axis translation
    Move(DVec3),
    /// Rotation delta in degrees
    Rotate(DVec3),
}

impl CameraCommand {
    pub fn apply(self, camera: &mut Camera) {
        match self {
            CameraCommand::Move(offset) => camera.move_by(offset),
            CameraCommand::Rotate(delta) => camera.rotate(delta),
        }
    }
}

/// Camera command bound to `key`, or None for unrecognised keys
pub fn command_for_key(key: &str) -> Option<CameraCommand> {
    use CameraCommand::{Move, Rotate};

    let command = match key {
        "w" => Move(DVec3::new(0.0, 0.0, 10.0)),
        "s" => Move(DVec3::new(0.0, 0.0, -10.0)),
        "a" => Move(DVec3::new(1.0, 0.0, 0.0)),
        "d" => Move(DVec3::new(-1.0, 0.0, 0.0)),
        "Shift" => Move(DVec3::new(0.0, -1.0, 0.0)),
        " " | "Space" => Move(DVec3::new(0.0, 1.0, 0.0)),
        "e" => Rotate(DVec3::new(0.0, 0.0, 1.0)),
        "q" => Rotate(DVec3::new(0.0, 0.0, -1.0)),
        "c" => Rotate(DVec3::new(0.1, 0.0, 0.0)),
        "v" => Rotate(DVec3::new(-0.1, 0.0, 0.0)),
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::RotationMode;

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(command_for_key("x"), None);
        assert_eq!(command_for_key("W"), None);
        assert_eq!(command_for_key(""), None);
    }

    #[test]
    fn forward_key_moves_along_world_z() {
        let mut camera = Camera::new(DVec3::ZERO, DVec3::ZERO, 90.0, RotationMode::default());
        command_for_key("w").unwrap().apply(&mut camera);
        command_for_key("a").unwrap().apply(&mut camera);
        command_for_key(" ").unwrap().apply(&mut camera);
        assert_eq!(camera.position, DVec3::new(1.0, 1.0, 10.0));
    }
}
