//! First-person viewer: where projectiles are fired from and what the camera shows.
//!
//! Angles are radians. Yaw is measured in the XZ plane from +X towards +Z, so the
//! starting yaw of -90° looks down -Z. Movement is planar: the viewer never changes
//! height, which keeps it at the level of the rooms it walks into.

use nalgebra::{Isometry3, Perspective3};

use crate::{
    constants::{
        FOV_Y, MAX_PITCH, MOUSE_SENSITIVITY, VIEWER_SPEED, VIEWER_START, VIEWER_START_PITCH,
        VIEWER_START_YAW, Z_FAR, Z_NEAR,
    },
    types::{Mat4, Point3, Vec3, vec3},
};

/// Per-frame movement intent. Each axis is -1, 0 or +1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    /// +1 forward, -1 backward.
    pub forward: f32,
    /// +1 right, -1 left.
    pub strafe: f32,
}

impl MoveInput {
    pub fn from_keys(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        Self {
            forward: axis(forward, backward),
            strafe: axis(right, left),
        }
    }

    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.forward != 0.0 && self.strafe != 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewer {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Planar speed (m/s).
    pub speed: f32,
    /// Radians per pixel of mouse motion.
    pub sensitivity: f32,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            position: vec3(VIEWER_START),
            yaw: VIEWER_START_YAW,
            pitch: VIEWER_START_PITCH,
            speed: VIEWER_SPEED,
            sensitivity: MOUSE_SENSITIVITY,
        }
    }
}

impl Viewer {
    /// Unit view direction.
    pub fn front(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cy * cp, sp, sy * cp).normalize()
    }

    /// Unit right vector, always horizontal.
    pub fn right(&self) -> Vec3 {
        self.front().cross(&Vec3::y()).normalize()
    }

    /// World-to-view transform (right-handed, +Y up).
    pub fn view_matrix(&self) -> Mat4 {
        let eye = Point3::from(self.position);
        let target = eye + self.front();
        Isometry3::look_at_rh(&eye, &target, &Vec3::y()).to_homogeneous()
    }

    /// OpenGL-style perspective with the standard FOV and clip planes.
    pub fn projection_matrix(aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Perspective3::new(aspect, FOV_Y, Z_NEAR, Z_FAR).to_homogeneous()
    }

    /// Walk along the view direction and strafe, keeping the current height.
    ///
    /// Diagonal input is scaled by 1/sqrt(2) so it is not faster than a single axis.
    pub fn translate(&mut self, input: MoveInput, dt: f32) {
        if dt <= 0.0 || (input.forward == 0.0 && input.strafe == 0.0) {
            return;
        }

        let height = self.position.y;
        let mut velocity = self.speed * dt;
        if input.is_diagonal() {
            velocity *= std::f32::consts::FRAC_1_SQRT_2;
        }

        self.position += self.front() * (input.forward * velocity);
        self.position += self.right() * (input.strafe * velocity);
        self.position.y = height;
    }

    /// Mouse-look. `dy` is positive when the mouse moves up.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1.0e-5
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let v = Viewer::default();
        assert!(close(v.front(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(close(v.right(), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(v.position, Vec3::new(0.0, 0.0, 9.0)));
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let v = Viewer::default();
        let eye = v.view_matrix() * Vector4::new(0.0, 0.0, 9.0, 1.0);
        assert!(eye.xyz().norm() < 1.0e-5);

        // A point in front of the viewer lands on the -Z view axis.
        let ahead = v.view_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(close(ahead.xyz(), Vec3::new(0.0, 0.0, -9.0)));
    }

    #[test]
    fn walking_keeps_height_even_when_pitched() {
        let mut v = Viewer::default();
        v.pitch = 0.5;
        v.translate(MoveInput::from_keys(true, false, false, false), 1.0);
        assert_eq!(v.position.y, 0.0);
        assert!(v.position.z < 9.0);
    }

    #[test]
    fn diagonal_is_not_faster() {
        let mut straight = Viewer::default();
        straight.translate(MoveInput::from_keys(true, false, false, false), 1.0);
        let mut diag = Viewer::default();
        diag.translate(MoveInput::from_keys(true, false, false, true), 1.0);

        let start = Viewer::default().position;
        let d_straight = (straight.position - start).norm();
        let d_diag = (diag.position - start).norm();
        assert!((d_straight - d_diag).abs() < 1.0e-4);
    }

    #[test]
    fn opposite_keys_cancel() {
        let input = MoveInput::from_keys(true, true, true, true);
        assert_eq!(input, MoveInput::default());
        let mut v = Viewer::default();
        v.translate(input, 1.0);
        assert_eq!(v.position, Viewer::default().position);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut v = Viewer::default();
        v.rotate(0.0, 1.0e6);
        assert_eq!(v.pitch, MAX_PITCH);
        v.rotate(0.0, -1.0e7);
        assert_eq!(v.pitch, -MAX_PITCH);
    }

    #[test]
    fn bad_aspect_falls_back_to_square() {
        assert_eq!(
            Viewer::projection_matrix(0.0),
            Viewer::projection_matrix(1.0)
        );
        assert_eq!(
            Viewer::projection_matrix(f32::NAN),
            Viewer::projection_matrix(1.0)
        );
    }
}
