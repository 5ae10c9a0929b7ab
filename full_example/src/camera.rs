use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

use crate::settings::Settings;

/// First-person camera described by a position and two angles.
///
/// `theta` rotates around the vertical axis, `phi` tilts up and down. Both are in degrees,
/// and with both at zero the camera looks down the negative z-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub theta: f32,
    pub phi: f32,
    /// Vertical field of view in degrees
    pub angle_of_view: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn from_settings(settings: &Settings) -> Camera {
        let [x, y, z] = settings.camera_position;

        Camera {
            position: Point3::new(x, y, z),
            theta: settings.camera_theta,
            phi: settings.camera_phi,
            angle_of_view: settings.camera_angle_of_view,
            z_near: settings.camera_z_near,
            z_far: settings.camera_z_far,
            width: settings.width as f32,
            height: settings.height as f32,
        }
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Unit vector the camera is looking along
    pub fn direction(&self) -> Vector3<f32> {
        let (theta, phi) = (self.theta.to_radians(), self.phi.to_radians());

        Vector3::new(theta.sin() * phi.cos(),
                     phi.sin(),
                     -theta.cos() * phi.cos())
    }

    pub fn right(&self) -> Vector3<f32> {
        let theta = self.theta.to_radians();

        Vector3::new(theta.cos(), 0.0, theta.sin())
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(&self.direction())
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Isometry3::look_at_rh(&self.position, &(self.position + self.direction()), &self.up()).to_homogeneous()
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio(), self.angle_of_view.to_radians(), self.z_near, self.z_far).to_homogeneous()
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use super::*;

    fn camera() -> Camera {
        Camera::from_settings(&Settings::default())
    }

    #[test]
    fn test_default_direction() {
        let camera = camera();

        assert!((camera.direction() - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
        assert!((camera.up() - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_view_matrix_moves_camera_to_origin() {
        let mut camera = camera();
        camera.theta = 90.0;

        let view = camera.view_matrix();

        let eye = view * camera.position.to_homogeneous();
        assert!(eye.xyz().norm() < 1e-5);

        // a point straight ahead ends up on the negative z-axis
        let ahead = view * (camera.position + camera.direction() * 2.0).to_homogeneous();
        assert!((ahead - Vector4::new(0.0, 0.0, -2.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_projection_depth_range() {
        let camera = camera();
        let projection = camera.projection_matrix();

        let near = projection * Vector4::new(0.0, 0.0, -camera.z_near, 1.0);
        let far = projection * Vector4::new(0.0, 0.0, -camera.z_far, 1.0);

        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }
}
