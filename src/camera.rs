use glam::{Mat4, Vec3};

/// Drawable size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Browser sizes arrive as doubles; negative or NaN becomes 0.
    pub fn from_f64(width: f64, height: f64) -> Self {
        Self::new(width.max(0.0) as u32, height.max(0.0) as u32)
    }

    /// A collapsed element has no meaningful aspect; treat it as square.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Perspective camera looking down -Z from `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, viewport: Viewport, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect: viewport.aspect(),
            near,
            far,
            position: Vec3::ZERO,
        }
    }

    pub fn at_z(mut self, z: f32) -> Self {
        self.position.z = z;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_aspect() {
        assert_eq!(Viewport::new(1920, 1080).aspect(), 1920.0 / 1080.0);
        assert_eq!(Viewport::new(300, 0).aspect(), 1.0);
        assert_eq!(Viewport::from_f64(-5.0, 10.5), Viewport::new(0, 10));
    }

    #[test]
    fn origin_projects_in_front_of_camera() {
        let cam = PerspectiveCamera::new(75.0, Viewport::new(800, 600), 0.1, 1000.0).at_z(30.0);
        let clip = cam.projection() * cam.view() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }
}
