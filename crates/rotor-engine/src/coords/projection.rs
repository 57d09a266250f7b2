use glam::Mat4;

/// Perspective projection parameters, `gluPerspective`-style.
///
/// Kept as plain values so callers can inspect exactly what was requested;
/// [`Perspective::matrix`] produces the GL clip-space matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Perspective {
    /// Vertical field of view, degrees.
    pub fov_y_deg: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub const fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov_y_deg, aspect, near, far }
    }

    /// Right-handed projection into GL clip space (depth in [-1, 1]).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }
}
