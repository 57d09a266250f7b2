use glam::{Mat4, Vec3};

/// Matrices a draw call is issued with.
///
/// Replaces the fixed-function projection/model-view stacks: callers compute
/// both values and hand them to the draw call explicitly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        projection: Mat4::IDENTITY,
        model_view: Mat4::IDENTITY,
    };

    pub const fn new(projection: Mat4, model_view: Mat4) -> Self {
        Self { projection, model_view }
    }

    /// Eye space to GL clip space.
    #[inline]
    pub fn clip(&self) -> Mat4 {
        self.projection * self.model_view
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation of `angle_deg` degrees about `axis`, with `glRotatef` semantics:
/// the axis is normalized first, and a zero-length axis yields identity.
pub fn rotation_deg(angle_deg: f32, axis: Vec3) -> Mat4 {
    match axis.try_normalize() {
        Some(axis) => Mat4::from_axis_angle(axis, angle_deg.to_radians()),
        None => Mat4::IDENTITY,
    }
}
