use super::{Geometry, Shape};

const POSITIONS: [[f32; 3]; 3] = [
    [0.0, 1.0, 0.0],   // top
    [-1.0, -1.0, 0.0], // bottom left
    [1.0, -1.0, 0.0],  // bottom right
];

const COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

const INDICES: [u8; 3] = [0, 1, 2];

/// A single red/green/blue triangle in the z = 0 plane.
#[derive(Debug, Clone)]
pub struct Triangle {
    geometry: Geometry,
}

impl Triangle {
    pub fn new() -> Self {
        Self {
            geometry: Geometry::new(&POSITIONS, &COLORS, &INDICES),
        }
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}
