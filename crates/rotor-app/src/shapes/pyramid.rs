use super::{Geometry, Shape};

const POSITIONS: [[f32; 3]; 5] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [0.0, 1.0, 0.0], // apex
];

const COLORS: [[f32; 4]; 5] = [
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

// Four sides around the apex; the base is left open.
const INDICES: [u8; 12] = [
    2, 4, 3, //
    1, 4, 2, //
    0, 4, 1, //
    4, 0, 3, //
];

/// Square-based pyramid with its apex at +y. Only the four sides are drawn.
#[derive(Debug, Clone)]
pub struct Pyramid {
    geometry: Geometry,
}

impl Pyramid {
    pub fn new() -> Self {
        Self {
            geometry: Geometry::new(&POSITIONS, &COLORS, &INDICES),
        }
    }
}

impl Default for Pyramid {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Pyramid {
    fn name(&self) -> &'static str {
        "pyramid"
    }

    fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}
