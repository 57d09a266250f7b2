use rotor_engine::coords::Transform;
use rotor_engine::render::{ClientArray, FrontFace, Indices, Primitive, RenderContext};

/// Positions, per-vertex RGBA colors and CCW triangle indices.
///
/// Invariants (checked in debug builds; shapes are built from constants, so a
/// violation is an authoring bug):
/// - one color per position
/// - index count is a multiple of three
/// - every index names an existing vertex
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u8>,
}

impl Geometry {
    pub fn new(positions: &[[f32; 3]], colors: &[[f32; 4]], indices: &[u8]) -> Self {
        debug_assert_eq!(positions.len(), colors.len(), "one color per vertex");
        debug_assert_eq!(indices.len() % 3, 0, "indices must form whole triangles");
        debug_assert!(
            indices.iter().all(|&i| usize::from(i) < positions.len()),
            "index out of range"
        );

        Self {
            positions: positions.to_vec(),
            colors: colors.to_vec(),
            indices: indices.to_vec(),
        }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Issues the client-array draw sequence:
    /// CCW front face, enable + bind positions and colors, one indexed
    /// triangle-list draw, disable both arrays again.
    pub fn draw(&self, gl: &mut dyn RenderContext, transform: &Transform) {
        gl.set_front_face(FrontFace::Ccw);

        gl.enable_client_state(ClientArray::Vertex);
        gl.vertex_pointer(3, bytemuck::cast_slice(&self.positions));
        gl.enable_client_state(ClientArray::Color);
        gl.color_pointer(4, bytemuck::cast_slice(&self.colors));

        gl.draw_elements(Primitive::Triangles, Indices::U8(&self.indices), transform);

        // Leave the context clean for whoever draws next.
        gl.disable_client_state(ClientArray::Vertex);
        gl.disable_client_state(ClientArray::Color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, CallLog};
    use rotor_engine::render::{FixedFunctionState, IndexType, Recorder};

    fn quad() -> Geometry {
        Geometry::new(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            &[[1.0, 1.0, 1.0, 1.0]; 4],
            &[0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn counts() {
        let g = quad();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.face_count(), 2);
    }

    #[test]
    fn draw_sequence_is_bracketed_by_client_state() {
        let mut log = CallLog::default();
        quad().draw(&mut log, &Transform::IDENTITY);

        assert_eq!(log.calls.first(), Some(&Call::FrontFace(FrontFace::Ccw)));
        assert_eq!(
            log.calls[1..],
            [
                Call::EnableClientState(ClientArray::Vertex),
                Call::VertexPointer { size: 3, len: 12 },
                Call::EnableClientState(ClientArray::Color),
                Call::ColorPointer { size: 4, len: 16 },
                Call::DrawElements {
                    mode: Primitive::Triangles,
                    count: 6,
                    index_type: IndexType::UnsignedByte,
                    transform: Transform::IDENTITY,
                },
                Call::DisableClientState(ClientArray::Vertex),
                Call::DisableClientState(ClientArray::Color),
            ]
        );
    }

    #[test]
    fn draw_leaves_arrays_disabled_on_a_real_recorder() {
        let mut state = FixedFunctionState::for_surface(16, 16);
        let mut gl = Recorder::new(&mut state);
        quad().draw(&mut gl, &Transform::IDENTITY);
        assert_eq!(gl.take_error(), None);

        let list = gl.finish();
        assert_eq!(list.draws().count(), 1);
        assert!(!state.vertex_array.enabled);
        assert!(!state.color_array.enabled);
    }
}
