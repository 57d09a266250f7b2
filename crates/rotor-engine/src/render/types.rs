//! Enumerations for the fixed-function command set.

/// Server-side capabilities toggled with `enable` / `disable`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Capability {
    DepthTest,
    CullFace,
    Dither,
}

/// Depth comparison function.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DepthFunc {
    Never,
    #[default]
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl DepthFunc {
    pub(crate) fn to_wgpu(self) -> wgpu::CompareFunction {
        match self {
            DepthFunc::Never => wgpu::CompareFunction::Never,
            DepthFunc::Less => wgpu::CompareFunction::Less,
            DepthFunc::Equal => wgpu::CompareFunction::Equal,
            DepthFunc::LessEqual => wgpu::CompareFunction::LessEqual,
            DepthFunc::Greater => wgpu::CompareFunction::Greater,
            DepthFunc::NotEqual => wgpu::CompareFunction::NotEqual,
            DepthFunc::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
            DepthFunc::Always => wgpu::CompareFunction::Always,
        }
    }
}

/// Hint targets. Only perspective correction is meaningful here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HintTarget {
    PerspectiveCorrection,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum HintMode {
    #[default]
    DontCare,
    Fastest,
    Nicest,
}

/// Color interpolation across a primitive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ShadeModel {
    Flat,
    #[default]
    Smooth,
}

/// Winding that marks a polygon as front facing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum FrontFace {
    Cw,
    #[default]
    Ccw,
}

impl FrontFace {
    pub(crate) fn to_wgpu(self) -> wgpu::FrontFace {
        match self {
            FrontFace::Cw => wgpu::FrontFace::Cw,
            FrontFace::Ccw => wgpu::FrontFace::Ccw,
        }
    }
}

/// Client-side vertex arrays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ClientArray {
    Vertex,
    Color,
}

/// Buffers affected by `clear`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
}

impl ClearMask {
    pub const COLOR: Self = Self { color: true, depth: false };
    pub const DEPTH: Self = Self { color: false, depth: true };
    pub const COLOR_DEPTH: Self = Self { color: true, depth: true };

    pub fn is_empty(self) -> bool {
        !self.color && !self.depth
    }
}

/// Primitive assembly mode for `draw_elements`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

impl Primitive {
    pub(crate) fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Primitive::Points => wgpu::PrimitiveTopology::PointList,
            Primitive::Lines => wgpu::PrimitiveTopology::LineList,
            Primitive::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            Primitive::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Primitive::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }

    pub(crate) fn is_strip(self) -> bool {
        matches!(self, Primitive::LineStrip | Primitive::TriangleStrip)
    }
}

/// Width of the indices handed to `draw_elements`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IndexType {
    UnsignedByte,
    UnsignedShort,
}

/// Borrowed index data for a single draw.
#[derive(Debug, Copy, Clone)]
pub enum Indices<'a> {
    U8(&'a [u8]),
    U16(&'a [u16]),
}

impl<'a> Indices<'a> {
    pub fn index_type(&self) -> IndexType {
        match self {
            Indices::U8(_) => IndexType::UnsignedByte,
            Indices::U16(_) => IndexType::UnsignedShort,
        }
    }

    /// Number of indices, i.e. the element count of the draw.
    pub fn len(&self) -> usize {
        match self {
            Indices::U8(i) => i.len(),
            Indices::U16(i) => i.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest index referenced, if any.
    pub fn max(&self) -> Option<u16> {
        match self {
            Indices::U8(i) => i.iter().copied().max().map(u16::from),
            Indices::U16(i) => i.iter().copied().max(),
        }
    }

    /// Copies the indices out as `u16`, the narrowest index format wgpu accepts.
    pub fn widen(&self) -> Vec<u16> {
        match self {
            Indices::U8(i) => i.iter().copied().map(u16::from).collect(),
            Indices::U16(i) => i.to_vec(),
        }
    }
}

impl<'a> From<&'a [u8]> for Indices<'a> {
    fn from(i: &'a [u8]) -> Self {
        Indices::U8(i)
    }
}

impl<'a> From<&'a [u16]> for Indices<'a> {
    fn from(i: &'a [u16]) -> Self {
        Indices::U16(i)
    }
}

/// Fixed-function usage errors, latched like `glGetError`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlError {
    /// A numeric argument was out of range (e.g. component count).
    InvalidValue,
    /// The call is not allowed in the current state (e.g. no position array bound).
    InvalidOperation,
}

impl std::fmt::Display for GlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlError::InvalidValue => f.write_str("invalid value"),
            GlError::InvalidOperation => f.write_str("invalid operation"),
        }
    }
}

impl std::error::Error for GlError {}
