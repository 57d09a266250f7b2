/// Viewport rectangle in physical pixels, bottom-left origin (GL convention).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole `width` x `height` surface.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Converts to a top-left-origin rect clipped to a `target_w` x `target_h`
    /// render target, as `(x, y, w, h)`.
    ///
    /// Returns `None` when nothing of the viewport lies inside the target.
    pub fn to_target_rect(self, target_w: u32, target_h: u32) -> Option<(f32, f32, f32, f32)> {
        let x0 = (self.x as i64).clamp(0, target_w as i64);
        let x1 = (self.x as i64 + self.width as i64).clamp(0, target_w as i64);

        // Flip Y: GL's bottom edge `y` becomes `target_h - (y + height)` from the top.
        let top = target_h as i64 - (self.y as i64 + self.height as i64);
        let bottom = target_h as i64 - self.y as i64;
        let y0 = top.clamp(0, target_h as i64);
        let y1 = bottom.clamp(0, target_h as i64);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as f32, y0 as f32, (x1 - x0) as f32, (y1 - y0) as f32))
    }
}
