use super::Coordinate;

/// Anything laid out as a `width * height` grid of pixels
pub trait HasDimensions {
    fn dimensions(&self) -> Dimensions;

    /// Whether `coord` addresses a pixel of this grid
    #[inline]
    fn in_bounds(&self, coord: Coordinate) -> bool {
        self.dimensions().in_bounds(coord)
    }
}

/// Width and height of a viewport or render target, in pixels
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline(always)]
    pub fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Total number of pixels
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Both dimensions are non-zero
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width and height as floating point values, as used for screen mapping
    #[inline]
    pub fn as_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}
