use super::Dimensions;

/// Integer pixel coordinate, with the origin in the top-left corner
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Default)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline(always)]
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Row-major linear index of this coordinate
    #[inline]
    pub fn into_index(self, dimensions: Dimensions) -> usize {
        self.y as usize * dimensions.width as usize + self.x as usize
    }

    /// Inverse of `into_index`
    #[inline]
    pub fn from_index(index: usize, dimensions: Dimensions) -> Coordinate {
        let width = dimensions.width as usize;

        Coordinate::new((index % width) as u32, (index / width) as u32)
    }
}
