//! Render target set

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Dimensions, HasDimensions};
use crate::pixel::Pixel;
use crate::resource::Resource;

/// Depth value of an empty pixel, equal to the farthest away anything can be.
///
/// Smaller depth values are nearer, so the first fragment written to a cleared pixel always passes the depth test.
pub const MAX_DEPTH: f32 = ::std::f32::MAX;

/// Working color buffer, depth buffer and final color buffer, all sharing one resolution.
#[derive(Debug, Clone)]
pub struct RenderTargets<P> {
    dimensions: Dimensions,
    pub(crate) color: Resource<P>,
    pub(crate) depth: Resource<f32>,
    pub(crate) final_color: Resource<P>,
}

impl<P> RenderTargets<P> where P: Pixel {
    /// Allocates all three targets.
    ///
    /// Color targets start out as `P::default()`, the depth buffer as [`MAX_DEPTH`].
    pub fn new(dimensions: Dimensions) -> RenderResult<RenderTargets<P>> {
        if !dimensions.is_valid() {
            return Err(RenderError::InvalidViewport { width: dimensions.width, height: dimensions.height });
        }

        let Dimensions { width, height } = dimensions;
        let (width, height) = (width as usize, height as usize);

        let mut depth = Resource::with_dimensions(width, height)?;
        depth.fill(MAX_DEPTH);

        Ok(RenderTargets {
            dimensions,
            color: Resource::with_dimensions(width, height)?,
            depth,
            final_color: Resource::with_dimensions(width, height)?,
        })
    }

    /// Fills the working color buffer with `color` and resets the depth buffer
    pub fn clear(&mut self, color: P) {
        self.color.fill(color);
        self.depth.fill(MAX_DEPTH);
    }

    #[inline]
    pub fn color(&self) -> &Resource<P> { &self.color }

    #[inline]
    pub fn depth(&self) -> &Resource<f32> { &self.depth }

    #[inline]
    pub fn final_color(&self) -> &Resource<P> { &self.final_color }
}

impl<P> HasDimensions for RenderTargets<P> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
