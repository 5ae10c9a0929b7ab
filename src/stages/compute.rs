use crate::error::StageResult;
use crate::pixel::Pixel;
use crate::resource::Resource;

/// Compute stage.
///
/// Runs once for every pixel of the final image after all triangles have been resolved.
/// `texture` is the complete resolved color buffer and `index` the linear index of the pixel
/// being produced, so spatial filters can read any neighbor. The source is never written during
/// the pass, so invocations are independent of one another and may run in any order.
pub trait ComputeStage<P>: Send + Sync {
    fn compute(&self, texture: &Resource<P>, index: usize) -> StageResult<P>;
}

impl<P, F> ComputeStage<P> for F where F: Fn(&Resource<P>, usize) -> StageResult<P> + Send + Sync {
    #[inline]
    fn compute(&self, texture: &Resource<P>, index: usize) -> StageResult<P> {
        self(texture, index)
    }
}

/// Compute stage copying every pixel unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl<P> ComputeStage<P> for Passthrough where P: Pixel {
    #[inline]
    fn compute(&self, texture: &Resource<P>, index: usize) -> StageResult<P> {
        Ok(*texture.item(index)?)
    }
}
