use crate::error::StageResult;
use crate::pixel::Color;

/// Pixel stage.
///
/// Computes the color of one fragment from the perspective-correct interpolated vertex attributes
/// and the fragment's depth. It is only invoked for fragments that pass the depth test,
/// and must not have side effects beyond computing its result.
pub trait PixelStage<K>: Send + Sync {
    fn shade(&self, attributes: &K, depth: f32) -> StageResult<Color>;
}

impl<K, F> PixelStage<K> for F where F: Fn(&K, f32) -> StageResult<Color> + Send + Sync {
    #[inline]
    fn shade(&self, attributes: &K, depth: f32) -> StageResult<Color> {
        self(attributes, depth)
    }
}

/// Pixel stage that ignores its inputs and returns the same color for every fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatColor(pub Color);

impl<K> PixelStage<K> for FlatColor {
    #[inline]
    fn shade(&self, _: &K, _: f32) -> StageResult<Color> {
        Ok(self.0)
    }
}
