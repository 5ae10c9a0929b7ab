use nalgebra::Vector4;

/// Defines a vertex and attributes in screen-space, which is used by the rasterizer.
///
/// Clip-space vertices are transformed to screen-space after the vertex stage
/// but before the pixel stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenVertex<K> {
    /// Screen-space vertex position. `x` and `y` are in pixels, `z` is the normalized
    /// device depth and `w` is the reciprocal of the clip-space `w`.
    ///
    /// Similar to `gl_FragCoord`
    pub position: Vector4<f32>,
    /// Per-vertex data passed through to the pixel stage
    pub attributes: K,
}
