use nalgebra::Vector4;
use nalgebra::coordinates::XYZW;

use crate::interpolate::Interpolate;

use super::{Dimensions, ScreenVertex};

/// Defines a vertex and attributes in clip-space, which is produced by the vertex stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipVertex<K> {
    /// Clip-space vertex position. This isn't very useful to the user unless normalized.
    pub position: Vector4<f32>,
    /// Per-vertex data passed through to the pixel stage, such as normals, texture coordinates
    /// and material colors.
    pub attributes: K,
}

impl<K> Interpolate for ClipVertex<K> where K: Interpolate {
    #[inline]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        ClipVertex {
            position: Interpolate::barycentric_interpolate(u, &x1.position, v, &x2.position, w, &x3.position),
            attributes: Interpolate::barycentric_interpolate(u, &x1.attributes, v, &x2.attributes, w, &x3.attributes),
        }
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        ClipVertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
            attributes: Interpolate::linear_interpolate(t, &x1.attributes, &x2.attributes),
        }
    }
}

impl<K> ClipVertex<K> {
    /// Creates a new `ClipVertex` from the given clip-space position and attributes
    #[inline(always)]
    pub fn new(position: Vector4<f32>, attributes: K) -> ClipVertex<K> {
        ClipVertex { position, attributes }
    }

    /// Divides by `w` and maps the normalized device coordinates onto the viewport.
    ///
    /// This assumes a viewport in the shape of:
    ///
    /// ```text
    /// 0,0-----------------x
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  y-----------------x,y
    /// ```
    ///
    /// where the y-axis is flipped. The resulting `z` is the NDC depth and `w` holds `1/w`,
    /// which is needed for perspective-correct interpolation.
    pub fn normalize(self, viewport: Dimensions) -> ScreenVertex<K> {
        let (width, height) = viewport.as_f32();

        let XYZW { x, y, z, w } = *self.position;

        let inv_w = 1.0 / w;

        ScreenVertex {
            position: Vector4::new(
                (1.0 + x * inv_w) * width / 2.0,
                (1.0 - y * inv_w) * height / 2.0,
                z * inv_w,
                inv_w
            ),
            attributes: self.attributes,
        }
    }
}
