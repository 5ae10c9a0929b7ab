use nalgebra::{Matrix4, Vector4};

use crate::error::StageResult;
use crate::geometry::ClipVertex;

/// Vertex stage.
///
/// Receives the homogeneous object-space position of a vertex (`w = 1`) along with the vertex itself,
/// and returns the clip-space position together with the attributes to interpolate across the triangle.
/// Attributes are usually passed through unchanged, interpolation happens later in the rasterizer.
pub trait VertexStage<V>: Send + Sync {
    fn process(&self, position: Vector4<f32>, vertex: &V) -> StageResult<ClipVertex<V>>;
}

impl<V, F> VertexStage<V> for F where F: Fn(Vector4<f32>, &V) -> StageResult<ClipVertex<V>> + Send + Sync {
    #[inline]
    fn process(&self, position: Vector4<f32>, vertex: &V) -> StageResult<ClipVertex<V>> {
        self(position, vertex)
    }
}

/// Vertex stage applying a single combined transform, usually `projection * view * world`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformStage {
    pub matrix: Matrix4<f32>,
}

impl TransformStage {
    pub fn new(matrix: Matrix4<f32>) -> TransformStage {
        TransformStage { matrix }
    }

    /// Passes positions through untouched, so object-space is clip-space
    pub fn identity() -> TransformStage {
        TransformStage { matrix: Matrix4::identity() }
    }
}

impl<V> VertexStage<V> for TransformStage where V: Clone {
    #[inline]
    fn process(&self, position: Vector4<f32>, vertex: &V) -> StageResult<ClipVertex<V>> {
        Ok(ClipVertex::new(self.matrix * position, vertex.clone()))
    }
}
