//! Vertex layout consumed by the vertex stage

use nalgebra::{Point3, Vector2, Vector3, Vector4};

use crate::pixel::Color;

/// Vertex types the rasterizer can draw.
///
/// The rasterizer only needs the object-space position to build the homogeneous
/// coordinate handed to the vertex stage, everything else is opaque to it.
pub trait HasPosition {
    fn position(&self) -> Point3<f32>;

    /// Position as a homogeneous coordinate with `w = 1`
    #[inline]
    fn homogeneous_position(&self) -> Vector4<f32> {
        self.position().to_homogeneous()
    }
}

crate::declare_attributes! {
    /// Mesh vertex with position, normal, texture coordinate and the three
    /// material lighting terms, 17 floats in total.
    #[derive(Debug, Clone, Copy, PartialEq)]
    #[repr(C)]
    pub struct Vertex {
        pub position: Point3<f32>,
        pub normal: Vector3<f32>,
        pub uv: Vector2<f32>,
        pub ambient: Color,
        pub diffuse: Color,
        pub emissive: Color,
    }
}

impl Vertex {
    /// Vertex at `position` with every other attribute zeroed
    pub fn at(x: f32, y: f32, z: f32) -> Vertex {
        Vertex {
            position: Point3::new(x, y, z),
            ..Vertex::default()
        }
    }

    /// Returns the vertex with all three lighting terms set to `color`
    pub fn with_color(self, color: Color) -> Vertex {
        Vertex { ambient: color, diffuse: color, emissive: color, ..self }
    }
}

impl Default for Vertex {
    fn default() -> Vertex {
        Vertex {
            position: Point3::origin(),
            normal: Vector3::zeros(),
            uv: Vector2::zeros(),
            ambient: Color::BLACK,
            diffuse: Color::BLACK,
            emissive: Color::BLACK,
        }
    }
}

impl HasPosition for Vertex {
    #[inline(always)]
    fn position(&self) -> Point3<f32> { self.position }
}

#[cfg(test)]
mod test {
    use std::mem::size_of;

    use super::*;

    #[test]
    fn test_vertex_is_seventeen_floats() {
        assert_eq!(size_of::<Vertex>(), 17 * size_of::<f32>());
    }

    #[test]
    fn test_homogeneous_position() {
        let v = Vertex::at(1.0, -2.0, 3.0);

        assert_eq!(v.homogeneous_position(), Vector4::new(1.0, -2.0, 3.0, 1.0));
    }
}
