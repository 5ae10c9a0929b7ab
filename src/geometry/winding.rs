//! Triangle winding order

/// Order in which a triangle's vertices appear on screen, looking at the final image.
///
/// A closed mesh modeled with a consistent winding shows the opposite winding on every
/// triangle facing away from the camera, so those can be discarded with
/// [`Rasterizer::cull_faces`](../../rasterizer/struct.Rasterizer.html#method.cull_faces).
///
/// ```text
///     Clockwise         CounterClockwise
///
///    a ------> b          a <------ c
///     ^       /            \       ^
///      \     /              \     /
///       \   v                v   /
///         c                    b
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    Clockwise,
    CounterClockwise,
}

impl FaceWinding {
    /// Winding of a triangle from its signed area in screen-space, where y grows downward.
    ///
    /// Returns `None` for zero-area triangles.
    pub fn from_signed_area(area: f32) -> Option<FaceWinding> {
        if area > 0.0 {
            Some(FaceWinding::Clockwise)
        } else if area < 0.0 {
            Some(FaceWinding::CounterClockwise)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_signed_area() {
        assert_eq!(FaceWinding::from_signed_area(3.5), Some(FaceWinding::Clockwise));
        assert_eq!(FaceWinding::from_signed_area(-0.1), Some(FaceWinding::CounterClockwise));
        assert_eq!(FaceWinding::from_signed_area(0.0), None);
        assert_eq!(FaceWinding::from_signed_area(std::f32::NAN), None);
    }
}
