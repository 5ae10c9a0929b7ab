//! Clipping planes

use nalgebra::coordinates::XYZW;
use smallvec::SmallVec;

use crate::geometry::ClipVertex;
use crate::interpolate::Interpolate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClippingPlane {
    Left,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

/// All clipping planes in a constant array. Useful for iterating over all of them.
pub const ALL_CLIPPING_PLANES: [ClippingPlane; 6] = [
    ClippingPlane::Left,
    ClippingPlane::Right,
    ClippingPlane::Top,
    ClippingPlane::Bottom,
    ClippingPlane::Near,
    ClippingPlane::Far
];

/// Planes that triangles are actually cut against.
///
/// The side planes are left to the screen-space bounding box clamp.
pub const DEPTH_CLIPPING_PLANES: [ClippingPlane; 2] = [
    ClippingPlane::Near,
    ClippingPlane::Far
];

/// A triangle clipped against one or more planes is a convex polygon of at most
/// three plus one vertex per plane, so two planes fit inline.
pub type ClippedPolygon<K> = SmallVec<[ClipVertex<K>; 5]>;

impl ClippingPlane {
    /// Signed distance-like value, non-negative when the point is inside the plane.
    ///
    /// Uses the OpenGL clip volume `-w <= x, y, z <= w`.
    #[inline]
    pub fn distance<K>(self, v: &ClipVertex<K>) -> f32 {
        let XYZW { x, y, z, w } = *v.position;

        match self {
            ClippingPlane::Left => w + x,
            ClippingPlane::Right => w - x,
            ClippingPlane::Top => w - y,
            ClippingPlane::Bottom => w + y,
            ClippingPlane::Near => w + z,
            ClippingPlane::Far => w - z,
        }
    }

    /// Check if the clipping plane has the given clip-space point inside of it
    #[inline]
    pub fn has_inside<K>(self, v: &ClipVertex<K>) -> bool {
        self.distance(v) >= 0.0
    }

    /// Find the intersection of a line and the clipping plane
    #[inline]
    pub fn intersect<K>(self, v1: &ClipVertex<K>, v2: &ClipVertex<K>) -> ClipVertex<K> where K: Interpolate {
        let a = self.distance(v1);
        let b = self.distance(v2);

        let t = a / (a - b);

        Interpolate::linear_interpolate(t, v1, v2)
    }
}

/// Clips the triangle `a, b, c` against `planes` with Sutherland–Hodgman polygon clipping.
///
/// Returns the vertices of the clipped convex polygon in the original winding order.
/// The result is empty when the triangle lies completely outside any of the six frustum planes,
/// and is the unmodified triangle when it lies inside all of `planes`.
pub fn clip_triangle<K>(a: ClipVertex<K>,
                        b: ClipVertex<K>,
                        c: ClipVertex<K>,
                        planes: &[ClippingPlane]) -> ClippedPolygon<K> where K: Clone + Interpolate {
    let mut polygon = ClippedPolygon::new();

    // Trivially reject triangles entirely outside of any plane
    for plane in &ALL_CLIPPING_PLANES {
        if !plane.has_inside(&a) && !plane.has_inside(&b) && !plane.has_inside(&c) {
            return polygon;
        }
    }

    let inside_all = planes.iter().all(|plane| {
        plane.has_inside(&a) && plane.has_inside(&b) && plane.has_inside(&c)
    });

    polygon.push(a);
    polygon.push(b);
    polygon.push(c);

    if inside_all {
        return polygon;
    }

    for plane in planes {
        if polygon.is_empty() {
            break;
        }

        let input = polygon;
        polygon = ClippedPolygon::new();

        let mut s = &input[input.len() - 1];

        for p in &input {
            let s_in = plane.has_inside(s);
            let p_in = plane.has_inside(p);

            // Edge crosses the clipping plane
            if s_in != p_in {
                polygon.push(plane.intersect(s, p));
            }

            if p_in {
                polygon.push(p.clone());
            }

            s = p;
        }
    }

    // Anything less is a sliver touching the plane
    if polygon.len() < 3 {
        polygon.clear();
    }

    polygon
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use super::*;

    fn vertex(x: f32, y: f32, z: f32, w: f32, k: f32) -> ClipVertex<f32> {
        ClipVertex::new(Vector4::new(x, y, z, w), k)
    }

    #[test]
    fn test_inside_triangle_is_unchanged() {
        let a = vertex(-0.5, -0.5, 0.0, 1.0, 0.0);
        let b = vertex(0.5, -0.5, 0.0, 1.0, 1.0);
        let c = vertex(0.0, 0.5, 0.0, 1.0, 2.0);

        let polygon = clip_triangle(a.clone(), b.clone(), c.clone(), &DEPTH_CLIPPING_PLANES);

        assert_eq!(&polygon[..], &[a, b, c][..]);
    }

    #[test]
    fn test_outside_triangle_is_rejected() {
        // entirely behind the near plane
        let polygon = clip_triangle(vertex(0.0, 0.0, -3.0, 1.0, 0.0),
                                    vertex(1.0, 0.0, -2.0, 1.0, 0.0),
                                    vertex(0.0, 1.0, -5.0, 1.0, 0.0),
                                    &DEPTH_CLIPPING_PLANES);
        assert!(polygon.is_empty());

        // entirely to the right of the screen
        let polygon = clip_triangle(vertex(2.0, 0.0, 0.0, 1.0, 0.0),
                                    vertex(3.0, 0.0, 0.0, 1.0, 0.0),
                                    vertex(2.0, 1.0, 0.0, 1.0, 0.0),
                                    &DEPTH_CLIPPING_PLANES);
        assert!(polygon.is_empty());
    }

    #[test]
    fn test_near_plane_cut_produces_quad() {
        // one vertex behind the near plane
        let polygon = clip_triangle(vertex(0.0, 0.0, -3.0, 1.0, 0.0),
                                    vertex(0.5, 0.0, 0.0, 1.0, 1.0),
                                    vertex(0.0, 0.5, 0.0, 1.0, 1.0),
                                    &DEPTH_CLIPPING_PLANES);

        assert_eq!(polygon.len(), 4);

        for v in &polygon {
            assert!(ClippingPlane::Near.distance(v) >= -1e-6);
            assert!(ClippingPlane::Far.has_inside(v));
        }
    }

    #[test]
    fn test_near_plane_cut_produces_triangle() {
        // two vertices behind the near plane
        let polygon = clip_triangle(vertex(0.0, 0.0, 0.0, 1.0, 1.0),
                                    vertex(0.5, 0.0, -3.0, 1.0, 0.0),
                                    vertex(0.0, 0.5, -3.0, 1.0, 0.0),
                                    &DEPTH_CLIPPING_PLANES);

        assert_eq!(polygon.len(), 3);

        // the new vertices sit a third of the way along each edge, around the kept vertex
        assert!((polygon[0].attributes - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(polygon[1].attributes, 1.0);
        assert!((polygon[2].attributes - 2.0 / 3.0).abs() < 1e-6);
    }
}
