//! Triangle setup and scan conversion

use nalgebra::Vector4;
use nalgebra::coordinates::XYZW;

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Coordinate, Dimensions, FaceWinding, HasDimensions, ScreenVertex};
use crate::interpolate::Interpolate;
use crate::pixel::Pixel;
use crate::stages::PixelStage;

use super::DrawStats;
use super::targets::RenderTargets;

/// Edge function of the directed edge `a -> b` evaluated at `p`.
///
/// Positive on the right-hand side of the edge when y grows downward.
#[inline(always)]
fn edge(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Screen-space triangle prepared for barycentric coverage tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    area: f32,
}

impl Barycentric {
    /// Sets up the triangle from the `x` and `y` components of three screen-space positions.
    ///
    /// Fails with `DegenerateGeometry` if the triangle has zero (or non-finite) signed area.
    pub fn new(a: &Vector4<f32>, b: &Vector4<f32>, c: &Vector4<f32>) -> RenderResult<Barycentric> {
        let a = (a.x, a.y);
        let b = (b.x, b.y);
        let c = (c.x, c.y);

        let area = edge(a, b, c);

        if area == 0.0 || !area.is_finite() {
            return Err(RenderError::DegenerateGeometry);
        }

        Ok(Barycentric { a, b, c, area })
    }

    /// Twice the signed area of the triangle
    #[inline]
    pub fn area(&self) -> f32 { self.area }

    #[inline]
    pub fn winding(&self) -> Option<FaceWinding> {
        FaceWinding::from_signed_area(self.area)
    }

    /// Barycentric weights of the point `(x, y)`, or `None` if it lies outside of the triangle.
    ///
    /// Points exactly on an edge are inside. Either winding order is accepted, and each weight
    /// is exactly one at its own vertex.
    #[inline]
    pub fn weights(&self, x: f32, y: f32) -> Option<[f32; 3]> {
        let p = (x, y);

        let e0 = edge(self.b, self.c, p);
        let e1 = edge(self.c, self.a, p);
        let e2 = edge(self.a, self.b, p);

        let inside = if self.area > 0.0 {
            e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0
        } else {
            e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0
        };

        let sum = e0 + e1 + e2;

        if inside && sum != 0.0 {
            Some([e0 / sum, e1 / sum, e2 / sum])
        } else {
            None
        }
    }
}

/// Rescales screen-space barycentric weights by the reciprocal clip-space `w` of each vertex,
/// giving weights that interpolate attributes linearly in clip-space rather than on screen.
#[inline]
pub fn perspective_correct(weights: [f32; 3], inv_w: [f32; 3]) -> [f32; 3] {
    let p = [weights[0] * inv_w[0], weights[1] * inv_w[1], weights[2] * inv_w[2]];

    let sum = p[0] + p[1] + p[2];

    if sum == 0.0 || !sum.is_finite() {
        return weights;
    }

    [p[0] / sum, p[1] / sum, p[2] / sum]
}

/// Clamps the triangle's bounding box to the viewport.
///
/// Returns `None` when the box lies entirely off-screen.
fn bounding_box(dimensions: Dimensions, a: &Vector4<f32>, b: &Vector4<f32>, c: &Vector4<f32>) -> Option<(Coordinate, Coordinate)> {
    let (width, height) = dimensions.as_f32();

    let min_x = a.x.min(b.x).min(c.x).floor();
    let max_x = a.x.max(b.x).max(c.x).ceil();
    let min_y = a.y.min(b.y).min(c.y).floor();
    let max_y = a.y.max(b.y).max(c.y).ceil();

    if max_x < 0.0 || max_y < 0.0 || min_x >= width || min_y >= height {
        return None;
    }

    let min = Coordinate::new(min_x.max(0.0) as u32, min_y.max(0.0) as u32);
    let max = Coordinate::new(max_x.min(width - 1.0) as u32, max_y.min(height - 1.0) as u32);

    Some((min, max))
}

/// Scan converts one screen-space triangle into the render targets.
///
/// Every pixel whose center is covered by the triangle is depth tested against the depth buffer.
/// Fragments nearer than the stored depth are shaded with `pixel_stage`, then their color and depth
/// are written. Degenerate and culled triangles are counted in `stats` and otherwise ignored.
pub(crate) fn fill_triangle<K, P>(targets: &mut RenderTargets<P>,
                                  pixel_stage: &dyn PixelStage<K>,
                                  cull_faces: Option<FaceWinding>,
                                  a: &ScreenVertex<K>,
                                  b: &ScreenVertex<K>,
                                  c: &ScreenVertex<K>,
                                  stats: &mut DrawStats) -> RenderResult<()>
    where K: Interpolate,
          P: Pixel {
    let setup = match Barycentric::new(&a.position, &b.position, &c.position) {
        Ok(setup) => setup,
        Err(RenderError::DegenerateGeometry) => {
            trace!("Skipping zero-area triangle");
            stats.degenerate += 1;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if cull_faces.is_some() && cull_faces == setup.winding() {
        stats.culled += 1;
        return Ok(());
    }

    let dimensions = targets.dimensions();

    let (min, max) = match bounding_box(dimensions, &a.position, &b.position, &c.position) {
        Some(bounds) => bounds,
        None => return Ok(()),
    };

    let XYZW { z: z1, w: inv_w1, .. } = *a.position;
    let XYZW { z: z2, w: inv_w2, .. } = *b.position;
    let XYZW { z: z3, w: inv_w3, .. } = *c.position;

    let mut pixel = min;

    while pixel.y <= max.y {
        pixel.x = min.x;

        while pixel.x <= max.x {
            // Real screen position should be in the center of the pixel.
            let (x, y) = (pixel.x as f32 + 0.5,
                          pixel.y as f32 + 0.5);

            if let Some([u, v, w]) = setup.weights(x, y) {
                // depth is affine in screen-space
                let z = u * z1 + v * z2 + w * z3;

                let index = pixel.into_index(dimensions);

                // skip fragments that are behind previous fragments
                if z < *targets.depth.item(index)? {
                    let [pu, pv, pw] = perspective_correct([u, v, w], [inv_w1, inv_w2, inv_w3]);

                    let attributes = Interpolate::barycentric_interpolate(pu, &a.attributes,
                                                                          pv, &b.attributes,
                                                                          pw, &c.attributes);

                    let color = pixel_stage.shade(&attributes, z).map_err(RenderError::stage("pixel"))?;

                    *targets.color.item_mut(index)? = P::from_color(color);
                    *targets.depth.item_mut(index)? = z;

                    stats.fragments += 1;
                }
            }

            pixel.x += 1;
        }

        pixel.y += 1;
    }

    stats.triangles += 1;

    Ok(())
}
