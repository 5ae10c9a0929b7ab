//! Interpolation utilities

use nalgebra::{Point2, Point3, Vector2, Vector3, Vector4};
use num_traits::AsPrimitive;

/// Describes a type that can be interpolated with barycentric coordinates.
///
/// This is required for any rasterization to occur, since every vertex attribute
/// reaching the pixel stage has been blended from the three corners of a triangle.
///
/// This trait can be implemented automatically for attribute structures by using the
/// [`declare_attributes!`](../macro.declare_attributes.html) macro, which delegates to each member.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self;

    /// Simple linear interpolation
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self;
}

impl Interpolate for () {
    #[inline(always)]
    fn barycentric_interpolate(_: f32, _: &(), _: f32, _: &(), _: f32, _: &()) {}

    #[inline(always)]
    fn linear_interpolate(_: f32, _: &(), _: &()) {}
}

macro_rules! impl_primitive_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn barycentric_interpolate(u: f32, ux: &$t, v: f32, vx: &$t, w: f32, wx: &$t) -> $t {
                    let ux: f32 = (*ux).as_();
                    let vx: f32 = (*vx).as_();
                    let wx: f32 = (*wx).as_();

                    (ux * u + vx * v + wx * w).as_()
                }

                #[inline(always)]
                fn linear_interpolate(t: f32, x1: &$t, x2: &$t) -> $t {
                    let x1: f32 = (*x1).as_();
                    let x2: f32 = (*x2).as_();

                    ((1.0 - t) * x1 + t * x2).as_()
                }
            }
        )+
    }
}

impl_primitive_interpolate!(i8, i16, i32, u8, u16, u32, f32);

impl Interpolate for f64 {
    #[inline(always)]
    fn barycentric_interpolate(u: f32, ux: &f64, v: f32, vx: &f64, w: f32, wx: &f64) -> f64 {
        ux * u as f64 + vx * v as f64 + wx * w as f64
    }

    #[inline(always)]
    fn linear_interpolate(t: f32, x1: &f64, x2: &f64) -> f64 {
        let t = t as f64;
        (1.0 - t) * x1 + t * x2
    }
}

macro_rules! impl_nalgebra_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline]
                fn barycentric_interpolate(u: f32, ux: &$t, v: f32, vx: &$t, w: f32, wx: &$t) -> $t {
                    ux.zip_zip_map(vx, wx, |a, b, c| a * u + b * v + c * w)
                }

                #[inline]
                fn linear_interpolate(t: f32, x1: &$t, x2: &$t) -> $t {
                    x1.zip_map(x2, |a, b| a * (1.0 - t) + b * t)
                }
            }
        )+
    }
}

impl_nalgebra_interpolate!(Vector2<f32>, Vector3<f32>, Vector4<f32>);

impl Interpolate for Point2<f32> {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        Point2::from(Interpolate::barycentric_interpolate(u, &ux.coords, v, &vx.coords, w, &wx.coords))
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        Point2::from(Interpolate::linear_interpolate(t, &x1.coords, &x2.coords))
    }
}

impl Interpolate for Point3<f32> {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        Point3::from(Interpolate::barycentric_interpolate(u, &ux.coords, v, &vx.coords, w, &wx.coords))
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        Point3::from(Interpolate::linear_interpolate(t, &x1.coords, &x2.coords))
    }
}
