//! Pixel definition and operations

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul};

use nalgebra::Vector3;

use crate::interpolate::Interpolate;

/// Trait required to distinguish pixel types stored in render targets.
///
/// Pixel stages always produce a floating point [`Color`], which is converted into
/// the render target's pixel type before it is written.
pub trait Pixel: Debug + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Convert a shaded color into this pixel format
    fn from_color(color: Color) -> Self;
    /// Convert this pixel back into a floating point color
    fn to_color(self) -> Color;
}

pub use self::formats::{Color, UnsignedColor};

pub mod formats {
    /// 32-bit floating point RGB color.
    ///
    /// Channels are not constrained to any range, so values above one can be
    /// accumulated before being packed.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    #[repr(C)]
    pub struct Color {
        /// Red Component
        pub r: f32,
        /// Green Component
        pub g: f32,
        /// Blue Component
        pub b: f32,
    }

    /// 8-bit integer RGB color
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[repr(C)]
    pub struct UnsignedColor {
        /// Red Component
        pub r: u8,
        /// Green Component
        pub g: u8,
        /// Blue Component
        pub b: u8,
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub fn from_vector(v: Vector3<f32>) -> Color {
        Color { r: v.x, g: v.y, b: v.z }
    }

    #[inline]
    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.r, self.g, self.b)
    }
}

impl UnsignedColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> UnsignedColor {
        UnsignedColor { r, g, b }
    }
}

#[inline(always)]
fn pack_channel(c: f32) -> u8 {
    // NaN saturates to zero
    (c * 255.0).max(0.0).min(255.0) as u8
}

impl From<Color> for UnsignedColor {
    fn from(c: Color) -> UnsignedColor {
        UnsignedColor {
            r: pack_channel(c.r),
            g: pack_channel(c.g),
            b: pack_channel(c.b),
        }
    }
}

impl From<UnsignedColor> for Color {
    fn from(c: UnsignedColor) -> Color {
        Color {
            r: c.r as f32 / 255.0,
            g: c.g as f32 / 255.0,
            b: c.b as f32 / 255.0,
        }
    }
}

impl From<Vector3<f32>> for Color {
    #[inline]
    fn from(v: Vector3<f32>) -> Color { Color::from_vector(v) }
}

impl From<Vector3<f32>> for UnsignedColor {
    #[inline]
    fn from(v: Vector3<f32>) -> UnsignedColor { Color::from_vector(v).into() }
}

impl Pixel for Color {
    #[inline(always)]
    fn from_color(color: Color) -> Color { color }

    #[inline(always)]
    fn to_color(self) -> Color { self }
}

impl Pixel for UnsignedColor {
    #[inline]
    fn from_color(color: Color) -> UnsignedColor { color.into() }

    #[inline]
    fn to_color(self) -> Color { self.into() }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color { r: self.r + rhs.r, g: self.g + rhs.g, b: self.b + rhs.b }
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color { r: self.r * rhs, g: self.g * rhs, b: self.b * rhs }
    }
}

impl Interpolate for Color {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Color, v: f32, vx: &Color, w: f32, wx: &Color) -> Color {
        *ux * u + *vx * v + *wx * w
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Color, x2: &Color) -> Color {
        *x1 * (1.0 - t) + *x2 * t
    }
}
