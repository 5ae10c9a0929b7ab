//! Macros for vertex attribute structures
//!
//! The `Interpolate` trait is implemented for `f32`, small integers, `Color` and nalgebra
//! vectors and points. It can be implemented automatically for your own attribute structures
//! by using the [`declare_attributes!`](../macro.declare_attributes.html) macro.

/// Declares a structure and implements the [`Interpolate`](interpolate/trait.Interpolate.html)
/// trait for it by delegating the trait to each member.
///
/// So, for example, this:
///
/// ```ignore
/// declare_attributes! {
///     #[derive(Debug, Clone)]
///     pub struct MyAttributes {
///         /// Position in world-space
///         pub position: Vector4<f32>,
///         pub normal: Vector3<f32>,
///         pub uv: Vector2<f32>,
///     }
/// }
/// ```
///
/// becomes:
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct MyAttributes {
///     /// Position in world-space
///     pub position: Vector4<f32>,
///     pub normal: Vector3<f32>,
///     pub uv: Vector2<f32>,
/// }
///
/// impl Interpolate for MyAttributes {
///     fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
///         MyAttributes {
///             position: Interpolate::barycentric_interpolate(u, &ux.position, v, &vx.position, w, &wx.position),
///             normal: Interpolate::barycentric_interpolate(u, &ux.normal, v, &vx.normal, w, &wx.normal),
///             uv: Interpolate::barycentric_interpolate(u, &ux.uv, v, &vx.uv, w, &wx.uv),
///         }
///     }
///
///     // linear_interpolate is generated the same way
/// }
/// ```
///
/// The struct and all of its members must be `pub`, and every member needs a trailing comma.
#[macro_export]
macro_rules! declare_attributes {
    ($(#[$($struct_attrs:tt)*])* pub struct $name:ident {
        $($(#[$($field_attrs:tt)*])* pub $field:ident: $t:ty,)*
    }) => {
        $(#[$($struct_attrs)*])*
        pub struct $name {
            $(
                $(#[$($field_attrs)*])*
                pub $field: $t
            ),*
        }

        impl $crate::interpolate::Interpolate for $name {
            fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
                $name {
                    $(
                        $field: $crate::interpolate::Interpolate::barycentric_interpolate(u, &ux.$field,
                                                                                          v, &vx.$field,
                                                                                          w, &wx.$field)
                    ),*
                }
            }

            fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
                $name {
                    $(
                        $field: $crate::interpolate::Interpolate::linear_interpolate(t, &x1.$field, &x2.$field)
                    ),*
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use nalgebra::Vector2;

    use crate::interpolate::Interpolate;
    use crate::pixel::Color;

    declare_attributes! {
        #[derive(Debug, Clone, PartialEq)]
        pub struct TestAttributes {
            /// Texture coordinate
            pub uv: Vector2<f32>,
            pub tint: Color,
            pub weight: f32,
        }
    }

    #[test]
    fn test_declared_attributes_interpolate_per_member() {
        let a = TestAttributes { uv: Vector2::new(0.0, 0.0), tint: Color::new(1.0, 0.0, 0.0), weight: 0.0 };
        let b = TestAttributes { uv: Vector2::new(1.0, 0.0), tint: Color::new(0.0, 1.0, 0.0), weight: 2.0 };
        let c = TestAttributes { uv: Vector2::new(0.0, 1.0), tint: Color::new(0.0, 0.0, 1.0), weight: 4.0 };

        let mid = TestAttributes::barycentric_interpolate(0.5, &a, 0.25, &b, 0.25, &c);

        assert_eq!(mid.uv, Vector2::new(0.25, 0.25));
        assert_eq!(mid.tint, Color::new(0.5, 0.25, 0.25));
        assert_eq!(mid.weight, 1.5);

        assert_eq!(TestAttributes::linear_interpolate(0.5, &a, &c).weight, 2.0);
        assert_eq!(TestAttributes::barycentric_interpolate(0.0, &a, 1.0, &b, 0.0, &c), b);
    }
}
