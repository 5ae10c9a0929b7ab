//! Programmable pipeline stages
//!
//! A frame is shaded by three independent stages, each of which can be replaced without touching the others:
//!
//! * [`VertexStage`] transforms every vertex of a triangle into clip-space,
//!   passing its attributes through for interpolation.
//! * [`PixelStage`] turns interpolated attributes into a color for every visible fragment.
//! * [`ComputeStage`] post-processes the resolved image, one output pixel at a time,
//!   with read access to the whole image.
//!
//! Stages are plain structs holding whatever context they need (matrices, blur parameters),
//! but closures with the right signature can be used directly as well.

pub mod vertex;
pub mod pixel;
pub mod compute;
pub mod blur;

pub use self::vertex::{VertexStage, TransformStage};
pub use self::pixel::{PixelStage, FlatColor};
pub use self::compute::{ComputeStage, Passthrough};
pub use self::blur::{BlurConfig, GaussianBlur};
