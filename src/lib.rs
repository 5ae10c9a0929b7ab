//! CPU Triangle Rasterizer in Rust
//!
//! ### Example:
//!
//! See `full_example` in the repository for loading, rendering and saving an OBJ model.
//!
//! ### Features:
//!
//! * Indexed triangle rendering with user-defined vertex, pixel and compute stages.
//! * Stages are plain traits, implemented by structs or by closures.
//! * Perspective-correct barycentric interpolation of vertex attributes.
//! * Define your own vertex attributes with `declare_attributes!`.
//! * Depth buffering with strict less-than comparison.
//! * Near and far plane clipping in homogeneous clip-space, with optional face culling.
//! * Parallel compute pass with Rayon, with a Gaussian blur stage included.
//! * Bounds-checked `Resource` buffers for vertices, indices and render targets.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.

#[macro_use]
extern crate log;

#[macro_use]
pub mod attributes;

pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod pixel;
pub mod rasterizer;
pub mod resource;
pub mod stages;
pub mod vertex;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult, StageError, StageResult};
pub use geometry::{ClipVertex, Dimensions, FaceWinding, HasDimensions, ScreenVertex};
pub use interpolate::Interpolate;
pub use pixel::{Color, Pixel, UnsignedColor};
pub use rasterizer::{DrawStats, Rasterizer};
pub use resource::Resource;
pub use stages::{BlurConfig, ComputeStage, FlatColor, GaussianBlur, Passthrough, PixelStage, TransformStage, VertexStage};
pub use vertex::{HasPosition, Vertex};
