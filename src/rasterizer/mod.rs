//! Triangle rasterizer
//!
//! The [`Rasterizer`] owns the render targets and the three programmable stages.
//! A frame is produced by:
//!
//! 1. [`clear_render_target`](Rasterizer::clear_render_target) to reset the color and depth buffers,
//! 2. binding a vertex and index buffer and calling [`draw`](Rasterizer::draw), once per mesh,
//! 3. [`final_draw`](Rasterizer::final_draw) to run the compute stage over the resolved image.

use std::sync::Arc;

use rayon::prelude::*;
use smallvec::SmallVec;

use crate::error::{RenderError, RenderResult};
use crate::geometry::{clip_triangle, ClipVertex, Dimensions, FaceWinding, HasDimensions, ScreenVertex, DEPTH_CLIPPING_PLANES};
use crate::interpolate::Interpolate;
use crate::pixel::{Pixel, UnsignedColor};
use crate::resource::Resource;
use crate::stages::{ComputeStage, PixelStage, VertexStage};
use crate::vertex::HasPosition;

pub mod targets;
pub mod triangle;

pub use self::targets::{RenderTargets, MAX_DEPTH};
pub use self::triangle::{Barycentric, perspective_correct};

/// Counters collected over a single `draw` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Screen-space triangles scan converted, including those produced by clipping
    pub triangles: usize,
    /// Input triangles lying completely outside of the view volume
    pub rejected: usize,
    /// Triangles discarded by face culling
    pub culled: usize,
    /// Zero-area triangles that were skipped
    pub degenerate: usize,
    /// Fragments that passed the depth test and were written
    pub fragments: usize,
}

/// CPU triangle rasterizer with programmable vertex, pixel and compute stages.
///
/// `V` is the vertex type read from the bound vertex buffer and `P` the pixel format of the render targets.
pub struct Rasterizer<V, P = UnsignedColor> {
    targets: RenderTargets<P>,
    clear_color: P,
    vertex_buffer: Option<Arc<Resource<V>>>,
    index_buffer: Option<Arc<Resource<u32>>>,
    vertex_stage: Option<Box<dyn VertexStage<V>>>,
    pixel_stage: Option<Box<dyn PixelStage<V>>>,
    compute_stage: Option<Box<dyn ComputeStage<P>>>,
    cull_faces: Option<FaceWinding>,
}

impl<V, P> Rasterizer<V, P> where V: HasPosition + Clone + Interpolate,
                                  P: Pixel {
    /// Creates a rasterizer with a `width * height` viewport and no bound buffers or stages.
    pub fn new(width: u32, height: u32) -> RenderResult<Rasterizer<V, P>> {
        Ok(Rasterizer {
            targets: RenderTargets::new(Dimensions::new(width, height))?,
            clear_color: P::default(),
            vertex_buffer: None,
            index_buffer: None,
            vertex_stage: None,
            pixel_stage: None,
            compute_stage: None,
            cull_faces: None,
        })
    }

    /// Reallocates all render targets for a `width * height` viewport.
    ///
    /// The new color buffer holds the last clear color, and the depth buffer is reset.
    /// On error the previous targets are left untouched.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> RenderResult<()> {
        let mut targets = RenderTargets::new(Dimensions::new(width, height))?;

        targets.clear(self.clear_color);

        debug!("Viewport set to {}x{}", width, height);

        self.targets = targets;

        Ok(())
    }

    /// Fills the working color buffer with `color` and resets every depth value to [`MAX_DEPTH`]
    pub fn clear_render_target(&mut self, color: P) {
        self.clear_color = color;
        self.targets.clear(color);
    }

    /// Binds the vertex buffer read by the next `draw`
    pub fn set_vertex_buffer(&mut self, buffer: Arc<Resource<V>>) {
        self.vertex_buffer = Some(buffer);
    }

    /// Binds the index buffer read by the next `draw`
    pub fn set_index_buffer(&mut self, buffer: Arc<Resource<u32>>) {
        self.index_buffer = Some(buffer);
    }

    pub fn set_vertex_stage<S>(&mut self, stage: S) where S: VertexStage<V> + 'static {
        self.vertex_stage = Some(Box::new(stage));
    }

    pub fn set_pixel_stage<S>(&mut self, stage: S) where S: PixelStage<V> + 'static {
        self.pixel_stage = Some(Box::new(stage));
    }

    /// Sets the stage run by `final_draw`. Without one, `final_draw` copies the working buffer.
    pub fn set_compute_stage<S>(&mut self, stage: S) where S: ComputeStage<P> + 'static {
        self.compute_stage = Some(Box::new(stage));
    }

    /// Discards triangles with the given screen-space winding, or none at all
    pub fn cull_faces(&mut self, winding: Option<FaceWinding>) {
        self.cull_faces = winding;
    }

    /// Rasterizes `index_count` indices of the bound index buffer, starting at `index_offset`,
    /// as a list of triangles.
    ///
    /// If a stage fails, the pixels written by earlier triangles are kept and the error is returned.
    pub fn draw(&mut self, index_count: usize, index_offset: usize) -> RenderResult<DrawStats> {
        let vertex_stage = self.vertex_stage.as_ref().ok_or(RenderError::MissingStage("vertex"))?;
        let pixel_stage = self.pixel_stage.as_ref().ok_or(RenderError::MissingStage("pixel"))?;
        let vertices = self.vertex_buffer.as_ref().ok_or(RenderError::MissingBuffer("vertex"))?;
        let indices = self.index_buffer.as_ref().ok_or(RenderError::MissingBuffer("index"))?;

        let end = index_offset.checked_add(index_count).unwrap_or(usize::MAX);

        if end > indices.number_of_elements() {
            return Err(RenderError::IndexOutOfRange { index: end, len: indices.number_of_elements() });
        }

        if index_count % 3 != 0 {
            warn!("Index count {} is not a multiple of three, ignoring the last {} indices", index_count, index_count % 3);
        }

        let dimensions = self.targets.dimensions();
        let cull_faces = self.cull_faces;

        let mut stats = DrawStats::default();

        let fetch = |i: usize| -> RenderResult<ClipVertex<V>> {
            let vertex = vertices.item(*indices.item(i)? as usize)?;

            vertex_stage.process(vertex.homogeneous_position(), vertex).map_err(RenderError::stage("vertex"))
        };

        for first in (index_offset..end - index_count % 3).step_by(3) {
            let (a, b, c) = (fetch(first)?, fetch(first + 1)?, fetch(first + 2)?);

            let polygon = clip_triangle(a, b, c, &DEPTH_CLIPPING_PLANES);

            if polygon.is_empty() {
                stats.rejected += 1;
                continue;
            }

            let screen: SmallVec<[ScreenVertex<V>; 5]> = polygon.into_iter()
                                                               .map(|v| v.normalize(dimensions))
                                                               .collect();

            // Fan triangulation of the convex clipped polygon
            for i in 1..screen.len() - 1 {
                triangle::fill_triangle(&mut self.targets, &**pixel_stage, cull_faces,
                                        &screen[0], &screen[i], &screen[i + 1],
                                        &mut stats)?;
            }
        }

        debug!("Drew {} triangles ({} rejected, {} culled, {} degenerate), {} fragments written",
               stats.triangles, stats.rejected, stats.culled, stats.degenerate, stats.fragments);

        Ok(stats)
    }

    /// Runs the compute stage once for every pixel of the working color buffer,
    /// writing the results to the final color buffer.
    ///
    /// The working buffer is only read, so pixels are computed in parallel.
    pub fn final_draw(&mut self) -> RenderResult<()> {
        let RenderTargets { ref color, ref mut final_color, .. } = self.targets;

        match self.compute_stage {
            Some(ref stage) => {
                final_color.as_mut_slice().par_iter_mut().enumerate().try_for_each(|(index, out)| -> RenderResult<()> {
                    *out = stage.compute(color, index).map_err(RenderError::stage("compute"))?;

                    Ok(())
                })
            }
            None => {
                final_color.as_mut_slice().copy_from_slice(color.as_slice());

                Ok(())
            }
        }
    }

    /// Working color buffer
    #[inline]
    pub fn render_target(&self) -> &Resource<P> { self.targets.color() }

    #[inline]
    pub fn depth_buffer(&self) -> &Resource<f32> { self.targets.depth() }

    /// Output of the last `final_draw`
    #[inline]
    pub fn final_render_target(&self) -> &Resource<P> { self.targets.final_color() }

    #[inline]
    pub fn clear_color(&self) -> P { self.clear_color }
}

impl<V, P> HasDimensions for Rasterizer<V, P> {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.targets.dimensions() }
}
