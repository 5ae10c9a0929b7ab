//! Error types for buffer access, pipeline setup and shader stages

use std::error::Error;

use thiserror::Error;

/// Error returned by user-supplied shader stages.
pub type StageError = Box<dyn Error + Send + Sync + 'static>;

/// Result type returned by user-supplied shader stages.
pub type StageResult<T> = Result<T, StageError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Index {index} is out of range for a buffer of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A {width}x{height} resource does not fit in memory")]
    ResourceTooLarge { width: usize, height: usize },

    #[error("Triangle has zero area")]
    DegenerateGeometry,

    #[error("Viewport {width}x{height} is invalid, both dimensions must be non-zero")]
    InvalidViewport { width: u32, height: u32 },

    #[error("Blur sigma {0} must be finite and greater than zero")]
    InvalidBlurConfig(f32),

    #[error("No {0} stage has been set")]
    MissingStage(&'static str),

    #[error("No {0} buffer has been bound")]
    MissingBuffer(&'static str),

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: StageError,
    },

    #[cfg(feature = "image_compat")]
    #[error("Unable to write image: {0}")]
    Image(#[from] image::ImageError),
}

impl RenderError {
    /// Wraps a stage failure with the name of the stage it came from
    #[inline]
    pub fn stage(stage: &'static str) -> impl FnOnce(StageError) -> RenderError {
        move |source| RenderError::Stage { stage, source }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
