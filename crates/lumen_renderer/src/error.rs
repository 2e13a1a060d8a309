//! Recoverable errors raised while configuring the renderer or building a scene.
//!
//! Geometric non-events (misses, blocked lights) are never errors; they are
//! plain `None` values in the tracing code.

use thiserror::Error;

/// Errors that can occur while setting up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("Unsupported antialiasing factor {0} (expected 1, 2, 4 or 8)")]
    InvalidAntialiasing(u32),

    #[error("Mesh index count {0} is not a multiple of 3")]
    RaggedIndices(usize),

    #[error("Mesh index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Result type for renderer setup operations.
pub type RenderResult<T> = Result<T, RenderError>;
