#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod processor;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod blur;
pub mod kernel;
pub mod transpose;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the one-shot function and the reusable processor.
pub use crate::processor::{process_image, FrameVignette};
pub use crate::types::InvalidArgument;

// High-level diagnostics returned by the timed entry point.
pub use crate::diagnostics::{ProcessReport, StageTiming};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use frame_vignette::prelude::*;
///
/// let (w, h) = (64usize, 48usize);
/// let rgba = vec![200u8; w * h * 4];
///
/// let blurred = process_image(&rgba, w, h).expect("valid buffer");
/// assert_eq!(blurred.len(), rgba.len());
/// ```
pub mod prelude {
    pub use crate::processor::{process_image, FrameVignette};
    pub use crate::types::InvalidArgument;
}
