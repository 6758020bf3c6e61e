//! Gaussian kernel construction and the precomputed strength ramp.

pub mod gaussian;
pub mod library;

pub use gaussian::{gaussian_kernel, GaussianKernel};
pub use library::{KernelLibrary, BASE_KERNEL_SIZE, KERNEL_COUNT};
