use std::fmt;

/// Reasons why a processing or kernel request may be rejected.
///
/// Validation runs before any buffer is allocated; a failed call performs no
/// observable side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The input buffer holds no samples.
    EmptyBuffer,
    /// Width or height is zero.
    ZeroDimension { width: usize, height: usize },
    /// Buffer length is not a whole number of `width × height` planes.
    BufferSizeMismatch {
        length: usize,
        width: usize,
        height: usize,
    },
    /// Gaussian kernels need an odd tap count.
    EvenKernelSize { size: usize },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::EmptyBuffer => write!(f, "empty input buffer"),
            InvalidArgument::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be positive ({width}x{height})")
            }
            InvalidArgument::BufferSizeMismatch {
                length,
                width,
                height,
            } => write!(
                f,
                "buffer length {length} is not a multiple of {width}x{height}"
            ),
            InvalidArgument::EvenKernelSize { size } => {
                write!(f, "kernel size must be odd (got {size})")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
