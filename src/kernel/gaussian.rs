//! 1-D Gaussian kernel construction.
//!
//! Kernels are built for an explicit odd tap count rather than a radius
//! derived from sigma, because the strength ramp selects kernels by size
//! (see [`super::library`]). Weights are normalized to unit sum unless the
//! raw sum is exactly zero (degenerate sigma), in which case they are left
//! as computed.

use crate::types::InvalidArgument;

/// Normalized 1-D Gaussian kernel.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    /// Convolution weights in left-to-right order.
    pub weights: Vec<f32>,
    /// Number of taps (odd).
    pub size: usize,
    /// Taps on each side of the centre: `(size - 1) / 2`.
    pub half_size: usize,
}

/// Build a Gaussian kernel with `size` taps and the given spread.
///
/// `size` must be odd so the kernel has a well-defined centre tap.
pub fn gaussian_kernel(size: usize, sigma: f32) -> Result<GaussianKernel, InvalidArgument> {
    if size % 2 == 0 {
        return Err(InvalidArgument::EvenKernelSize { size });
    }
    let half_size = (size - 1) / 2;
    let sigma2 = sigma * sigma;

    let mut weights = vec![0.0f32; size];
    for (i, w) in weights.iter_mut().enumerate() {
        let d = i as f32 - half_size as f32;
        *w = (-(d * d) / (2.0 * sigma2)).exp();
    }

    let sum: f32 = weights.iter().sum();
    if sum != 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    }

    Ok(GaussianKernel {
        weights,
        size,
        half_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        for size in [1usize, 5, 9, 31] {
            let sigma = size as f32 / 2.0 * 0.5;
            let kernel = gaussian_kernel(size, sigma).unwrap();
            let sum: f32 = kernel.weights.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "size {size}: sum {sum}");
        }
    }

    #[test]
    fn centre_tap_dominates_and_weights_are_symmetric() {
        let kernel = gaussian_kernel(9, 1.0).unwrap();
        let centre = kernel.weights[kernel.half_size];
        assert!(kernel.weights.iter().all(|&w| w <= centre));
        for i in 0..kernel.half_size {
            let mirror = kernel.size - 1 - i;
            assert!((kernel.weights[i] - kernel.weights[mirror]).abs() < 1e-7);
        }
    }

    #[test]
    fn rejects_even_size() {
        assert!(matches!(
            gaussian_kernel(4, 1.0),
            Err(InvalidArgument::EvenKernelSize { size: 4 })
        ));
    }

    #[test]
    fn half_size_matches_size() {
        let kernel = gaussian_kernel(7, 1.5).unwrap();
        assert_eq!(kernel.size, 7);
        assert_eq!(kernel.half_size, 3);
        assert_eq!(kernel.weights.len(), 7);
    }
}
