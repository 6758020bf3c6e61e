//! Precomputed ramp of Gaussian kernels indexed by border distance.
//!
//! Precomputing the ramp keeps the per-pixel work to an O(1) lookup instead
//! of re-evaluating exponentials for every sample. The ramp depends only on
//! fixed constants, never on image content, so one instance can serve any
//! number of images.

use super::gaussian::{gaussian_kernel, GaussianKernel};

/// Tap count of the smallest (sharpest) kernel in the ramp.
pub const BASE_KERNEL_SIZE: usize = 5;
/// Number of kernels in the ramp.
pub const KERNEL_COUNT: usize = 512;

/// Ordered kernel ramp: entry 0 is the sharpest, the last entry the widest.
///
/// Entry `i ≥ 1` is `BASE_KERNEL_SIZE + i*2 + 2` taps wide, so sizes grow
/// strictly and stay odd. Every entry uses `sigma = size/2 * 0.5`.
#[derive(Clone, Debug)]
pub struct KernelLibrary {
    kernels: Vec<GaussianKernel>,
}

impl KernelLibrary {
    /// Build the full ramp.
    pub fn build() -> Self {
        let mut kernels = Vec::with_capacity(KERNEL_COUNT);
        for i in 0..KERNEL_COUNT {
            let size = if i == 0 {
                BASE_KERNEL_SIZE
            } else {
                BASE_KERNEL_SIZE + i * 2 + 2
            };
            let sigma = size as f32 / 2.0 * 0.5;
            let kernel = gaussian_kernel(size, sigma).expect("ramp sizes are odd");
            kernels.push(kernel);
        }
        Self { kernels }
    }

    /// Number of kernels in the ramp.
    #[inline]
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    /// Kernel for a border-distance index, clamped to the widest entry.
    #[inline]
    pub fn get(&self, index: usize) -> &GaussianKernel {
        &self.kernels[index.min(self.kernels.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_expected_shape() {
        let library = KernelLibrary::build();
        assert_eq!(library.len(), KERNEL_COUNT);
        assert_eq!(library.get(0).size, 5);
        assert_eq!(library.get(1).size, 9);
        assert_eq!(library.get(511).size, BASE_KERNEL_SIZE + 511 * 2 + 2);
    }

    #[test]
    fn sizes_strictly_increase_and_stay_odd() {
        let library = KernelLibrary::build();
        let mut prev = 0usize;
        for i in 0..library.len() {
            let kernel = library.get(i);
            assert_eq!(kernel.size % 2, 1, "entry {i} has even size");
            assert!(kernel.size > prev, "entry {i} does not grow");
            prev = kernel.size;
        }
    }

    #[test]
    fn lookup_clamps_to_widest_entry() {
        let library = KernelLibrary::build();
        assert_eq!(library.get(100_000).size, library.get(KERNEL_COUNT - 1).size);
    }
}
