//! One axis of the position-dependent blur.
//!
//! The pass always convolves along the row; the vertical pass is obtained by
//! rotating the buffer first (see [`crate::transpose`]). Blur strength per
//! pixel is its distance past the 12.5%/87.5% frame margins, used directly
//! as an index into the kernel ramp. Both the x and y checks derive their
//! margins from the pass width.

use super::mirror::reflect_index;
use crate::kernel::KernelLibrary;

/// Distance past the frame margins at `(x, y)`, clamped to the ramp length.
///
/// Returns 0 for interior pixels; those are copied through untouched.
#[inline]
fn border_distance(
    x: usize,
    y: usize,
    margin_start: usize,
    margin_end: usize,
    ramp_len: usize,
) -> usize {
    let mut index = 0usize;
    if x <= margin_start {
        index = index.max(margin_start - x);
    }
    if y <= margin_start {
        index = index.max(margin_start - y);
    }
    if x >= margin_end {
        index = index.max(x - margin_end);
    }
    if y >= margin_end {
        index = index.max(y - margin_end);
    }
    index.min(ramp_len - 1)
}

/// Blur `input` into `output` along the x axis with border-dependent strength.
///
/// Both buffers hold `width × height` pixels of `channels` interleaved
/// samples. All channels are copied through first; every channel except the
/// last is then re-convolved wherever the pixel sits past a frame margin, so
/// the last channel (alpha for RGBA data) always passes through unchanged.
///
/// `input` and `output` must be distinct buffers: each output sample reads
/// neighbouring input samples.
pub fn apply_blur_pass(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    library: &KernelLibrary,
) {
    let margin_start = width / 8;
    let margin_end = width * 7 / 8;

    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            let base = (row + x) * channels;
            output[base..base + channels].copy_from_slice(&input[base..base + channels]);

            let index = border_distance(x, y, margin_start, margin_end, library.len());
            if index == 0 {
                continue;
            }

            let kernel = library.get(index);
            for c in 0..channels.saturating_sub(1) {
                let mut acc = 0.0f32;
                for (k, &weight) in kernel.weights.iter().enumerate() {
                    let sample = x as isize + k as isize - kernel.half_size as isize;
                    let sx = reflect_index(sample, width);
                    acc += f32::from(input[(row + sx) * channels + c]) * weight;
                }
                output[base + c] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelLibrary;

    #[test]
    fn border_index_ramps_past_margins() {
        // Width 16 puts the margins at 2 and 14.
        assert_eq!(border_distance(8, 8, 2, 14, 512), 0);
        assert_eq!(border_distance(2, 8, 2, 14, 512), 0);
        assert_eq!(border_distance(0, 8, 2, 14, 512), 2);
        assert_eq!(border_distance(8, 15, 2, 14, 512), 1);
        assert_eq!(border_distance(15, 15, 2, 14, 512), 1);
    }

    #[test]
    fn border_index_clamps_to_ramp_length() {
        assert_eq!(border_distance(0, 2000, 2, 14, 512), 511);
    }

    #[test]
    fn flat_input_stays_flat() {
        let library = KernelLibrary::build();
        let (w, h, c) = (16usize, 16usize, 3usize);
        let input = vec![100u8; w * h * c];
        let mut output = vec![0u8; w * h * c];
        apply_blur_pass(&input, &mut output, w, h, c, &library);
        assert_eq!(input, output);
    }

    #[test]
    fn interior_band_is_untouched() {
        // Single bright pixel in the sharp interior of a 16×16 two-channel
        // image: nothing in the border band differs from zero, so the whole
        // pass is a plain copy.
        let library = KernelLibrary::build();
        let (w, h, c) = (16usize, 16usize, 2usize);
        let mut input = vec![0u8; w * h * c];
        input[(8 * w + 8) * c] = 255;
        let mut output = vec![0u8; w * h * c];
        apply_blur_pass(&input, &mut output, w, h, c, &library);
        assert_eq!(input, output);
    }

    #[test]
    fn last_channel_passes_through() {
        let library = KernelLibrary::build();
        let (w, h, c) = (24usize, 16usize, 4usize);
        let input: Vec<u8> = (0..w * h * c).map(|i| (i % 251) as u8).collect();
        let mut output = vec![0u8; w * h * c];
        apply_blur_pass(&input, &mut output, w, h, c, &library);

        for px in 0..w * h {
            let alpha = px * c + c - 1;
            assert_eq!(input[alpha], output[alpha], "pixel {px}");
        }
        // The colour channels in the border band must have moved.
        assert_ne!(input, output);
    }
}
