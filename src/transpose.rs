//! 90° buffer rotation used to run the row blur along the other axis.
//!
//! Both operations are pure full-buffer copies that move whole pixels;
//! channel blocks stay interleaved exactly as in the input. They are exact
//! inverses of each other, and applying [`transpose_back`] twice with
//! swapped dimensions also restores the original buffer, which is how the
//! processor sequences its two passes.

/// Rotate a `width × height` buffer into `height × width`.
///
/// `output[(x*height + y)*channels + c] = input[(y*width + x)*channels + c]`.
pub fn transpose(input: &[u8], output: &mut [u8], width: usize, height: usize, channels: usize) {
    for y in 0..height {
        for x in 0..width {
            let src = (y * width + x) * channels;
            let dst = (x * height + y) * channels;
            output[dst..dst + channels].copy_from_slice(&input[src..src + channels]);
        }
    }
}

/// Exact inverse of [`transpose`].
///
/// `output[(y*width + x)*channels + c] = input[(x*height + y)*channels + c]`;
/// the output is `width × height`, the input the rotated `height × width`
/// buffer.
pub fn transpose_back(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
) {
    for y in 0..height {
        for x in 0..width {
            let src = (x * height + y) * channels;
            let dst = (y * width + x) * channels;
            output[dst..dst + channels].copy_from_slice(&input[src..src + channels]);
        }
    }
}
