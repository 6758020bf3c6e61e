/// Generates a flat buffer where every sample holds `value`.
pub fn flat_u8(width: usize, height: usize, channels: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(channels > 0, "channel count must be positive");
    vec![value; width * height * channels]
}

/// Generates a deterministic sawtooth pattern that varies in every channel.
pub fn sawtooth_u8(width: usize, height: usize, channels: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(channels > 0, "channel count must be positive");
    (0..width * height * channels)
        .map(|i| (i % 251) as u8)
        .collect()
}

/// Generates an all-zero RGBA image with a single bright pixel at the centre.
pub fn rgba_with_bright_center(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height * 4];
    let base = ((height / 2) * width + width / 2) * 4;
    img[base..base + 4].copy_from_slice(&[255, 255, 255, 255]);
    img
}
