//! I/O helpers for interleaved raster buffers and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA8 buffer.
//! - `save_rgba_image`: write an RGBA8 buffer to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned channel-interleaved 8-bit raster buffer.
#[derive(Clone, Debug)]
pub struct RasterImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl RasterImage {
    /// Construct an owned buffer given raw interleaved bytes.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interleaved samples per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Borrow the flat sample buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Load an image from disk and convert to interleaved RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RasterImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RasterImage::new(width, height, 4, img.into_raw()))
}

/// Save an RGBA8 buffer to disk; the format follows the file extension.
pub fn save_rgba_image(image: &RasterImage, path: &Path) -> Result<(), String> {
    if image.channels != 4 {
        return Err(format!(
            "Expected 4 channels for {}, got {}",
            path.display(),
            image.channels
        ));
    }
    ensure_parent_dir(path)?;
    let buffer = RgbaImage::from_raw(
        image.width as u32,
        image.height as u32,
        image.data.clone(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
