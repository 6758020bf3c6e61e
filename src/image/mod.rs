//! Owned raster buffers and file I/O for the demo tools.
//!
//! The processing core works on borrowed flat buffers; these helpers exist
//! so the demos can round-trip image files and dump JSON reports.

pub mod io;

pub use io::{load_rgba_image, save_rgba_image, write_json_file, RasterImage};
