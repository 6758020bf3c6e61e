//! Orchestrates the two blur passes over a raw interleaved buffer.
//!
//! Overview
//! - Validates the input and infers the channel count from the buffer
//!   length (`channels = len / (width*height)`).
//! - Builds the kernel ramp, then runs: horizontal pass → rotation →
//!   horizontal pass (acting on the original vertical axis) → rotation
//!   back. Rotation is [`transpose_back`] applied with swapped dimensions
//!   at each step, so the second application undoes the first.
//! - A pass never writes the buffer it reads; two working buffers ping-pong
//!   through the four steps and the front buffer holds the result.

use crate::blur::apply_blur_pass;
use crate::diagnostics::ProcessReport;
use crate::kernel::KernelLibrary;
use crate::transpose::transpose_back;
use crate::types::InvalidArgument;

use log::debug;
use std::time::Instant;

/// Blur the border band of an image, leaving the interior untouched.
///
/// `buffer` is row-major and channel-interleaved; the channel count is
/// inferred from the buffer length, and the last channel of every pixel
/// passes through unchanged. Returns a new buffer of identical length.
///
/// The kernel ramp is rebuilt on every call; use [`FrameVignette`] to keep
/// it alive across calls.
pub fn process_image(
    buffer: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, InvalidArgument> {
    let channels = infer_channels(buffer, width, height)?;
    let library = KernelLibrary::build();

    let mut front = buffer.to_vec();
    // Untouched bytes read as opaque white rather than zero.
    let mut back = vec![255u8; buffer.len()];
    run_passes(&mut front, &mut back, width, height, channels, &library);
    Ok(front)
}

/// Reusable processor that amortises the kernel ramp and scratch buffers
/// across calls.
///
/// Output is byte-identical to [`process_image`]; the ramp depends only on
/// fixed constants, so caching it is purely an allocation saving.
pub struct FrameVignette {
    library: KernelLibrary,
    front: Vec<u8>,
    back: Vec<u8>,
}

impl FrameVignette {
    pub fn new() -> Self {
        Self {
            library: KernelLibrary::build(),
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    /// See [`process_image`].
    pub fn process(
        &mut self,
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>, InvalidArgument> {
        let channels = infer_channels(buffer, width, height)?;
        self.prepare(buffer);
        run_passes(
            &mut self.front,
            &mut self.back,
            width,
            height,
            channels,
            &self.library,
        );
        Ok(self.front.clone())
    }

    /// Like [`FrameVignette::process`], with per-stage timings.
    pub fn process_with_report(
        &mut self,
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(Vec<u8>, ProcessReport), InvalidArgument> {
        let channels = infer_channels(buffer, width, height)?;
        let mut report = ProcessReport::new(width, height, channels);
        let total = Instant::now();
        self.prepare(buffer);

        let start = Instant::now();
        apply_blur_pass(
            &self.front,
            &mut self.back,
            width,
            height,
            channels,
            &self.library,
        );
        record_stage(&mut report, "horizontal_pass", start);

        let start = Instant::now();
        transpose_back(&self.back, &mut self.front, height, width, channels);
        record_stage(&mut report, "rotate", start);

        let start = Instant::now();
        apply_blur_pass(
            &self.front,
            &mut self.back,
            height,
            width,
            channels,
            &self.library,
        );
        record_stage(&mut report, "vertical_pass", start);

        let start = Instant::now();
        transpose_back(&self.back, &mut self.front, width, height, channels);
        record_stage(&mut report, "rotate_back", start);

        report.total_ms = total.elapsed().as_secs_f64() * 1000.0;
        Ok((self.front.clone(), report))
    }

    fn prepare(&mut self, buffer: &[u8]) {
        self.front.clear();
        self.front.extend_from_slice(buffer);
        self.back.clear();
        // Untouched bytes read as opaque white rather than zero.
        self.back.resize(buffer.len(), 255);
    }
}

impl Default for FrameVignette {
    fn default() -> Self {
        Self::new()
    }
}

fn record_stage(report: &mut ProcessReport, label: &str, start: Instant) {
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!("{label}: {elapsed_ms:.3} ms");
    report.push(label, elapsed_ms);
}

fn infer_channels(buffer: &[u8], width: usize, height: usize) -> Result<usize, InvalidArgument> {
    if buffer.is_empty() {
        return Err(InvalidArgument::EmptyBuffer);
    }
    if width == 0 || height == 0 {
        return Err(InvalidArgument::ZeroDimension { width, height });
    }
    let pixels = width * height;
    if buffer.len() % pixels != 0 {
        return Err(InvalidArgument::BufferSizeMismatch {
            length: buffer.len(),
            width,
            height,
        });
    }
    Ok(buffer.len() / pixels)
}

/// Run both blur passes over the two working buffers.
///
/// `front` holds the input on entry and the final image on exit; `back` is
/// scratch of the same length.
fn run_passes(
    front: &mut [u8],
    back: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    library: &KernelLibrary,
) {
    apply_blur_pass(front, back, width, height, channels, library);
    transpose_back(back, front, height, width, channels);
    apply_blur_pass(front, back, height, width, channels, library);
    transpose_back(back, front, width, height, channels);
}
