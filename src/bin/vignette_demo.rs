use frame_vignette::config::vignette_demo::load_config;
use frame_vignette::image::io::{load_rgba_image, save_rgba_image, write_json_file, RasterImage};
use frame_vignette::FrameVignette;

use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: vignette_demo <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_rgba_image(&config.input)?;
    let mut vignette = FrameVignette::new();
    let (blurred, report) = vignette
        .process_with_report(input.data(), input.width(), input.height())
        .map_err(|e| format!("Failed to process {}: {e}", config.input.display()))?;

    let output = RasterImage::new(input.width(), input.height(), input.channels(), blurred);
    save_rgba_image(&output, &config.output)?;

    if let Some(report_path) = &config.report_json {
        write_json_file(report_path, &report)?;
    }

    println!(
        "{}x{} processed in {:.3} ms -> {}",
        report.width,
        report.height,
        report.total_ms,
        config.output.display()
    );
    Ok(())
}
