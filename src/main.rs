use frame_vignette::process_image;

fn main() {
    // Demo stub: runs the border blur over a synthetic RGBA gradient
    let w = 640usize;
    let h = 480usize;
    let mut buffer = vec![255u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let base = (y * w + x) * 4;
            buffer[base] = (x * 255 / w) as u8;
            buffer[base + 1] = (y * 255 / h) as u8;
            buffer[base + 2] = 128;
        }
    }

    match process_image(&buffer, w, h) {
        Ok(out) => println!("processed {w}x{h} rgba, {} bytes", out.len()),
        Err(err) => eprintln!("Error: {err}"),
    }
}
