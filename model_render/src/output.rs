use std::path::Path;

use image::RgbaImage;
use rayon::prelude::*;
use renderer::Framebuffer;

use crate::error::LoadError;

/// Mirror the rows of a tightly packed RGBA byte buffer top-to-bottom.
/// Each destination row reads exactly one source row, so the rows are
/// split across the rayon pool and joined before returning.
pub fn flip_vertical(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let row_len = (width * 4) as usize;
    debug_assert_eq!(pixels.len(), row_len * height as usize);

    let mut flipped = vec![0u8; pixels.len()];
    flipped
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(row, out)| {
            let src = (height as usize - 1 - row) * row_len;
            out.copy_from_slice(&pixels[src..src + row_len]);
        });
    flipped
}

/// Convert the finished frame to bytes, flip it upright and encode it to
/// `path` (format picked from the extension, PNG in practice).
pub fn write_image(framebuffer: &Framebuffer, path: &Path) -> Result<(), LoadError> {
    let (width, height) = (framebuffer.width(), framebuffer.height());
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for (_, _, color) in framebuffer.colors() {
        pixels.extend_from_slice(&color.to_rgba8());
    }

    let flipped = flip_vertical(width, height, &pixels);
    let img = RgbaImage::from_raw(width, height, flipped).expect("framebuffer byte size");
    img.save(path)?;
    Ok(())
}
