//! Reading and writing frames as image files
//!
//! The format is chosen from the file extension, e.g. `.png` or `.ppm`.

use crate::error::Result;
use crate::surface::{check_layout, BPP};

use std::path::Path;

/// Copy `height` rows of `width` pixels out of a strided buffer
pub fn pack_rows(buf: &[u8], width: usize, height: usize, stride: usize) -> Result<Vec<u8>> {
    check_layout(buf.len(), width, height, stride)?;
    let row_len = width * BPP;
    let mut out = Vec::with_capacity(row_len * height);
    for y in 0 .. height {
        let start = y * stride;
        out.extend_from_slice(&buf[start .. start + row_len]);
    }
    Ok(out)
}

/// Read an image as tightly packed rgb pixels, returning `(pixels, width, height)`
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize)> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Write a `width` x `height` rgb frame with rows `stride` bytes apart
///
/// Row 0 of the frame becomes the first row of the file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, stride: usize, filename: P) -> Result<()> {
    let filename = filename.as_ref();
    let data = pack_rows(buf, width, height, stride)?;
    image::save_buffer(filename, &data, width as u32, height as u32, image::ExtendedColorType::Rgb8)?;
    log::debug!("wrote {}x{} frame to {}", width, height, filename.display());
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are reported through the log
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::info!("image sizes differ: {}x{} and {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut same = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::info!("{} [{},{},{}]: {} {}", i, (i/BPP)%w1, (i/BPP)/w1, i%BPP, v1, v2);
            same = false;
        }
    }
    Ok(same)
}
