//! Pixel Surface
//!
//! A drawing cursor over a caller-owned RGB frame buffer.
//!
//! Pixels are 3 bytes, `r, g, b`, and rows are `stride` bytes apart, so
//! pixel `(x, y)` starts at byte `y * stride + 3 * x`. The cursor moves one
//! pixel at a time, each move a constant adjustment of the byte index.

use crate::color::Rgb8;
use crate::error::{Error, Result};

/// Bytes per pixel
pub const BPP : usize = 3;

/// Check that `len` bytes hold `height` rows of `width` pixels, `stride` bytes apart
///
/// The last row only needs `3 * width` bytes.
pub fn check_layout(len: usize, width: usize, height: usize, stride: usize) -> Result<()> {
    if stride < BPP * width {
        return Err(Error::InvalidStride { stride, width });
    }
    let required = if width == 0 || height == 0 {
        0
    } else {
        (height - 1) * stride + BPP * width
    };
    if len < required {
        return Err(Error::BufferTooSmall { len, required });
    }
    Ok(())
}

/// Single pixel cursor movement
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Step {
    /// One pixel right
    IncX,
    /// One pixel left
    DecX,
    /// One pixel up, to the next row
    IncY,
    /// One pixel down, to the previous row
    DecY,
}

impl Step {
    /// Step in the opposite direction
    pub fn reverse(self) -> Step {
        match self {
            Step::IncX => Step::DecX,
            Step::DecX => Step::IncX,
            Step::IncY => Step::DecY,
            Step::DecY => Step::IncY,
        }
    }
}

/// Drawing surface bound to an external RGB buffer
///
/// The buffer is borrowed for the lifetime of the Raster and is never
/// reallocated or released by it.
///
///     use softraster::{Raster, Rgb8};
///
///     let mut data = vec![0u8; 4 * 3 * 2];
///     let mut ras = Raster::new(&mut data, 4, 2, 12).unwrap();
///     ras.set_color(255, 0, 0);
///     ras.goto_point(1, 1);
///     ras.write_pixel();
///     ras.increment_x();
///     ras.write_pixel();
///     assert_eq!(ras.pixel(2, 1), Some(Rgb8::new(255, 0, 0)));
///     assert_eq!(ras.pixel(0, 1), Some(Rgb8::black()));
///     assert_eq!(ras.pixel(4, 1), None);
///
#[derive(Debug)]
pub struct Raster<'a> {
    buf: &'a mut [u8],
    width: i64,
    height: i64,
    stride: i64,
    x: i64,
    y: i64,
    index: i64,
    color: Rgb8,
}

impl<'a> Raster<'a> {
    /// Create a surface over `buf` of `width` x `height` pixels with rows
    /// `stride` bytes apart
    ///
    /// The stride may include padding beyond `3 * width` bytes. The last
    /// row only needs `3 * width` bytes.
    pub fn new(buf: &'a mut [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        check_layout(buf.len(), width, height, stride)?;
        log::debug!("raster {}x{} stride {} over {} bytes", width, height, stride, buf.len());
        Ok(Self { buf,
                  width: width as i64,
                  height: height as i64,
                  stride: stride as i64,
                  x: 0, y: 0, index: 0,
                  color: Rgb8::black(),
        })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width as usize
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height as usize
    }
    /// Row stride in bytes
    pub fn stride(&self) -> usize {
        self.stride as usize
    }
    /// Current cursor location
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }
    /// Current byte offset of the cursor
    pub fn index(&self) -> i64 {
        self.index
    }
    /// Current foreground color
    pub fn color(&self) -> Rgb8 {
        self.color
    }
    /// Underlying pixel data
    pub fn data(&self) -> &[u8] {
        &self.buf[..]
    }
    /// Set the cursor to pixel `(x, y)` without writing
    pub fn goto_point(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
        self.index = y * self.stride + BPP as i64 * x;
    }
    /// Set the foreground color used by later writes
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Rgb8::new(r, g, b);
    }
    /// Set the foreground color from an [Rgb8](../color/struct.Rgb8.html)
    pub fn set_rgb(&mut self, c: Rgb8) {
        self.color = c;
    }
    /// Check if `(x,y)` lies within the surface
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
    /// Write the foreground color at the cursor
    ///
    /// Locations outside the surface are ignored
    pub fn write_pixel(&mut self) {
        if ! self.in_bounds(self.x, self.y) {
            return;
        }
        let i = self.index as usize;
        self.buf[i .. i + BPP].copy_from_slice(&self.color.to_bytes());
    }
    /// Move the cursor one pixel right
    pub fn increment_x(&mut self) {
        self.x += 1;
        self.index += BPP as i64;
    }
    /// Move the cursor one pixel left
    pub fn decrement_x(&mut self) {
        self.x -= 1;
        self.index -= BPP as i64;
    }
    /// Move the cursor one pixel up
    pub fn increment_y(&mut self) {
        self.y += 1;
        self.index += self.stride;
    }
    /// Move the cursor one pixel down
    pub fn decrement_y(&mut self) {
        self.y -= 1;
        self.index -= self.stride;
    }
    /// Move the cursor one pixel in direction `s`
    #[inline]
    pub fn step(&mut self, s: Step) {
        match s {
            Step::IncX => self.increment_x(),
            Step::DecX => self.decrement_x(),
            Step::IncY => self.increment_y(),
            Step::DecY => self.decrement_y(),
        }
    }
    /// Color of pixel `(x,y)`, None if outside the surface
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        if ! self.in_bounds(x, y) {
            return None;
        }
        let i = (y * self.stride + BPP as i64 * x) as usize;
        Some(Rgb8::new(self.buf[i], self.buf[i+1], self.buf[i+2]))
    }
    /// Set every visible pixel to `c`
    ///
    /// Row padding is left untouched; cursor and foreground color are unchanged.
    pub fn clear(&mut self, c: Rgb8) {
        let bytes = c.to_bytes();
        let row_len = BPP * self.width as usize;
        for y in 0 .. self.height as usize {
            let start = y * self.stride as usize;
            self.buf[start .. start + row_len]
                .chunks_exact_mut(BPP)
                .for_each(|px| px.copy_from_slice(&bytes));
        }
    }
}
