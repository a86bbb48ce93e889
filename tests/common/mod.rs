#![allow(dead_code)]

use softraster::{Raster, Rgb8};

use std::collections::BTreeSet;

/// Black frame of `w` x `h` pixels with tightly packed rows
pub fn frame(w: usize, h: usize) -> Vec<u8> {
    vec![0u8; w * h * 3]
}

/// Locations of every pixel that is not black
pub fn lit(ras: &Raster) -> BTreeSet<(i64,i64)> {
    let mut out = BTreeSet::new();
    for y in 0 .. ras.height() as i64 {
        for x in 0 .. ras.width() as i64 {
            if ras.pixel(x,y) != Some(Rgb8::black()) {
                out.insert((x,y));
            }
        }
    }
    out
}

/// Set of `(x,y)` for `x` in `x0..=x1` and `y` in `y0..=y1`
pub fn block(x0: i64, x1: i64, y0: i64, y1: i64) -> BTreeSet<(i64,i64)> {
    (y0 ..= y1).flat_map(|y| (x0 ..= x1).map(move |x| (x,y))).collect()
}
