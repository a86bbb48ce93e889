//! Incremental Rasterization
//!
//! Lines, rectangles and triangles are scan converted by moving a
//! [Raster](../surface/struct.Raster.html) cursor one pixel at a time.
//! Coordinates are device pixels; pixel `(i,j)` is centered on the
//! integer location `(i,j)`.

use crate::affine::{Hcoords, Point};
use crate::surface::{Raster, Step};

/// Round half up, `floor(v + 0.5)`
pub fn round(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Line walked along its dominant axis
///
/// The minor axis is tracked as a real value and the cursor moves along it
/// only when the rounded value changes.
#[derive(Debug)]
struct LineStepper {
    /// First and last pixel along the dominant axis
    start: i64,
    end: i64,
    /// Exact minor axis value at the current pixel
    minor: f64,
    /// Rounded minor axis value at the current pixel
    minor_px: i64,
    /// Change in the minor axis per dominant pixel
    slope: f64,
    dominant: Step,
    minor_step: Step,
}

impl LineStepper {
    /// `d0 <= d1` are the dominant coordinates of the end points,
    ///   `m0` is the minor coordinate at `d0`
    fn new(d0: f64, d1: f64, m0: f64, slope: f64, dominant: Step, up: Step) -> Self {
        let start = round(d0);
        let end = round(d1);
        // Minor value at the center of the first pixel, not the end point
        let minor = m0 + slope * (start as f64 - d0);
        let minor_step = if slope >= 0.0 { up } else { up.reverse() };
        Self { start, end, minor, minor_px: round(minor), slope, dominant, minor_step }
    }
    fn rasterize(mut self, raster: &mut Raster) {
        for _ in self.start ..= self.end {
            raster.write_pixel();
            let prev = self.minor_px;
            self.minor += self.slope;
            self.minor_px = round(self.minor);
            if prev != self.minor_px {
                raster.step(self.minor_step);
            }
            raster.step(self.dominant);
        }
    }
}

/// Draw the line segment from `p` to `q`
///
/// Each pixel of the line is written once, and the result does not depend
/// on the order of the end points
///
///     use softraster::{draw_line, Point, Raster, Rgb8};
///
///     let mut data = vec![0u8; 8 * 8 * 3];
///     let mut ras = Raster::new(&mut data, 8, 8, 24).unwrap();
///     ras.set_color(255, 255, 255);
///     draw_line(&mut ras, Point::new(5.0, 2.0), Point::new(0.0, 0.0));
///     let lit : Vec<_> = (0..8).flat_map(|y| (0..8).map(move |x| (x,y)))
///         .filter(|&(x,y)| ras.pixel(x,y) == Some(Rgb8::white()))
///         .collect();
///     assert_eq!(lit, vec![(0,0),(1,0),(2,1),(3,1),(4,2),(5,2)]);
///
pub fn draw_line(raster: &mut Raster, p: Point, q: Point) {
    if Hcoords::near(p.x, q.x) {
        draw_vertical(raster, p, q);
        return;
    }
    let slope = (q.y - p.y) / (q.x - p.x);
    let (lo, hi) = if slope.abs() <= 1.0 {
        if p.x < q.x { (p, q) } else { (q, p) }
    } else if p.y < q.y {
        (p, q)
    } else {
        (q, p)
    };
    let line = if slope.abs() <= 1.0 {
        let line = LineStepper::new(lo.x, hi.x, lo.y, slope, Step::IncX, Step::IncY);
        raster.goto_point(line.start, line.minor_px);
        line
    } else {
        let line = LineStepper::new(lo.y, hi.y, lo.x, 1.0 / slope, Step::IncY, Step::IncX);
        raster.goto_point(line.minor_px, line.start);
        line
    };
    line.rasterize(raster);
}

/// Line with no change in x
///
/// The column is taken from the lower end point
fn draw_vertical(raster: &mut Raster, p: Point, q: Point) {
    let (lo, hi) = if (p.y, p.x) < (q.y, q.x) { (p, q) } else { (q, p) };
    let (y0, y1) = (round(lo.y), round(hi.y));
    raster.goto_point(round(lo.x), y0);
    for _ in y0 ..= y1 {
        raster.write_pixel();
        raster.increment_y();
    }
}

/// Fill the `w` x `h` rectangle with lower left corner `(x,y)`
///
/// Rows are traversed alternately left to right and right to left so the
/// cursor never jumps back to the start of a row
///
///     use softraster::{fill_rect, Raster, Rgb8};
///
///     let mut data = vec![0u8; 4 * 4 * 3];
///     let mut ras = Raster::new(&mut data, 4, 4, 12).unwrap();
///     ras.set_color(9, 9, 9);
///     fill_rect(&mut ras, 0, 0, 3, 2);
///     assert_eq!(ras.pixel(2, 1), Some(Rgb8::gray(9)));
///     assert_eq!(ras.pixel(3, 0), Some(Rgb8::black()));
///     assert_eq!(ras.pixel(0, 2), Some(Rgb8::black()));
///
pub fn fill_rect(raster: &mut Raster, x: i64, y: i64, w: i64, h: i64) {
    if w <= 0 || h <= 0 {
        return;
    }
    const TRAVERSALS : [Step; 2] = [Step::IncX, Step::DecX];
    raster.goto_point(x, y);
    for row in 0 .. h {
        let dir = TRAVERSALS[(row % 2) as usize];
        // Last pixel of the row is written without stepping past it
        for _ in 1 .. w {
            raster.write_pixel();
            raster.step(dir);
        }
        raster.write_pixel();
        raster.increment_y();
    }
}

/// Draw the outline of the `w` x `h` rectangle with lower left corner `(x,y)`
///
/// Each edge stops one pixel short of the next corner, which is written
/// as the start of the following edge
pub fn draw_rect(raster: &mut Raster, x: i64, y: i64, w: i64, h: i64) {
    if w <= 0 || h <= 0 {
        return;
    }
    // No interior, the outline is the whole rectangle
    if w == 1 || h == 1 {
        fill_rect(raster, x, y, w, h);
        return;
    }
    raster.goto_point(x, y);
    draw_run(raster, Step::IncX, w - 1);
    draw_run(raster, Step::IncY, h - 1);
    draw_run(raster, Step::DecX, w - 1);
    draw_run(raster, Step::DecY, h - 1);
}

fn draw_run(raster: &mut Raster, dir: Step, len: i64) {
    for _ in 0 .. len {
        raster.write_pixel();
        raster.step(dir);
    }
}

/// Twice the signed area of `a`, `b` and `(x,y)`, positive when counterclockwise
fn orient(a: Point, b: Point, x: f64, y: f64) -> f64 {
    (b.x - a.x) * (y - a.y) - (b.y - a.y) * (x - a.x)
}

/// Edge function of `(x,y)` against the line from `a` to `b`, positive on the left
///
/// Evaluated with the end points in a fixed order so that the two
/// triangles sharing an edge compute exactly opposite values.
fn edge_function(a: Point, b: Point, x: f64, y: f64) -> f64 {
    if (a.x, a.y) <= (b.x, b.y) {
        orient(a, b, x, y)
    } else {
        -orient(b, a, x, y)
    }
}

/// Edge of a counterclockwise triangle which keeps pixels lying exactly on it
///
/// The same edge walked in the other direction by a neighboring triangle
/// is never an owner, so shared pixels are written once.
fn owns_boundary(a: Point, b: Point) -> bool {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    dy > 0.0 || (dy == 0.0 && dx < 0.0)
}

/// Fill the triangle `p`, `q`, `r`
///
/// Pixels whose centers are inside the triangle are written once. Pixels
/// exactly on an edge belong to only one of the two triangles sharing the
/// edge. Degenerate triangles draw nothing.
pub fn fill_triangle(raster: &mut Raster, p: Point, q: Point, r: Point) {
    let area = orient(p, q, r.x, r.y);
    if area == 0.0 {
        return;
    }
    let (q, r) = if area > 0.0 { (q, r) } else { (r, q) };
    let edges = [(p, q), (q, r), (r, p)];
    let owned = [owns_boundary(p, q), owns_boundary(q, r), owns_boundary(r, p)];

    let (w, h) = (raster.width() as i64, raster.height() as i64);
    let x0 = p.x.min(q.x).min(r.x).ceil().max(0.0) as i64;
    let x1 = (p.x.max(q.x).max(r.x).floor() as i64).min(w - 1);
    let y0 = p.y.min(q.y).min(r.y).ceil().max(0.0) as i64;
    let y1 = (p.y.max(q.y).max(r.y).floor() as i64).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in y0 ..= y1 {
        raster.goto_point(x0, y);
        for x in x0 ..= x1 {
            let inside = edges.iter().zip(owned.iter()).all(|(&(a, b), &own)| {
                let e = edge_function(a, b, x as f64, y as f64);
                e > 0.0 || (e == 0.0 && own)
            });
            if inside {
                raster.write_pixel();
            }
            raster.increment_x();
        }
    }
}

/// Fill the convex polygon `verts` as the fan `verts[0], verts[j], verts[j+1]`
///
/// Used to draw the output of [Clip::polygon](../clip/struct.Clip.html#method.polygon)
pub fn fill_convex(raster: &mut Raster, verts: &[Point]) {
    if verts.len() < 3 {
        return;
    }
    for j in 1 .. verts.len() - 1 {
        fill_triangle(raster, verts[0], verts[j], verts[j+1]);
    }
}
