
extern crate softraster;

mod common;

use softraster::{draw_line, Point, Raster, Rgb8};

use std::collections::BTreeSet;

fn line(w: usize, h: usize, p: Point, q: Point) -> (Vec<u8>, BTreeSet<(i64,i64)>) {
    let mut data = common::frame(w, h);
    let set = {
        let mut ras = Raster::new(&mut data, w, h, w * 3).unwrap();
        ras.set_rgb(Rgb8::white());
        draw_line(&mut ras, p, q);
        common::lit(&ras)
    };
    (data, set)
}

fn set(v: &[(i64,i64)]) -> BTreeSet<(i64,i64)> {
    v.iter().cloned().collect()
}

#[test]
fn horizontal() {
    let (p, q) = (Point::new(0.0, 0.0), Point::new(5.0, 0.0));
    let expected = set(&[(0,0),(1,0),(2,0),(3,0),(4,0),(5,0)]);
    assert_eq!(line(8, 4, p, q).1, expected);
    assert_eq!(line(8, 4, q, p).1, expected);
}

#[test]
fn shallow() {
    let (p, q) = (Point::new(0.0, 0.0), Point::new(5.0, 2.0));
    let expected = set(&[(0,0),(1,0),(2,1),(3,1),(4,2),(5,2)]);
    assert_eq!(line(8, 4, p, q).1, expected);
    assert_eq!(line(8, 4, q, p).1, expected);
}

#[test]
fn steep() {
    let (p, q) = (Point::new(0.0, 0.0), Point::new(2.0, 5.0));
    let expected = set(&[(0,0),(0,1),(1,2),(1,3),(2,4),(2,5)]);
    assert_eq!(line(4, 8, p, q).1, expected);
    assert_eq!(line(4, 8, q, p).1, expected);
}

#[test]
fn negative_slope() {
    let (p, q) = (Point::new(0.0, 5.0), Point::new(5.0, 3.0));
    let expected = set(&[(0,5),(1,5),(2,4),(3,4),(4,3),(5,3)]);
    assert_eq!(line(8, 8, p, q).1, expected);
    assert_eq!(line(8, 8, q, p).1, expected);
}

#[test]
fn vertical() {
    let (p, q) = (Point::new(3.2, 1.0), Point::new(3.2, 4.4));
    let expected = set(&[(3,1),(3,2),(3,3),(3,4)]);
    assert_eq!(line(8, 8, p, q).1, expected);
    assert_eq!(line(8, 8, q, p).1, expected);
}

#[test]
fn vertical_straddling_columns() {
    // x values differ by less than the tolerance but round apart
    let (p, q) = (Point::new(2.499999, 1.0), Point::new(2.500001, 4.0));
    let expected = set(&[(2,1),(2,2),(2,3),(2,4)]);
    assert_eq!(line(8, 8, p, q).1, expected);
    assert_eq!(line(8, 8, q, p).1, expected);
}

#[test]
fn single_point() {
    let p = Point::new(2.0, 2.0);
    assert_eq!(line(4, 4, p, p).1, set(&[(2,2)]));
}

#[test]
fn partly_off_surface() {
    let (_, lit) = line(4, 4, Point::new(-3.0, 1.0), Point::new(6.0, 1.0));
    assert_eq!(lit, set(&[(0,1),(1,1),(2,1),(3,1)]));
}

/// Lines radiating from the center, as a pinwheel
#[test]
fn radial_lines_are_connected() {
    let (w, h) = (41, 41);
    let c = Point::new(20.0, 20.0);
    for deg in (1 .. 360).step_by(6) {
        let a = (deg as f64).to_radians();
        let e = Point::new(c.x + 15.0 * a.cos(), c.y + 15.0 * a.sin());
        let (fwd, lit) = line(w, h, c, e);
        let (rev, _) = line(w, h, e, c);
        assert_eq!(fwd, rev, "angle {}", deg);
        assert!(lit.contains(&(20,20)), "angle {}", deg);

        let x_major = (e.x - c.x).abs() >= (e.y - c.y).abs();
        let mut pts : Vec<(i64,i64)> = lit.iter()
            .map(|&(x,y)| if x_major { (x,y) } else { (y,x) })
            .collect();
        pts.sort();
        // One pixel per step of the dominant axis
        for pair in pts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(b.0 - a.0, 1, "angle {} {:?}", deg, pts);
            assert!((b.1 - a.1).abs() <= 1, "angle {} {:?}", deg, pts);
        }
    }
}
