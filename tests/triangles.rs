
extern crate softraster;

mod common;

use softraster::{fill_convex, fill_triangle, Point, Raster, Rgb8};

use std::collections::BTreeSet;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn fill(w: usize, h: usize, tris: &[[Point; 3]]) -> BTreeSet<(i64,i64)> {
    let mut data = common::frame(w, h);
    let mut ras = Raster::new(&mut data, w, h, w * 3).unwrap();
    ras.set_rgb(Rgb8::white());
    for t in tris {
        fill_triangle(&mut ras, t[0], t[1], t[2]);
    }
    common::lit(&ras)
}

#[test]
fn shared_diagonal() {
    let a = [pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0)];
    let b = [pt(0.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)];
    let sa = fill(6, 6, &[a]);
    let sb = fill(6, 6, &[b]);
    assert!(sa.is_disjoint(&sb), "{:?}", sa.intersection(&sb).collect::<Vec<_>>());
    let all : BTreeSet<_> = sa.union(&sb).cloned().collect();
    assert_eq!(all, common::block(1, 4, 1, 4));
    // Diagonal pixels belong to one side only
    for i in 1 .. 5 {
        assert!(sb.contains(&(i,i)));
    }
}

#[test]
fn winding_does_not_matter() {
    let t = [pt(1.3, 0.7), pt(9.2, 3.1), pt(4.4, 8.8)];
    let ccw = fill(12, 12, &[t]);
    let cw = fill(12, 12, &[[t[0], t[2], t[1]]]);
    let rot = fill(12, 12, &[[t[1], t[2], t[0]]]);
    assert!(! ccw.is_empty());
    assert_eq!(ccw, cw);
    assert_eq!(ccw, rot);
}

#[test]
fn centers_on_owned_edge() {
    let t = [pt(0.5, 0.5), pt(7.5, 0.5), pt(0.5, 7.5)];
    let lit = fill(10, 10, &[t]);
    // Centers with x + y == 8 lie on the rising edge, which owns them
    let expected : BTreeSet<_> = common::block(1, 7, 1, 7).into_iter()
        .filter(|&(x,y)| x + y <= 8)
        .collect();
    assert_eq!(lit, expected);
}

#[test]
fn degenerate_draws_nothing() {
    let lit = fill(8, 8, &[[pt(1.0, 1.0), pt(3.0, 3.0), pt(5.0, 5.0)],
                           [pt(2.0, 2.0), pt(2.0, 2.0), pt(2.0, 2.0)]]);
    assert!(lit.is_empty());
}

#[test]
fn off_surface() {
    let lit = fill(8, 8, &[[pt(-10.0, -10.0), pt(-2.0, -10.0), pt(-5.0, -1.0)]]);
    assert!(lit.is_empty());
    let lit = fill(4, 4, &[[pt(-10.0, -10.0), pt(20.0, -10.0), pt(-10.0, 20.0)]]);
    assert_eq!(lit, common::block(0, 3, 0, 3));
}

/// Triangle fan of a regular polygon, no pixel written twice, no gaps
#[test]
fn fan_partition() {
    let n = 9;
    let c = pt(15.0, 15.0);
    let ring : Vec<Point> = (0 .. n).map(|i| {
        let a = i as f64 * 2.0 * std::f64::consts::PI / n as f64 + 0.1;
        pt(c.x + 12.0 * a.cos(), c.y + 12.0 * a.sin())
    }).collect();

    let mut total = 0;
    let mut union = BTreeSet::new();
    for j in 1 .. n - 1 {
        let s = fill(31, 31, &[[ring[0], ring[j], ring[j+1]]]);
        total += s.len();
        union.extend(s);
    }
    assert_eq!(total, union.len());

    let mut data = common::frame(31, 31);
    let mut ras = Raster::new(&mut data, 31, 31, 93).unwrap();
    ras.set_rgb(Rgb8::white());
    fill_convex(&mut ras, &ring);
    assert_eq!(common::lit(&ras), union);
    // Interior of the polygon is covered
    for y in 8 ..= 22 {
        for x in 8 ..= 22 {
            assert!(union.contains(&(x,y)), "gap at {} {}", x, y);
        }
    }
}
