//! Clipping Region
//!
//! Convex polygon represented by the half-planes of its edges.
//!
//! See [Cyrus Beck](https://en.wikipedia.org/wiki/Cyrus-Beck_algorithm)
//!
//! See [Sutherland Hodgman](https://en.wikipedia.org/wiki/Sutherland-Hodgman_algorithm)

use crate::affine::Point;
use crate::half_plane::HalfPlane;

/// Vertices of the standard square, `(+-1, +-1)`
const STANDARD_SQUARE : [Point; 4] = [ Point { x: -1.0, y: -1.0 },
                                       Point { x: -1.0, y:  1.0 },
                                       Point { x:  1.0, y:  1.0 },
                                       Point { x:  1.0, y: -1.0 } ];

/// Convex clipping region
///
/// Points on the boundary of the region are outside.
#[derive(Debug,Clone,PartialEq)]
pub struct Clip {
    half_planes: Vec<HalfPlane>,
}

impl Default for Clip {
    /// Clip to the standard square with vertices `(+-1, +-1)`
    fn default() -> Self {
        Self::new(&STANDARD_SQUARE)
    }
}

impl Clip {
    /// Clip to the convex polygon with vertices `verts`
    ///
    /// Vertices may be ordered clockwise or counterclockwise.
    /// Panics with fewer than 3 vertices
    pub fn new(verts: &[Point]) -> Self {
        let n = verts.len();
        assert!(n >= 3, "clip region needs at least 3 vertices, got {}", n);
        // Any other vertex of a convex polygon lies inside each edge;
        //   use the one following the edge
        let half_planes = (0 .. n)
            .map(|i| HalfPlane::new(verts[i], verts[(i+1) % n], verts[(i+2) % n]))
            .collect();
        log::debug!("clip region with {} edges", n);
        Self { half_planes }
    }
    /// Half-planes of the region, one per edge
    pub fn half_planes(&self) -> &[HalfPlane] {
        &self.half_planes
    }
    /// Check if `p` is strictly inside the region
    pub fn contains(&self, p: &Point) -> bool {
        self.half_planes.iter().all(|h| h.contains(p))
    }
    /// Clip the segment from `p` to `q`
    ///
    /// Returns false if the segment misses the region. Otherwise `p` and
    /// `q` are replaced with the end points of the clipped segment.
    ///
    ///     use softraster::{Clip, Point};
    ///
    ///     let clip = Clip::default();
    ///     let mut p = Point::new(-3.0, 0.0);
    ///     let mut q = Point::new( 0.0, 0.0);
    ///     assert!(clip.segment(&mut p, &mut q));
    ///     assert!(p.near(&Point::new(-1.0, 0.0)));
    ///     assert!(q.near(&Point::new( 0.0, 0.0)));
    ///
    ///     let mut p = Point::new(2.0, -5.0);
    ///     let mut q = Point::new(2.0,  5.0);
    ///     assert!(! clip.segment(&mut p, &mut q));
    ///
    pub fn segment(&self, p: &mut Point, q: &mut Point) -> bool {
        for h in &self.half_planes {
            let interval = h.clip_segment(*p, *q);
            if interval.is_empty() {
                return false;
            }
            // Both ends measured from the segment before this edge
            let (p1, q1) = interval.endpoints(*p, *q);
            *p = p1;
            *q = q1;
        }
        true
    }
    /// Clip the polygon `verts` in place
    ///
    /// Returns false, leaving `verts` empty, if the polygon misses the region.
    /// The clipped polygon keeps the winding of the input, and a convex input
    /// gives a convex output which may be drawn as the fan
    /// `verts[0], verts[j], verts[j+1]`.
    ///
    ///     use softraster::{Clip, Point};
    ///
    ///     let clip = Clip::default();
    ///     let mut tri = vec![Point::new(0.0, 0.0),
    ///                        Point::new(4.0, 0.0),
    ///                        Point::new(0.0, 0.5)];
    ///     assert!(clip.polygon(&mut tri));
    ///     assert_eq!(tri.len(), 4);
    ///
    pub fn polygon(&self, verts: &mut Vec<Point>) -> bool {
        let mut input : Vec<Point> = Vec::with_capacity(verts.len() + self.half_planes.len());
        for h in &self.half_planes {
            std::mem::swap(&mut input, verts);
            verts.clear();
            let n = input.len();
            for i in 0 .. n {
                let v0 = input[i];
                let v1 = input[(i+1) % n];
                match (h.contains(&v0), h.contains(&v1)) {
                    (true, true) => verts.push(v0),
                    (true, false) => {
                        verts.push(v0);
                        let (_, q) = h.clip_segment(v0, v1).endpoints(v0, v1);
                        verts.push(q);
                    },
                    (false, true) => {
                        let (p, _) = h.clip_segment(v0, v1).endpoints(v0, v1);
                        verts.push(p);
                    },
                    (false, false) => {},
                }
            }
            log::trace!("clip polygon: {} -> {} vertices", n, verts.len());
            if verts.is_empty() {
                return false;
            }
        }
        true
    }
}
