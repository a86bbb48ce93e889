//! Meshes
//!
//! Indexed vertex meshes and their rendering through a clip region.

use crate::affine::{Affine, Point};
use crate::clip::Clip;
use crate::draw::{draw_line, fill_convex};
use crate::surface::Raster;

/// Edge between two vertices
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Edge(pub usize, pub usize);

/// Triangular face of three vertices
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Face(pub usize, pub usize, pub usize);

/// Something with vertices, edges and faces
pub trait Mesh {
    /// Vertices in object coordinates
    fn vertices(&self) -> &[Point];
    /// Edges as pairs of vertex indices
    fn edges(&self) -> &[Edge];
    /// Faces as triples of vertex indices
    fn faces(&self) -> &[Face];
}

/// Mesh with owned storage
#[derive(Debug,Clone,Default,PartialEq)]
pub struct PolyMesh {
    vertices: Vec<Point>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl PolyMesh {
    /// Create a mesh
    ///
    /// Panics if an edge or face refers to a missing vertex
    pub fn new(vertices: Vec<Point>, edges: Vec<Edge>, faces: Vec<Face>) -> Self {
        let n = vertices.len();
        assert!(edges.iter().all(|e| e.0 < n && e.1 < n), "edge vertex out of range");
        assert!(faces.iter().all(|f| f.0 < n && f.1 < n && f.2 < n), "face vertex out of range");
        Self { vertices, edges, faces }
    }
    /// Unit square centered at the origin
    pub fn square() -> Self {
        Self::new(vec![ Point::new(-0.5, -0.5),
                        Point::new( 0.5, -0.5),
                        Point::new( 0.5,  0.5),
                        Point::new(-0.5,  0.5) ],
                  vec![ Edge(0,1), Edge(1,2), Edge(2,3), Edge(3,0) ],
                  vec![ Face(0,1,2), Face(0,2,3) ])
    }
}

impl Mesh for PolyMesh {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
    fn faces(&self) -> &[Face] {
        &self.faces
    }
}

fn transformed<M: Mesh + ?Sized>(mesh: &M, to_device: &Affine) -> Vec<Point> {
    mesh.vertices().iter().map(|&p| *to_device * p).collect()
}

/// Fill the faces of `mesh` in the current color
///
/// Vertices are mapped by `to_device`, each face is clipped to `clip`
/// and the visible part filled as a fan.
pub fn render_faces<M: Mesh + ?Sized>(raster: &mut Raster, clip: &Clip, mesh: &M, to_device: &Affine) {
    let verts = transformed(mesh, to_device);
    let mut poly = Vec::with_capacity(8);
    for f in mesh.faces() {
        poly.clear();
        poly.extend_from_slice(&[verts[f.0], verts[f.1], verts[f.2]]);
        if clip.polygon(&mut poly) {
            fill_convex(raster, &poly);
        }
    }
}

/// Draw the edges of `mesh` in the current color
///
/// Vertices are mapped by `to_device` and each edge clipped to `clip`.
pub fn render_edges<M: Mesh + ?Sized>(raster: &mut Raster, clip: &Clip, mesh: &M, to_device: &Affine) {
    let verts = transformed(mesh, to_device);
    for e in mesh.edges() {
        let (mut p, mut q) = (verts[e.0], verts[e.1]);
        if clip.segment(&mut p, &mut q) {
            draw_line(raster, p, q);
        }
    }
}
