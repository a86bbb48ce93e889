
extern crate softraster;

use softraster::{Affine, Hcoords, Point, Vector};
use softraster::{dot, abs, rot, trans, scale, scale_xy};

fn samples() -> Vec<Affine> {
    vec![
        rot(0.3) * trans(Vector::new(1.0, 2.0)),
        scale_xy(2.0, -3.0) * rot(1.1),
        trans(Vector::new(-4.0, 0.5)) * scale(0.25),
        Affine::new(Vector::new(1.0, 0.5), Vector::new(-0.25, 2.0), Point::new(7.0, -3.0)),
        Affine::identity(),
        scale(0.002),
        scale_xy(1e-3, 5e2) * trans(Vector::new(2.0, -1.0)),
    ]
}

#[test]
fn default_is_scaling_by_zero() {
    let a = Affine::default();
    assert_eq!(a[2].w, 1.0);
    for i in 0 .. 3 {
        for j in 0 .. 3 {
            if (i,j) != (2,2) {
                assert_eq!(a[i][j], 0.0);
            }
        }
    }
    assert_eq!(a * Point::new(5.0, -8.0), Point::origin());
}

#[test]
fn columns() {
    let a = Affine::new(Vector::new(1.0, 2.0), Vector::new(3.0, 4.0), Point::new(5.0, 6.0));
    assert_eq!(a.lx(), Vector::new(1.0, 2.0));
    assert_eq!(a.ly(), Vector::new(3.0, 4.0));
    assert_eq!(a.disp(), Point::new(5.0, 6.0));
    assert_eq!(a * Point::origin(), Point::new(5.0, 6.0));
    assert_eq!(a * Vector::new(1.0, 0.0), Vector::new(1.0, 2.0));
    assert_eq!(a * Hcoords::new(0.0, 1.0, 0.0), Hcoords::new(3.0, 4.0, 0.0));
}

#[test]
fn composition_is_associative() {
    let s = samples();
    for a in &s {
        for b in &s {
            for c in &s {
                assert!(((*a * *b) * *c).near(&(*a * (*b * *c))));
            }
        }
    }
}

#[test]
fn composition_applies_right_first() {
    let p = Point::new(1.0, 0.0);
    let m = rot(std::f64::consts::FRAC_PI_2) * trans(Vector::new(1.0, 0.0));
    assert!((m * p).near(&Point::new(0.0, 2.0)));
    let m = trans(Vector::new(1.0, 0.0)) * rot(std::f64::consts::FRAC_PI_2);
    assert!((m * p).near(&Point::new(1.0, 1.0)));
}

#[test]
fn inverse_both_sides() {
    for a in samples() {
        let inv = a.inverse();
        assert!((inv * a).near(&Affine::identity()), "{:?}", a);
        assert!((a * inv).near(&Affine::identity()), "{:?}", a);
    }
}

#[test]
#[should_panic]
fn inverse_of_singular() {
    scale_xy(1.0, 0.0).inverse();
}

#[test]
#[should_panic]
fn inverse_of_collinear_columns() {
    Affine::new(Vector::new(1e-4, 2e-4), Vector::new(3e-4, 6e-4), Point::origin()).inverse();
}

#[test]
fn inverse_of_small_scale() {
    let a = scale(0.002);
    assert!(a.determinant() < 1e-5);
    let p = Point::new(0.01, -0.004);
    assert!((a.inverse() * p).near(&Point::new(5.0, -2.0)));
}

#[test]
fn translation_ignores_vectors() {
    let t = trans(Vector::new(10.0, -3.0));
    assert_eq!(t * Vector::new(2.0, 3.0), Vector::new(2.0, 3.0));
    assert_eq!(t * Point::new(2.0, 3.0), Point::new(12.0, 0.0));
}

#[test]
fn rotation_preserves_length() {
    let v = Vector::new(3.0, -4.0);
    for i in 0 .. 16 {
        let r = rot(i as f64 * 0.4) * v;
        assert!(Hcoords::near(abs(&r), 5.0));
    }
}

#[test]
fn triple_arithmetic() {
    let u = Hcoords::new(1.0, 2.0, 1.0);
    let v = Hcoords::new(0.5, -1.0, 0.0);
    assert_eq!(u + v, Hcoords::new(1.5, 1.0, 1.0));
    assert_eq!(u - v, Hcoords::new(0.5, 3.0, 1.0));
    assert_eq!(-v, Hcoords::new(-0.5, 1.0, -0.0));
    assert_eq!(2.0 * u, Hcoords::new(2.0, 4.0, 2.0));
    assert_eq!(Point::from(u + v), Point::new(1.5, 1.0));
    assert_eq!(Point::new(3.0, 1.0) - Point::new(1.0, 1.0), Vector::new(2.0, 0.0));
}

#[test]
fn dot_and_length() {
    let u = Vector::new(1.0, 2.0);
    let v = Vector::new(-2.0, 1.0);
    assert_eq!(dot(&u, &v), 0.0);
    assert_eq!(abs(&Vector::new(3.0, 4.0)), 5.0);
}

#[test]
fn normalize() {
    for &(x,y) in &[(3.0, 4.0), (-1e-3, 2e-3), (1e4, -7.0), (0.0, -2.0)] {
        let v0 = Vector::new(x, y);
        let mut v = v0;
        assert!(v.normalize());
        assert!(Hcoords::near(v.length(), 1.0));
        assert!(Hcoords::near(dot(&v, &v0) / v0.length(), 1.0));
    }
    let mut z = Vector::new(0.0, 0.0);
    assert!(! z.normalize());
    assert_eq!(z, Vector::new(0.0, 0.0));
}

#[test]
#[should_panic]
fn point_requires_w_one() {
    let _ = Point::from(Hcoords::new(1.0, 2.0, 0.0));
}

#[test]
#[should_panic]
fn vector_requires_w_zero() {
    let _ = Vector::from(Hcoords::new(1.0, 2.0, 1.0));
}
