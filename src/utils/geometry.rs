// src/utils/geometry.rs

use crate::error::{GeometryError, Result};
use nalgebra::Vector3;

/// Cartesian coordinates of one atom (Angstroms)
pub type Point3 = [f64; 3];

/// Euclidean distance between two points of any (matching) dimensionality
///
/// Works on plain slices so callers can pass `[x, y, z]` rows or longer
/// feature vectors. Both points must have the same length.
pub fn euclid_dist(p1: &[f64], p2: &[f64]) -> Result<f64> {
    if p1.len() != p2.len() {
        return Err(GeometryError::DimensionMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }

    let sum_sq: f64 = p1.iter().zip(p2).map(|(a, b)| (a - b) * (a - b)).sum();
    Ok(sum_sq.sqrt())
}

/// Distance between two atoms (Angstroms)
pub fn distance(p1: Point3, p2: Point3) -> f64 {
    (Vector3::from(p1) - Vector3::from(p2)).norm()
}

/// Angle at `central_p` subtended by `p1` and `p2`, in degrees [0, 180]
///
/// Uses the law of cosines on the three pairwise distances:
/// ```text
/// cos(theta) = (a² + b² - c²) / (2ab)
/// a = |central - p1|, b = |central - p2|, c = |p1 - p2|
/// ```
/// The cosine is clamped to [-1, 1] before `acos` so near-collinear triples
/// do not produce NaN.
pub fn get_three_point_angle(central_p: Point3, p1: Point3, p2: Point3) -> Result<f64> {
    let a = distance(central_p, p1);
    let b = distance(central_p, p2);
    let c = distance(p1, p2);

    if a == 0.0 || b == 0.0 {
        return Err(GeometryError::DegenerateGeometry);
    }

    let cos = (a * a + b * b - c * c) / (2.0 * a * b);
    Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Torsion (dihedral) angle P1-P2-P3-P4 in degrees, range (-180, 180]
///
/// Returns `DegenerateGeometry` when the central bond P2-P3 has zero length.
pub fn dihedral_angle(p1: Point3, p2: Point3, p3: Point3, p4: Point3) -> Result<f64> {
    let b1 = Vector3::from(p2) - Vector3::from(p1);
    let b2 = Vector3::from(p3) - Vector3::from(p2);
    let b3 = Vector3::from(p4) - Vector3::from(p3);

    let b2_len = b2.norm();
    if b2_len == 0.0 {
        return Err(GeometryError::DegenerateGeometry);
    }

    // normals of the planes (b1, b2) and (b2, b3)
    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let x = n1.dot(&n2);
    let y = (b2 / b2_len).dot(&n1.cross(&n2));

    let angle = y.atan2(x).to_degrees();
    // atan2 gives -180 for the anti configuration when y is -0.0
    Ok(if angle == -180.0 { 180.0 } else { angle })
}
