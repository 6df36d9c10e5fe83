//! Cube-to-sphere ("quadsphere") parameterization of unit directions.
//!
//! The sphere is split into six regions by the dominant axis of a direction,
//! one per cube face. Within a face, gnomonic coordinates `u, v ∈ [-1, 1]` are
//! passed through the S2 quadratic transform so that equal steps in face
//! coordinates cover roughly equal solid angle. Corners get compressed, face
//! centers get expanded.
//!
//! Face numbering: `+X, -X, +Y, -Y, +Z, -Z` → `0..6`.

use glam::DVec3;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// S2 quadratic transform: UV [-1, 1] → ST [0, 1]
#[inline]
fn uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// S2 inverse transform: ST [0, 1] → UV [-1, 1]
#[inline]
fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// Map a point on the unit sphere to (face, u, v) with gnomonic u, v ∈ [-1, 1].
#[inline]
fn point_to_face_uv(p: DVec3) -> (usize, f64, f64) {
    let (x, y, z) = (p.x, p.y, p.z);
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());

    if ax >= ay && ax >= az {
        if x >= 0.0 {
            (0, -z / ax, y / ax)
        } else {
            (1, z / ax, y / ax)
        }
    } else if ay >= ax && ay >= az {
        if y >= 0.0 {
            (2, x / ay, -z / ay)
        } else {
            (3, x / ay, z / ay)
        }
    } else if z >= 0.0 {
        (4, x / az, y / az)
    } else {
        (5, -x / az, y / az)
    }
}

#[inline]
fn face_uv_to_3d(face: usize, u: f64, v: f64) -> DVec3 {
    let p = match face {
        0 => DVec3::new(1.0, v, -u),
        1 => DVec3::new(-1.0, v, u),
        2 => DVec3::new(u, 1.0, -v),
        3 => DVec3::new(u, -1.0, v),
        4 => DVec3::new(u, v, 1.0),
        5 => DVec3::new(-u, v, -1.0),
        _ => unreachable!("invalid cube face"),
    };
    p.normalize()
}

/// Project a unit direction onto the quadsphere.
///
/// Returns `(face, x, y)` with `face ∈ [0, 6)` and `x, y ∈ [-1, 1]`.
/// `dir` must be finite and non-zero.
#[inline]
pub fn project(dir: DVec3) -> (usize, f64, f64) {
    let (face, u, v) = point_to_face_uv(dir);
    (face, 2.0 * uv_to_st(u) - 1.0, 2.0 * uv_to_st(v) - 1.0)
}

/// Inverse of [`project`]: unit direction for face coordinates `(x, y)`.
///
/// # Panics
/// Panics if `face >= FACE_COUNT`.
#[inline]
pub fn unproject(face: usize, x: f64, y: f64) -> DVec3 {
    let u = st_to_uv(0.5 * (x + 1.0));
    let v = st_to_uv(0.5 * (y + 1.0));
    face_uv_to_3d(face, u, v)
}
