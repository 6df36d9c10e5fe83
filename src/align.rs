//! Canonical alignment of ray pairs.
//!
//! The canonical frame places ray `a` at the origin pointing along +X and ray
//! `b`'s origin in the XY plane (on the +Y side). Only the relative placement
//! of the pair survives, so any rigid motion applied to both rays leaves the
//! aligned result unchanged. The alignment is asymmetric: `a` always defines
//! the frame.

use glam::{DMat3, DVec3};

use crate::error::{RayHashError, Result};
use crate::ray::Ray;

/// Maximum `|origin.z|` for a ray to count as lying in the canonical plane.
pub const CANONICAL_PLANE_TOLERANCE: f64 = 1e-3;

/// `|a.direction × (b.origin - a.origin)|` must exceed this fraction of the
/// origin separation, or the frame is undefined.
const DEGENERATE_SIN_TOL: f64 = 1e-12;

/// Rotation (rows: basis1, basis2, basis3) and translation taking `a` to the
/// canonical frame.
fn canonical_frame(a: &Ray, b: &Ray) -> Result<(DMat3, DVec3)> {
    if !a.is_valid() || !b.is_valid() {
        return Err(RayHashError::InvalidRay);
    }

    let basis1 = a.direction.normalize();
    let offset = b.origin - a.origin;
    let normal = basis1.cross(offset);
    // NaN fails this comparison too.
    let well_posed = normal.length() > DEGENERATE_SIN_TOL * offset.length();
    if !well_posed {
        return Err(RayHashError::DegenerateRayPair);
    }
    let basis3 = normal.normalize();
    let basis2 = basis3.cross(basis1).normalize();

    let rotation = DMat3::from_cols(basis1, basis2, basis3).transpose();
    let translation = -rotation.mul_vec3(a.origin);
    Ok((rotation, translation))
}

/// Express `b` in the frame where `a` is canonical.
///
/// Fails with [`RayHashError::DegenerateRayPair`] if `b`'s origin coincides
/// with `a`'s origin or lies on `a`'s line, and with
/// [`RayHashError::InvalidRay`] for NaN/infinite input or a zero direction.
pub fn align_ray_pair(a: &Ray, b: &Ray) -> Result<Ray> {
    let (rotation, translation) = canonical_frame(a, b)?;
    Ok(b.rotated(&rotation).translated(translation))
}
