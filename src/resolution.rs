//! Resolution planning: angular lattice size and face-coordinate bound
//! derived from a linear resolution and a lever-arm length.

/// Angular cells are made finer than `lever / resl` by this factor, since
/// angular error grows with distance from the origin.
const ANGULAR_OVERSAMPLE: f64 = 1.5;

/// Number of lattice cells along each angular (face) axis of the quadsphere.
///
/// `max(1, floor(lever / resl * 1.5))`. Non-finite ratios saturate.
#[inline]
pub fn qs_nc(resl: f64, lever: f64) -> u64 {
    // Float-to-int `as` truncates toward zero and saturates.
    (lever / resl * ANGULAR_OVERSAMPLE).max(1.0) as u64
}

/// Largest face-coordinate magnitude used for the angular axes.
///
/// Pulled in from the face's natural `[-1, 1]` extent by a quarter of a cell
/// so that boundary cell centers stay strictly inside the face.
#[inline]
pub fn qs_bound(resl: f64, lever: f64) -> f64 {
    1.0 - 0.25 / qs_nc(resl, lever) as f64
}
