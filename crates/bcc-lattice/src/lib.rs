//! Body-centered-cubic (BCC) lattice quantizer over a bounded N-dimensional box.
//!
//! The box is divided into `nside[i]` cubes per axis. Two interleaved sub-grids
//! supply the cell centers:
//! - even centers sit in the middle of each cube: `lower + width * (i + 0.5)`
//! - odd centers sit on the cube corners: `lower + width * (i + 1.0)`
//!
//! A point maps to whichever of the two nearest candidates is closer, which
//! gives rounder cells than a plain cubic grid with the same id budget.
//!
//! Cell ids keep the parity in the low bit:
//! `id = (Σ stride[i] * index[i]) << 1 | odd`, with axis 0 varying fastest.
//!
//! # Example
//!
//! ```
//! use bcc_lattice::BccLattice;
//!
//! let lattice = BccLattice::new([4, 4], [-1.0, -1.0], [1.0, 1.0]).unwrap();
//! assert_eq!(lattice.len(), 32);
//!
//! let id = lattice.cell_id([0.1, -0.3]);
//! let center = lattice.cell_center(id).unwrap();
//! assert_eq!(lattice.cell_id(center), id);
//! ```

mod error;

pub use error::LatticeError;

/// BCC quantizer for points in `[lower, upper]` (per axis).
///
/// Points outside the box are clamped to the nearest boundary cell; non-finite
/// coordinates fall into the lowest cell of their axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BccLattice<const N: usize> {
    nside: [u64; N],
    /// Running product of `nside`, used to pack per-axis indices.
    stride: [u64; N],
    lower: [f64; N],
    upper: [f64; N],
    width: [f64; N],
    len: u64,
}

impl<const N: usize> BccLattice<N> {
    /// Build a lattice with `nside[i]` cubes on axis `i` spanning `[lower[i], upper[i]]`.
    pub fn new(nside: [u64; N], lower: [f64; N], upper: [f64; N]) -> Result<Self, LatticeError> {
        let mut stride = [0u64; N];
        let mut width = [0.0f64; N];
        let mut cubes: u64 = 1;

        for axis in 0..N {
            if nside[axis] == 0 {
                return Err(LatticeError::ZeroAxis { axis });
            }
            let (lo, hi) = (lower[axis], upper[axis]);
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(LatticeError::InvalidBounds {
                    axis,
                    lower: lo,
                    upper: hi,
                });
            }
            stride[axis] = cubes;
            cubes = cubes
                .checked_mul(nside[axis])
                .ok_or(LatticeError::TooManyCells)?;
            width[axis] = (hi - lo) / nside[axis] as f64;
        }

        // Low bit of every id carries the sub-grid parity.
        let len = cubes.checked_mul(2).ok_or(LatticeError::TooManyCells)?;

        Ok(Self {
            nside,
            stride,
            lower,
            upper,
            width,
            len,
        })
    }

    /// Total number of cells (both sub-grids).
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always false; a valid lattice has at least two cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cubes per axis.
    #[inline]
    pub fn nside(&self) -> &[u64; N] {
        &self.nside
    }

    #[inline]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    #[inline]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Cube edge length per axis.
    #[inline]
    pub fn width(&self) -> &[f64; N] {
        &self.width
    }

    /// Id of the cell whose center is nearest to `coord`.
    pub fn cell_id(&self, coord: [f64; N]) -> u64 {
        let mut even = [0u64; N];
        let mut odd = [0u64; N];
        let mut even_dist_sq = 0.0;
        let mut odd_dist_sq = 0.0;

        for axis in 0..N {
            // Grid units: even centers at i + 0.5, odd centers at i + 1.
            let v = (coord[axis] - self.lower[axis]) / self.width[axis];
            let last = self.nside[axis] - 1;

            let ie = clamp_index(v.floor(), last);
            let io = clamp_index((v - 0.5).floor(), last);

            let de = v - (ie as f64 + 0.5);
            let d_o = v - (io as f64 + 1.0);
            even_dist_sq += de * de;
            odd_dist_sq += d_o * d_o;

            even[axis] = ie;
            odd[axis] = io;
        }

        // Ties (and NaN distances) resolve to the even sub-grid.
        if odd_dist_sq < even_dist_sq {
            self.pack(&odd, true)
        } else {
            self.pack(&even, false)
        }
    }

    /// Center of cell `id`, or `None` if `id` is not a cell of this lattice.
    pub fn cell_center(&self, id: u64) -> Option<[f64; N]> {
        if id >= self.len {
            return None;
        }
        let offset = if id & 1 == 1 { 1.0 } else { 0.5 };
        let mut rest = id >> 1;
        let mut center = [0.0f64; N];
        for axis in 0..N {
            let i = rest % self.nside[axis];
            rest /= self.nside[axis];
            center[axis] = self.lower[axis] + self.width[axis] * (i as f64 + offset);
        }
        Some(center)
    }

    #[inline]
    fn pack(&self, indices: &[u64; N], odd: bool) -> u64 {
        let cube: u64 = indices
            .iter()
            .zip(self.stride.iter())
            .map(|(&i, &s)| i * s)
            .sum();
        (cube << 1) | odd as u64
    }
}

/// Clamp a floored grid coordinate into `[0, last]`. NaN maps to 0.
#[inline]
fn clamp_index(f: f64, last: u64) -> u64 {
    if f.is_nan() || f <= 0.0 {
        0
    } else if f >= last as f64 {
        last
    } else {
        f as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_both_subgrids() {
        let lattice = BccLattice::new([3, 5, 2], [0.0; 3], [1.0; 3]).unwrap();
        assert_eq!(lattice.len(), 2 * 3 * 5 * 2);
        assert_eq!(lattice.nside(), &[3, 5, 2]);
    }

    #[test]
    fn test_width() {
        let lattice = BccLattice::new([4, 8], [-2.0, 0.0], [2.0, 1.0]).unwrap();
        assert_eq!(lattice.width(), &[1.0, 0.125]);
    }

    #[test]
    fn test_even_and_odd_centers() {
        let lattice = BccLattice::new([2, 2], [0.0, 0.0], [2.0, 2.0]).unwrap();
        // id 0: even cube (0, 0)
        assert_eq!(lattice.cell_center(0), Some([0.5, 0.5]));
        // id 1: odd cube (0, 0), shifted by half a cell
        assert_eq!(lattice.cell_center(1), Some([1.0, 1.0]));
        // axis 0 varies fastest
        assert_eq!(lattice.cell_center(2), Some([1.5, 0.5]));
        assert_eq!(lattice.cell_center(4), Some([0.5, 1.5]));
        assert_eq!(lattice.cell_center(8), None);
    }

    #[test]
    fn test_nearest_subgrid_wins() {
        let lattice = BccLattice::new([2, 2], [0.0, 0.0], [2.0, 2.0]).unwrap();
        assert_eq!(lattice.cell_id([0.45, 0.55]), 0);
        assert_eq!(lattice.cell_id([0.95, 1.1]), 1);
        assert_eq!(lattice.cell_id([1.6, 0.4]), 2);
    }

    #[test]
    fn test_out_of_box_is_clamped() {
        let lattice = BccLattice::new([4], [0.0], [4.0]).unwrap();
        let low = lattice.cell_id([-100.0]);
        let high = lattice.cell_id([100.0]);
        assert_eq!(lattice.cell_center(low), Some([0.5]));
        // The last odd center sits exactly on the upper bound.
        assert_eq!(lattice.cell_center(high), Some([4.0]));
    }

    #[test]
    fn test_non_finite_goes_to_lowest_cell() {
        let lattice = BccLattice::new([4, 4], [0.0, 0.0], [4.0, 4.0]).unwrap();
        let id = lattice.cell_id([f64::NAN, f64::NAN]);
        assert_eq!(lattice.cell_center(id), Some([0.5, 0.5]));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            BccLattice::new([2, 0], [0.0; 2], [1.0; 2]),
            Err(LatticeError::ZeroAxis { axis: 1 })
        );
        assert!(matches!(
            BccLattice::new([2, 2], [0.0, 1.0], [1.0, 1.0]),
            Err(LatticeError::InvalidBounds { axis: 1, .. })
        ));
        assert!(matches!(
            BccLattice::new([2], [f64::NEG_INFINITY], [1.0]),
            Err(LatticeError::InvalidBounds { axis: 0, .. })
        ));
        assert_eq!(
            BccLattice::new([u64::MAX, 2], [0.0; 2], [1.0; 2]),
            Err(LatticeError::TooManyCells)
        );
        assert_eq!(
            BccLattice::new([1u64 << 63], [0.0], [1.0]),
            Err(LatticeError::TooManyCells)
        );
    }
}
