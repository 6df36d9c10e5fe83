//! Brute-force neighbor spacing audit.
//!
//! Decodes every cell center and, for each one, finds the nearest other center
//! in angle and in origin position. The worst of those nearest distances
//! bounds how far any input can sit from its representative, so this is used
//! offline to check that a `(resl, lever)` choice delivers the resolution it
//! claims. O(n²) in the number of cells scanned.

use rayon::prelude::*;

use crate::error::Result;
use crate::ray::Ray;
use crate::ray_bins::RayBins;
use crate::util::Timed;

/// Origins closer than this count as the same origin.
const DUPLICATE_ORIGIN_TOL: f64 = 1e-4;

/// Directions with a dot product above this count as the same direction.
const DUPLICATE_DIRECTION_DOT: f64 = 1.0 - 1e-9;

/// Worst-case nearest-neighbor spacing of cell centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborSpacing {
    /// Max over cells of the distance to the nearest distinct origin.
    pub linear: f64,
    /// Max over cells of the angle (radians) to the nearest distinct direction.
    pub angular: f64,
}

/// Max-over-cells of min-over-neighbors spacing, by exhaustive comparison.
///
/// With `face0_only`, only the cells of face 0 are scanned and compared.
/// Cells without any distinct neighbor contribute 0.
pub fn brute_maxmin_nbr(bins: &RayBins, face0_only: bool) -> Result<NeighborSpacing> {
    let _t = Timed::debug("brute_maxmin_nbr");

    let count = if face0_only {
        bins.cells_per_face()
    } else {
        bins.total_cell_count()
    };
    let centers = (0..count)
        .map(|key| bins.decode(key))
        .collect::<Result<Vec<Ray>>>()?;
    log::debug!("auditing {} cell centers", centers.len());

    let (linear, angular) = centers
        .par_iter()
        .enumerate()
        .map(|(i, a)| {
            let mut max_dot = f64::NEG_INFINITY;
            let mut min_dist = f64::INFINITY;
            for (j, b) in centers.iter().enumerate() {
                if i == j {
                    continue;
                }
                let dot = a.direction.dot(b.direction);
                if dot < DUPLICATE_DIRECTION_DOT {
                    max_dot = max_dot.max(dot);
                }
                let dist = (a.origin - b.origin).length();
                if dist > DUPLICATE_ORIGIN_TOL {
                    min_dist = min_dist.min(dist);
                }
            }
            let min_angle = if max_dot.is_finite() {
                max_dot.clamp(-1.0, 1.0).acos()
            } else {
                0.0
            };
            let min_dist = if min_dist.is_finite() { min_dist } else { 0.0 };
            (min_dist, min_angle)
        })
        .reduce(|| (0.0, 0.0), |x, y| (x.0.max(y.0), x.1.max(y.1)));

    Ok(NeighborSpacing { linear, angular })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeConfig;
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn test_tiny_lattice_spacing() {
        // 2x2 cartesian cubes of width 1 and a single angular cube per face:
        // even origins at (±0.5, ±0.5), odd origins at {0, 1}².
        let bins = RayBins::new(LatticeConfig::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(bins.cells_per_face(), 8);

        let spacing = brute_maxmin_nbr(&bins, true).unwrap();
        assert_relative_eq!(spacing.linear, 0.5f64.sqrt(), epsilon = 1e-12);

        // Face 0 holds two directions: the face center (+X) and the odd
        // corner at warped coordinates (0.75, 0.75), i.e. gnomonic 0.6875.
        let corner = DVec3::new(1.0, 0.6875, -0.6875).normalize();
        assert_relative_eq!(spacing.angular, corner.dot(DVec3::X).acos(), epsilon = 1e-9);
    }

    #[test]
    fn test_all_faces_keep_linear_spacing() {
        let bins = RayBins::new(LatticeConfig::new(1.0, 1.0, 1.0)).unwrap();
        let spacing = brute_maxmin_nbr(&bins, false).unwrap();
        // Every face repeats the same origins.
        assert_relative_eq!(spacing.linear, 0.5f64.sqrt(), epsilon = 1e-12);
        assert!(spacing.angular > 0.0 && spacing.angular < std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_linear_spacing_within_resolution() {
        let config = LatticeConfig::new(0.5, 1.0, 1.0);
        let bins = RayBins::new(config).unwrap();
        let spacing = brute_maxmin_nbr(&bins, false).unwrap();
        assert!(
            spacing.linear <= config.resl,
            "linear spacing {} exceeds resl {}",
            spacing.linear,
            config.resl
        );
        assert!(spacing.angular > 0.0);
    }

    #[test]
    fn test_finer_angles_shrink_spacing() {
        let coarse = RayBins::new(LatticeConfig::new(1.0, 1.0, 1.0)).unwrap();
        let fine = RayBins::new(LatticeConfig::new(1.0, 4.0, 1.0)).unwrap();
        assert!(fine.angular_axis_cell_count() > coarse.angular_axis_cell_count());
        let a = brute_maxmin_nbr(&coarse, true).unwrap().angular;
        let b = brute_maxmin_nbr(&fine, true).unwrap().angular;
        assert!(b < a, "finer lattice spacing {} not below coarse {}", b, a);
    }
}
