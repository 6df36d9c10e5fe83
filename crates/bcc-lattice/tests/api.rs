//! Public API integration tests for bcc-lattice.

use bcc_lattice::BccLattice;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn test_lattice() -> BccLattice<4> {
    BccLattice::new(
        [3, 4, 2, 5],
        [-3.0, -1.0, -0.75, -0.5],
        [3.0, 1.0, 0.75, 0.5],
    )
    .expect("valid lattice")
}

/// Squared distance in grid units (per-axis widths normalized to 1).
fn grid_dist_sq(lattice: &BccLattice<4>, a: [f64; 4], b: [f64; 4]) -> f64 {
    (0..4)
        .map(|i| {
            let d = (a[i] - b[i]) / lattice.width()[i];
            d * d
        })
        .sum()
}

#[test]
fn test_every_center_maps_to_its_own_id() {
    let lattice = test_lattice();
    for id in 0..lattice.len() {
        let center = lattice.cell_center(id).expect("id in range");
        assert_eq!(
            lattice.cell_id(center),
            id,
            "center {:?} of cell {} mapped elsewhere",
            center,
            id
        );
    }
}

#[test]
fn test_cell_id_is_nearest_center() {
    let lattice = test_lattice();
    let centers: Vec<[f64; 4]> = (0..lattice.len())
        .map(|id| lattice.cell_center(id).unwrap())
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    for _ in 0..2000 {
        let p = [
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-0.75..0.75),
            rng.gen_range(-0.5..0.5),
        ];
        let id = lattice.cell_id(p);
        let got = grid_dist_sq(&lattice, p, centers[id as usize]);
        let best = centers
            .iter()
            .map(|&c| grid_dist_sq(&lattice, p, c))
            .fold(f64::INFINITY, f64::min);
        assert!(
            got <= best + 1e-9,
            "point {:?}: chose cell {} at dist² {}, best is {}",
            p,
            id,
            got,
            best
        );
    }
}

#[test]
fn test_ids_stay_in_range_for_wild_inputs() {
    let lattice = test_lattice();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = [
            rng.gen_range(-1e6..1e6),
            rng.gen_range(-1e6..1e6),
            rng.gen_range(-1e6..1e6),
            rng.gen_range(-1e6..1e6),
        ];
        assert!(lattice.cell_id(p) < lattice.len());
    }
    assert!(lattice.cell_id([f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.0]) < lattice.len());
}
