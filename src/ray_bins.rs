//! Quadsphere × BCC binning of canonical ray pairs.
//!
//! A canonical ray (origin in the XY plane) is described by four numbers: the
//! in-plane origin `(x, y)` and the quadsphere face coordinates of its
//! direction. Each cube face owns a 4D BCC lattice over those numbers, and a
//! key is `face * cells_per_face + local_cell_id`.

use bcc_lattice::BccLattice;
use glam::DVec3;

use crate::align::{align_ray_pair, CANONICAL_PLANE_TOLERANCE};
use crate::config::LatticeConfig;
use crate::error::{RayHashError, Result};
use crate::quadsphere::{self, FACE_COUNT};
use crate::ray::Ray;
use crate::resolution::{qs_bound, qs_nc};
use crate::RayKey;

/// Face lattice axes: cartesian x, cartesian y, face x, face y.
type FaceLattice = BccLattice<4>;

/// Invertible key space over ray-pair relationships.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct RayBins {
    config: LatticeConfig,
    faces: [FaceLattice; FACE_COUNT],
    /// Shared cell count of every face lattice, checked at construction.
    cells_per_face: u64,
}

impl RayBins {
    /// Build the six face lattices for `config`.
    pub fn new(config: LatticeConfig) -> Result<Self> {
        config.validate()?;

        let cart = config.cartesian_cells();
        let nc = qs_nc(config.resl, config.lever);
        let bound = qs_bound(config.resl, config.lever);
        let cb = config.cartbound;

        let lattice = FaceLattice::new(
            [cart, cart, nc, nc],
            [-cb, -cb, -bound, -bound],
            [cb, cb, bound, bound],
        )?;
        let bins = Self::from_faces(config, std::array::from_fn(|_| lattice.clone()))?;

        log::debug!(
            "RayBins: resl={} lever={} cartbound={} -> {}x{} cartesian, {}x{} angular (bound {:.4}), {} cells/face, {} total",
            config.resl,
            config.lever,
            config.cartbound,
            cart,
            cart,
            nc,
            nc,
            bound,
            bins.cells_per_face,
            bins.total_cell_count()
        );
        Ok(bins)
    }

    /// Check the face invariants and record the shared per-face cell count.
    fn from_faces(config: LatticeConfig, faces: [FaceLattice; FACE_COUNT]) -> Result<Self> {
        for lattice in &faces {
            let nside = lattice.nside();
            if nside[2] != nside[3] {
                return Err(RayHashError::AngularAxisMismatch {
                    axis2: nside[2],
                    axis3: nside[3],
                });
            }
        }

        let cells_per_face = faces[0].len();
        for (face, lattice) in faces.iter().enumerate().skip(1) {
            if lattice.len() != cells_per_face {
                return Err(RayHashError::FaceCellCountMismatch {
                    face,
                    expected: cells_per_face,
                    found: lattice.len(),
                });
            }
        }
        cells_per_face
            .checked_mul(FACE_COUNT as u64)
            .ok_or(RayHashError::KeySpaceOverflow)?;

        Ok(Self {
            config,
            faces,
            cells_per_face,
        })
    }

    /// Key for the relationship of `b` relative to `a`.
    pub fn encode_pair(&self, a: &Ray, b: &Ray) -> Result<RayKey> {
        self.encode(&align_ray_pair(a, b)?)
    }

    /// Key for a ray already in canonical form (`|origin.z| < 1e-3`).
    pub fn encode(&self, r: &Ray) -> Result<RayKey> {
        if !r.is_valid() {
            return Err(RayHashError::InvalidRay);
        }
        let z = r.origin.z.abs();
        if z >= CANONICAL_PLANE_TOLERANCE {
            return Err(RayHashError::NotCanonical { z });
        }

        let (face, x, y) = quadsphere::project(r.direction.normalize());
        let local = self.faces[face].cell_id([r.origin.x, r.origin.y, x, y]);
        Ok(face as RayKey * self.cells_per_face + local)
    }

    /// Representative (cell center) ray for `key`.
    ///
    /// `decode(encode(r))` is the center of the cell containing `r`, not `r`.
    pub fn decode(&self, key: RayKey) -> Result<Ray> {
        let face = self.face_of(key)?;
        let local = key % self.cells_per_face;
        let center = self.faces[face]
            .cell_center(local)
            .ok_or(RayHashError::KeyOutOfRange {
                key,
                total: self.total_cell_count(),
            })?;

        let direction = quadsphere::unproject(face, center[2], center[3]);
        Ok(Ray::from_unit(DVec3::new(center[0], center[1], 0.0), direction))
    }

    /// Cube face that `key` belongs to.
    pub fn face_of(&self, key: RayKey) -> Result<usize> {
        let total = self.total_cell_count();
        if key >= total {
            return Err(RayHashError::KeyOutOfRange { key, total });
        }
        Ok((key / self.cells_per_face) as usize)
    }

    /// Number of distinct keys; every key from `encode` is below this.
    #[inline]
    pub fn total_cell_count(&self) -> RayKey {
        FACE_COUNT as RayKey * self.cells_per_face
    }

    #[inline]
    pub fn cells_per_face(&self) -> u64 {
        self.cells_per_face
    }

    /// Cubes along each cartesian axis.
    #[inline]
    pub fn cartesian_axis_cell_count(&self) -> u64 {
        self.faces[0].nside()[0]
    }

    /// Cubes along each angular (face-coordinate) axis.
    #[inline]
    pub fn angular_axis_cell_count(&self) -> u64 {
        self.faces[0].nside()[2]
    }

    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }
}
