//! Hash oriented ray pairs into a finite, invertible integer key space.
//!
//! A pair of rays `(a, b)` describes a rigid-body relationship. The pair is
//! first aligned so that `a` is canonical (origin at zero, pointing along +X),
//! which leaves `b` with an origin in the XY plane. `b`'s in-plane origin and
//! its direction (as quadsphere face coordinates) are then quantized on one 4D
//! BCC lattice per cube face. Keys decode back to the cell's representative
//! ray.
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use rayhash::{LatticeConfig, Ray, RayBins};
//!
//! let bins = RayBins::new(LatticeConfig::default()).expect("default config is valid");
//!
//! let a = Ray::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.0, 1.0));
//! let b = Ray::new(DVec3::new(4.0, 2.0, 3.0), DVec3::new(0.0, 1.0, 0.0));
//!
//! let key = bins.encode_pair(&a, &b).unwrap();
//! assert!(key < bins.total_cell_count());
//!
//! let center = bins.decode(key).unwrap();
//! assert_eq!(bins.encode(&center).unwrap(), key);
//! ```

mod align;
mod audit;
mod config;
mod error;
pub mod quadsphere;
mod ray;
mod ray_bins;
mod resolution;
pub mod util;

pub use align::{align_ray_pair, CANONICAL_PLANE_TOLERANCE};
pub use audit::{brute_maxmin_nbr, NeighborSpacing};
pub use config::LatticeConfig;
pub use error::{RayHashError, Result};
pub use ray::Ray;
pub use ray_bins::RayBins;
pub use resolution::{qs_bound, qs_nc};

/// Integer key of one discretized ray-pair relationship.
pub type RayKey = u64;
