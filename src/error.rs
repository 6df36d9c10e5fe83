use bcc_lattice::LatticeError;

use crate::RayKey;

/// Errors from aligning, binning, or configuring ray pairs.
#[derive(Debug, thiserror::Error)]
pub enum RayHashError {
    /// The reference frame is undefined: the second origin coincides with the
    /// first or lies on the first ray's line.
    #[error("degenerate ray pair: second origin lies on the first ray's line")]
    DegenerateRayPair,
    /// A ray with NaN/infinite components or a zero direction.
    #[error("ray has non-finite components or a zero direction")]
    InvalidRay,
    /// A single ray passed to `encode` does not lie in the canonical plane.
    #[error("ray is not canonical: |origin.z| = {z} exceeds tolerance")]
    NotCanonical { z: f64 },
    /// A key outside the key space of this binning.
    #[error("key {key} out of range (total cells {total})")]
    KeyOutOfRange { key: RayKey, total: RayKey },
    #[error("invalid lattice config: {0}")]
    InvalidConfig(String),
    /// Quadsphere faces must be square in angular coordinates.
    #[error("angular axis cell counts differ: axis 2 has {axis2}, axis 3 has {axis3}")]
    AngularAxisMismatch { axis2: u64, axis3: u64 },
    #[error("face {face} has {found} cells, expected {expected}")]
    FaceCellCountMismatch {
        face: usize,
        expected: u64,
        found: u64,
    },
    /// Six faces' worth of cells do not fit in a key.
    #[error("key space overflows u64")]
    KeySpaceOverflow,
    #[error(transparent)]
    Lattice(#[from] LatticeError),
    #[error("config I/O failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON is invalid")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RayHashError>;
