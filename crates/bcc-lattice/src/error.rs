/// Errors from constructing a [`BccLattice`](crate::BccLattice).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LatticeError {
    /// An axis was configured with zero cells.
    #[error("axis {axis} has zero cells")]
    ZeroAxis { axis: usize },
    /// Bounds on an axis are non-finite or empty (`lower >= upper`).
    #[error("axis {axis} has invalid bounds [{lower}, {upper}]")]
    InvalidBounds { axis: usize, lower: f64, upper: f64 },
    /// The total cell count does not fit in a `u64` id.
    #[error("lattice cell count overflows u64")]
    TooManyCells,
}
