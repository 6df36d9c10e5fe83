use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RayHashError, Result};

/// Parameters from which all six face lattices are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Linear resolution (cartesian cell size).
    pub resl: f64,
    /// Lever-arm length converting angular error into linear displacement.
    pub lever: f64,
    /// Half-width of the cartesian domain along each in-plane axis.
    pub cartbound: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            resl: 0.25,
            lever: 1.5,
            cartbound: 128.0,
        }
    }
}

impl LatticeConfig {
    pub fn new(resl: f64, lever: f64, cartbound: f64) -> Self {
        Self {
            resl,
            lever,
            cartbound,
        }
    }

    /// Check that every parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("resl", self.resl),
            ("lever", self.lever),
            ("cartbound", self.cartbound),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RayHashError::InvalidConfig(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Cartesian cells per in-plane axis: `2 * cartbound / resl`, truncated.
    #[inline]
    pub fn cartesian_cells(&self) -> u64 {
        (2.0 * self.cartbound / self.resl) as u64
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
