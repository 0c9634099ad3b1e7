// src/seed.rs

use crate::error::{CogError, Result};
use crate::table::Table;
use rand::Rng;
use rand_distr::Uniform;

/// Ranges used to fill a table with random elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomFill {
    pub bounds: f64,
    pub min_mass: f64,
    pub max_mass: f64,
}

impl Default for RandomFill {
    fn default() -> Self {
        RandomFill {
            bounds: 10.0,
            min_mass: 1.0,
            max_mass: 10.0,
        }
    }
}

/// Generates `n_rows` elements with positions uniform in `[-bounds, bounds]` on
/// each axis and masses uniform in `[min_mass, max_mass]`.
pub fn random_table<R: Rng + ?Sized>(rng: &mut R, n_rows: usize, fill: RandomFill) -> Result<Table> {
    if n_rows == 0 {
        return Err(CogError::InvalidRowCount(n_rows));
    }
    if !fill.bounds.is_finite() || fill.bounds < 0.0 {
        return Err(CogError::InvalidBounds(fill.bounds));
    }
    let mass_range_err = CogError::InvalidMassRange {
        min: fill.min_mass,
        max: fill.max_mass,
    };
    if !(fill.min_mass > 0.0 && fill.min_mass <= fill.max_mass && fill.max_mass.is_finite()) {
        return Err(mass_range_err);
    }

    let pos_range =
        Uniform::new_inclusive(-fill.bounds, fill.bounds).map_err(|_| CogError::InvalidBounds(fill.bounds))?;
    let mass_range = Uniform::new_inclusive(fill.min_mass, fill.max_mass).map_err(|_| mass_range_err)?;

    let table = Table::from_rows((0..n_rows).map(|_| {
        (
            rng.sample(&pos_range),
            rng.sample(&pos_range),
            rng.sample(&pos_range),
            rng.sample(&mass_range),
        )
    }));
    tracing::debug!("generated {} random rows with {:?}", n_rows, fill);
    Ok(table)
}
