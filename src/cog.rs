// src/cog.rs

use crate::mass::MassElement;
use nalgebra::Vector3;
use rayon::prelude::*;
use std::fmt;

/// Mass-weighted centroid of a set of [`MassElement`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalCog {
    pub position: Vector3<f64>,
    pub total_mass: f64,
}

impl fmt::Display for GlobalCog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2})",
            self.position.x, self.position.y, self.position.z
        )
    }
}

/// Computes the global center of gravity of `elements`.
///
/// Returns `None` when the masses sum to exactly zero, which includes an empty
/// slice and sets whose positive and negative masses cancel. Individual zero or
/// negative masses are otherwise accepted as they are.
pub fn compute_global_cog(elements: &[MassElement]) -> Option<GlobalCog> {
    let total_mass = elements.iter().map(|e| e.mass).sum::<f64>();
    let moment = elements.iter().map(MassElement::moment).sum::<Vector3<f64>>();
    finish(elements.len(), total_mass, moment)
}

/// Same contract as [`compute_global_cog`], with the sums reduced on the rayon pool.
///
/// Float addition is not associative, so for large inputs the result can differ
/// from the sequential one in the last bits.
pub fn compute_global_cog_par(elements: &[MassElement]) -> Option<GlobalCog> {
    let (total_mass, moment) = elements
        .par_iter()
        .map(|e| (e.mass, e.moment()))
        .reduce(
            || (0.0, Vector3::zeros()),
            |(m1, p1), (m2, p2)| (m1 + m2, p1 + p2),
        );
    finish(elements.len(), total_mass, moment)
}

fn finish(n: usize, total_mass: f64, moment: Vector3<f64>) -> Option<GlobalCog> {
    if total_mass == 0.0 {
        tracing::debug!("total mass of {} elements is zero, COG undefined", n);
        return None;
    }
    let cog = GlobalCog {
        position: moment / total_mass,
        total_mass,
    };
    tracing::debug!("COG of {} elements: {} (total mass {})", n, cog, total_mass);
    Some(cog)
}
