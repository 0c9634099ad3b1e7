// src/mass.rs

use nalgebra::Vector3;
use std::fmt;

/// One point mass: the position of a component's own center of gravity and its mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassElement {
    pub mass: f64,
    pub position: Vector3<f64>,
}

impl MassElement {
    pub fn new(mass: f64, position: Vector3<f64>) -> Self {
        MassElement { mass, position }
    }

    /// Builds an element from a table row laid out as `(x, y, z, mass)`.
    pub fn from_row((x, y, z, mass): (f64, f64, f64, f64)) -> Self {
        MassElement::new(mass, Vector3::new(x, y, z))
    }

    pub fn to_row(&self) -> (f64, f64, f64, f64) {
        (self.position.x, self.position.y, self.position.z, self.mass)
    }

    /// First moment of mass about the origin.
    pub fn moment(&self) -> Vector3<f64> {
        self.position * self.mass
    }
}

impl fmt::Display for MassElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MassElement(m={:.2}, p=[{:.2}, {:.2}, {:.2}])",
            self.mass, self.position.x, self.position.y, self.position.z
        )
    }
}
