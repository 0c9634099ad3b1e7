pub mod cog;
pub mod error;
pub mod mass;
pub mod report;
pub mod seed;
pub mod table;
pub mod units;

pub use crate::cog::{compute_global_cog, compute_global_cog_par, GlobalCog};
pub use crate::error::{CogError, Result};
pub use crate::mass::MassElement;
pub use crate::table::Table;
pub use crate::units::LengthUnit;
