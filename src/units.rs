// src/units.rs

use crate::error::CogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Display label for the length unit the caller typed positions in.
///
/// Only ever printed next to a result. No value is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Mm,
    Cm,
    #[default]
    M,
    In,
    Ft,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Mm,
        LengthUnit::Cm,
        LengthUnit::M,
        LengthUnit::In,
        LengthUnit::Ft,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::M => "m",
            LengthUnit::In => "in",
            LengthUnit::Ft => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = CogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Mm),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Cm),
            "m" | "meter" | "meters" => Ok(LengthUnit::M),
            "in" | "inch" | "inches" => Ok(LengthUnit::In),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Ft),
            _ => Err(CogError::UnknownUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_back() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.symbol().parse::<LengthUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn long_names_are_case_insensitive() {
        assert_eq!("Feet".parse::<LengthUnit>().unwrap(), LengthUnit::Ft);
        assert_eq!(" METERS ".parse::<LengthUnit>().unwrap(), LengthUnit::M);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert!(matches!(
            "furlong".parse::<LengthUnit>(),
            Err(CogError::UnknownUnit(u)) if u == "furlong"
        ));
    }
}
