use crate::cog::GlobalCog;
use crate::error::Result;
use crate::mass::MassElement;
use crate::units::LengthUnit;
use chrono::Utc;
use serde::Serialize;
use std::io;

pub const UNDEFINED_MESSAGE: &str = "undefined (total mass is zero)";

pub fn format_cog(cog: Option<&GlobalCog>, unit: LengthUnit) -> String {
    match cog {
        Some(cog) => format!("Global Center of Gravity (COG): {} {}", cog, unit),
        None => format!("Global Center of Gravity (COG): {}", UNDEFINED_MESSAGE),
    }
}

#[derive(Debug, Serialize)]
pub struct CogReport {
    pub date: String,
    pub unit: LengthUnit,
    pub n_elements: usize,
    pub total_mass: f64,
    pub cog: Option<[f64; 3]>,
}

impl CogReport {
    pub fn new(elements: &[MassElement], cog: Option<&GlobalCog>, unit: LengthUnit) -> Self {
        CogReport {
            date: Utc::now().to_rfc3339(),
            unit,
            n_elements: elements.len(),
            total_mass: elements.iter().map(|e| e.mass).sum(),
            cog: cog.map(|c| [c.position.x, c.position.y, c.position.z]),
        }
    }

    pub fn write_json<W: io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ScatterPoint<'a> {
    label: &'a str,
    x: f64,
    y: f64,
    z: f64,
    mass: f64,
}

/// Writes every element as a scatter point, followed by a `global_cog` point
/// when the COG is defined.
pub fn export_scatter<W: io::Write>(
    writer: W,
    elements: &[MassElement],
    cog: Option<&GlobalCog>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, obj) in elements.iter().enumerate() {
        let label = format!("element_{}", i);
        wtr.serialize(ScatterPoint {
            label: &label,
            x: obj.position.x,
            y: obj.position.y,
            z: obj.position.z,
            mass: obj.mass,
        })?;
    }
    match cog {
        Some(cog) => wtr.serialize(ScatterPoint {
            label: "global_cog",
            x: cog.position.x,
            y: cog.position.y,
            z: cog.position.z,
            mass: cog.total_mass,
        })?,
        None if elements.is_empty() => {
            // no record was serialized, so the header has not been written yet
            wtr.write_record(["label", "x", "y", "z", "mass"])?
        }
        None => {}
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn defined_cog_is_printed_with_unit() {
        let cog = GlobalCog {
            position: Vector3::new(7.5, 0.0, 0.0),
            total_mass: 4.0,
        };
        assert_eq!(
            format_cog(Some(&cog), LengthUnit::Mm),
            "Global Center of Gravity (COG): (7.50, 0.00, 0.00) mm"
        );
    }

    #[test]
    fn undefined_cog_is_not_printed_as_zero() {
        let text = format_cog(None, LengthUnit::M);
        assert!(text.ends_with(UNDEFINED_MESSAGE));
        assert!(!text.contains("0.00"));
    }

    #[test]
    fn json_report_uses_null_for_undefined() {
        let elements = [MassElement::from_row((1.0, 1.0, 1.0, 0.0))];
        let report = CogReport::new(&elements, None, LengthUnit::Cm);
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["cog"].is_null());
        assert_eq!(value["unit"], "cm");
        assert_eq!(value["n_elements"], 1);
    }

    #[test]
    fn scatter_of_empty_input_is_header_only() {
        let mut out = Vec::new();
        export_scatter(&mut out, &[], None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "label,x,y,z,mass\n");
    }
}
