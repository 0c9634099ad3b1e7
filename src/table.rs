// src/table.rs

use crate::error::{CogError, Result};
use crate::mass::MassElement;
use itertools::izip;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_ROW: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Row {
    #[serde(rename = "X", alias = "x")]
    x: f64,
    #[serde(rename = "Y", alias = "y")]
    y: f64,
    #[serde(rename = "Z", alias = "z")]
    z: f64,
    #[serde(rename = "Mass", alias = "mass", alias = "m", alias = "M")]
    mass: f64,
}

/// Editable element table, stored column-wise as `X`, `Y`, `Z`, `Mass`.
///
/// The table is a scratch buffer owned by whoever edits it. It is handed to the
/// aggregator as a fresh `Vec<MassElement>` via [`Table::to_elements`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    masses: Vec<f64>,
}

impl Table {
    /// A table of `n_rows` default rows `(0, 0, 0, 1)`.
    pub fn new(n_rows: usize) -> Result<Self> {
        if n_rows == 0 {
            return Err(CogError::InvalidRowCount(n_rows));
        }
        let mut table = Table::default();
        table.resize(n_rows);
        Ok(table)
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64, f64)>,
    {
        let mut table = Table::default();
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn from_elements(elements: &[MassElement]) -> Self {
        Table::from_rows(elements.iter().map(MassElement::to_row))
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn push_row(&mut self, (x, y, z, mass): (f64, f64, f64, f64)) {
        self.xs.push(x);
        self.ys.push(y);
        self.zs.push(z);
        self.masses.push(mass);
    }

    pub fn row(&self, idx: usize) -> Option<(f64, f64, f64, f64)> {
        if idx >= self.len() {
            return None;
        }
        Some((self.xs[idx], self.ys[idx], self.zs[idx], self.masses[idx]))
    }

    /// Overwrites row `idx`. Returns `false` if the row does not exist.
    pub fn set_row(&mut self, idx: usize, (x, y, z, mass): (f64, f64, f64, f64)) -> bool {
        if idx >= self.len() {
            return false;
        }
        self.xs[idx] = x;
        self.ys[idx] = y;
        self.zs[idx] = z;
        self.masses[idx] = mass;
        true
    }

    /// Grows with default rows or truncates from the end. Existing rows are kept.
    pub fn resize(&mut self, n_rows: usize) {
        let (x, y, z, mass) = DEFAULT_ROW;
        self.xs.resize(n_rows, x);
        self.ys.resize(n_rows, y);
        self.zs.resize(n_rows, z);
        self.masses.resize(n_rows, mass);
    }

    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        izip!(&self.xs, &self.ys, &self.zs, &self.masses).map(|(&x, &y, &z, &m)| (x, y, z, m))
    }

    pub fn to_elements(&self) -> Vec<MassElement> {
        let elements: Vec<MassElement> = self.rows().map(MassElement::from_row).collect();
        tracing::debug!("converted {} table rows to mass elements", elements.len());
        elements
    }

    /// Rejects NaN and infinite cells, reporting the 1-based row.
    pub fn validate(&self) -> Result<()> {
        for (i, (x, y, z, mass)) in self.rows().enumerate() {
            for (column, value) in [("X", x), ("Y", y), ("Z", z), ("Mass", mass)] {
                if !value.is_finite() {
                    return Err(CogError::NonFiniteValue { row: i + 1, column });
                }
            }
        }
        Ok(())
    }

    /// Reads a `X,Y,Z,Mass` CSV. Rows with missing, extra or non-numeric
    /// fields fail with [`CogError::Csv`].
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut table = Table::default();
        for record in rdr.deserialize() {
            let row: Row = record?;
            table.push_row((row.x, row.y, row.z, row.mass));
        }
        table.validate()?;
        Ok(table)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Table::read_csv(file)
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (x, y, z, mass) in self.rows() {
            wtr.serialize(Row { x, y, z, mass })?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_has_default_rows() {
        let table = Table::new(DEFAULT_ROWS).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.rows().all(|r| r == DEFAULT_ROW));
    }

    #[test]
    fn zero_rows_is_rejected() {
        assert!(matches!(Table::new(0), Err(CogError::InvalidRowCount(0))));
    }

    #[test]
    fn resize_keeps_edited_rows() {
        let mut table = Table::new(2).unwrap();
        assert!(table.set_row(1, (1.0, 2.0, 3.0, 4.0)));
        table.resize(4);
        assert_eq!(table.row(1), Some((1.0, 2.0, 3.0, 4.0)));
        assert_eq!(table.row(3), Some(DEFAULT_ROW));
        table.resize(1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.row(1), None);
        assert!(!table.set_row(5, DEFAULT_ROW));
    }

    #[test]
    fn lowercase_headers_are_accepted() {
        let data = "x,y,z,mass\n1,2,3,4\n 5 , 6 , 7 , 8 \n";
        let table = Table::read_csv(data.as_bytes()).unwrap();
        assert_eq!(
            table.rows().collect::<Vec<_>>(),
            vec![(1.0, 2.0, 3.0, 4.0), (5.0, 6.0, 7.0, 8.0)]
        );
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let data = "X,Y,Z,Mass\n1,2,three,4\n";
        assert!(matches!(
            Table::read_csv(data.as_bytes()),
            Err(CogError::Csv(_))
        ));
    }

    #[test]
    fn short_row_is_rejected() {
        let data = "X,Y,Z,Mass\n1,2,3\n";
        assert!(matches!(
            Table::read_csv(data.as_bytes()),
            Err(CogError::Csv(_))
        ));
    }

    #[test]
    fn nan_cell_is_rejected() {
        let data = "X,Y,Z,Mass\n1,2,3,4\n0,0,0,NaN\n";
        assert!(matches!(
            Table::read_csv(data.as_bytes()),
            Err(CogError::NonFiniteValue { row: 2, column: "Mass" })
        ));
    }

    #[test]
    fn written_csv_uses_capitalised_headers() {
        let table = Table::from_rows([(0.5, -1.0, 2.0, 3.0)]);
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "X,Y,Z,Mass\n0.5,-1.0,2.0,3.0\n");
    }
}
