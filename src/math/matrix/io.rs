use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Matrix;
use crate::error::{LinalgError, Malformed, Result};

impl<F: Serialize> Serialize for Matrix<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, F: Deserialize<'de>> Deserialize<'de> for Matrix<F> {
    /// Rows go through [`Matrix::new`], so ragged input is rejected.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<F>>::deserialize(deserializer)?;
        Matrix::new(rows).map_err(D::Error::custom)
    }
}

impl<F> Matrix<F> {
    /// Read a matrix from a headerless CSV file, one record per row.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        F: DeserializeOwned,
    {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            let row: Vec<F> = result?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LinalgError::MalformedMatrix(Malformed::Empty));
        }

        Self::new(rows)
    }

    /// Write the matrix as a headerless CSV file, one record per row.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        F: Serialize,
    {
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
