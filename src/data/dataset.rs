//! Observation records and the immutable dataset they form.
//!
//! Loading from CSV lives here as well; it is the only place raw text is
//! turned into numbers. Everything downstream works on [`Dataset`].

use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::attributes::AttributeKey;
use crate::error::LoadError;

/// One named entity with all six attributes populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Display identity (e.g. "Alabama").
    pub name: String,
    /// Compact text drawn inside the marker (e.g. "AL").
    pub short_label: String,
    pub poverty_rate: f64,
    pub median_income: f64,
    pub median_age: f64,
    pub healthcare_uninsured_rate: f64,
    pub smoking_rate: f64,
    pub obesity_rate: f64,
}

impl Observation {
    #[inline]
    pub fn value(&self, key: AttributeKey) -> f64 {
        key.value(self)
    }
}

/// A row as it appears in the source CSV. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    state: String,
    abbr: String,
    poverty: f64,
    age: f64,
    income: f64,
    healthcare: f64,
    obesity: f64,
    smokes: f64,
}

impl From<CsvRow> for Observation {
    fn from(row: CsvRow) -> Self {
        Self {
            name: row.state,
            short_label: row.abbr,
            poverty_rate: row.poverty,
            median_income: row.income,
            median_age: row.age,
            healthcare_uninsured_rate: row.healthcare,
            smoking_rate: row.smokes,
            obesity_rate: row.obesity,
        }
    }
}

/// Immutable, ordered, cheaply clonable sequence of observations.
///
/// Marker `i` in every render layer corresponds to `observations()[i]`.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Arc<[Observation]>,
}

impl Dataset {
    /// Build a dataset, rejecting any non-finite attribute value.
    pub fn new(rows: Vec<Observation>) -> Result<Self, LoadError> {
        for (i, obs) in rows.iter().enumerate() {
            for key in AttributeKey::ALL {
                if !obs.value(key).is_finite() {
                    return Err(LoadError::NonFinite {
                        row: i + 1,
                        column: key.column(),
                    });
                }
            }
        }
        Ok(Self { rows: rows.into() })
    }

    /// Parse CSV with a header row from any reader.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in rdr.deserialize::<CsvRow>() {
            rows.push(Observation::from(record?));
        }
        Self::new(rows)
    }

    /// Load a CSV file. An empty file is a load failure.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_csv_reader(io::BufReader::new(file))?;
        if dataset.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        tracing::info!(rows = dataset.len(), path = %path.display(), "loaded dataset");
        Ok(dataset)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(min, max)` of one attribute, or `None` for an empty dataset.
    pub fn extent(&self, key: AttributeKey) -> Option<(f64, f64)> {
        self.rows.iter().map(|o| o.value(key)).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
