// ============================================================
// RAW ROW TYPES
// ============================================================
// One CSV data line keyed by header column name

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A single column value of a raw row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    /// Header name as written in the file
    pub name: String,

    /// Cell value, untrimmed
    pub value: String,
}

/// A single data row of the source CSV
///
/// Keeps header order so the row can be echoed back the way it was read.
/// A column is absent when the line was shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<RawField>,

    /// Column name -> position in `fields`
    positions: HashMap<String, usize>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (name, value) in pairs {
            row.insert(name, value);
        }
        row
    }

    /// Set a column value. A repeated column keeps its first position and the last value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.positions.get(&name) {
            Some(&pos) => self.fields[pos].value = value,
            None => {
                self.positions.insert(name.clone(), self.fields.len());
                self.fields.push(RawField { name, value });
            }
        }
    }

    /// Look up a column value; `None` when the column is absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&pos| self.fields[pos].value.as_str())
    }

    /// All fields in header order
    pub fn fields(&self) -> &[RawField] {
        &self.fields
    }
}

// Serialized as a plain object in header order, used for the sample echo.
impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}
