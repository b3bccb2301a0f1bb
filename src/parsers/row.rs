use std::collections::HashMap;

use crate::errors::{ReplayError, ReplayResult};

/// One CSV data row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow(HashMap<String, String>);

impl RawRow {
    /// Value of a required column, or `Schema` if the column is absent.
    pub fn field(&self, column: &str) -> ReplayResult<&str> {
        self.0
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| ReplayError::Schema {
                column: column.to_string(),
                row: None,
            })
    }

    /// Trimmed value of a required column.
    pub fn trimmed(&self, column: &str) -> ReplayResult<&str> {
        self.field(column).map(str::trim)
    }
}

impl From<HashMap<String, String>> for RawRow {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Checks a header row against the columns an adapter needs.
pub fn check_headers<'a, H>(headers: H, required: &[&str]) -> ReplayResult<()>
where
    H: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = headers.into_iter().map(str::trim).collect();
    match required
        .iter()
        .copied()
        .find(|col| !present.iter().any(|p| *p == *col))
    {
        Some(missing) => Err(ReplayError::Schema {
            column: missing.to_string(),
            row: None,
        }),
        None => Ok(()),
    }
}
