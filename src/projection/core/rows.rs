//! Output rows of a projection.
//!
//! - [`RowKind`] tags a row as a passed-through observation or a curve
//!   estimate.
//! - [`ProjectionRow`] is one `(period, value, kind)` record.
use crate::projection::errors::ProjectionError;
use std::{fmt, str::FromStr};

/// Origin of a [`ProjectionRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Copied verbatim from the input series.
    Historical,
    /// Evaluated from the fitted curve beyond the last observed period.
    Projected,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Historical => f.write_str("Historical"),
            RowKind::Projected => f.write_str("Projected"),
        }
    }
}

impl FromStr for RowKind {
    type Err = ProjectionError;

    /// Parse `"Historical"` / `"Projected"` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "historical" => Ok(RowKind::Historical),
            "projected" => Ok(RowKind::Projected),
            _ => Err(ProjectionError::invalid_argument(
                "kind",
                format!("unknown row kind '{s}'; expected 'Historical' or 'Projected'"),
            )),
        }
    }
}

/// One output record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionRow {
    pub period: i64,
    pub value: f64,
    pub kind: RowKind,
}

impl ProjectionRow {
    pub fn historical(period: i64, value: f64) -> Self {
        Self { period, value, kind: RowKind::Historical }
    }

    pub fn projected(period: i64, value: f64) -> Self {
        Self { period, value, kind: RowKind::Projected }
    }

    pub fn is_projected(&self) -> bool {
        self.kind == RowKind::Projected
    }
}
