//! Error types for loading and ranking material data

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures raised while turning a material CSV into scored records
#[derive(Debug, Error)]
pub enum MaterialDataError {
    /// Input file does not exist
    #[error("CSV file not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// Header row lacks a required column
    #[error("required column '{column}' missing from header")]
    MissingColumn { column: &'static str },

    /// A required cell is empty or not a number
    #[error("row {row}: column '{column}' has invalid value {value:?}")]
    MalformedRow {
        /// 1-based data row (header excluded)
        row: usize,
        column: &'static str,
        value: String,
    },

    /// Reader-level failure (I/O, quoting, ragged lines)
    #[error("failed to read CSV")]
    Csv(#[from] PolarsError),
}

impl MaterialDataError {
    /// True for errors caused by bad content rather than a missing or unreadable file
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::MalformedRow { .. })
    }
}

pub type Result<T> = std::result::Result<T, MaterialDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = MaterialDataError::NotFound {
            path: PathBuf::from("data/material_data.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found at data/material_data.csv");
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_grouping() {
        let missing = MaterialDataError::MissingColumn { column: "Material_Name" };
        let bad_cell = MaterialDataError::MalformedRow {
            row: 3,
            column: "Recyclability_Percent",
            value: "n/a".to_string(),
        };
        assert!(missing.is_malformed());
        assert!(bad_cell.is_malformed());
        assert_eq!(
            bad_cell.to_string(),
            "row 3: column 'Recyclability_Percent' has invalid value \"n/a\""
        );
    }
}
