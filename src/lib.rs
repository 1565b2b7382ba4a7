//! Piping Material Sustainability Ranker
//!
//! Scores piping materials from a CSV of material properties and ranks them.
//!
//! - `data`: CSV loading with Polars into typed `MaterialRecord`s
//! - `scorer`: weighted linear sustainability score
//! - `ranking`: stable descending sort by score
//! - `report`: plain-text ranked report
//!
//! Any error aborts the whole run; there is no partial ranking.

pub mod data;
pub mod error;
pub mod ranking;
pub mod report;
pub mod scorer;

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use data::{load_materials, MaterialRecord};
pub use error::{MaterialDataError, Result};
pub use ranking::rank;
pub use report::{ReportStyle, TextFormatter};
pub use scorer::{score, score_all, ScoreWeights, ScoredMaterial};

/// Directory holding the input dataset, next to the crate manifest
pub const DATA_DIR: &str = "data";

/// Input dataset file name
pub const MATERIAL_DATA_FILE: &str = "material_data.csv";

/// Fixed location of the material dataset
pub fn default_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(DATA_DIR)
        .join(MATERIAL_DATA_FILE)
}

/// Load, score, rank, and format in one pass
///
/// Returns the finished report text; nothing is produced if any step fails.
pub fn build_report(path: &Path, weights: &ScoreWeights, style: ReportStyle) -> Result<String> {
    let records = load_materials(path)?;
    let ranked = rank(score_all(records, weights));
    Ok(TextFormatter::format(&ranked, style))
}
