//! Data Loading
//!
//! Reads the material property CSV with Polars and converts every row into a
//! typed `MaterialRecord` up front. Cells are read as text and parsed once
//! here, so nothing downstream handles loosely-typed rows.

use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{MaterialDataError, Result};

/// Header names expected in the material CSV
pub mod columns {
    pub const NAME: &str = "Material_Name";
    pub const RENEWABLE_CONTENT: &str = "Renewable_Content_Percent";
    pub const LIFESPAN: &str = "Average_Lifespan_years";
    pub const RECYCLABILITY: &str = "Recyclability_Percent";
    pub const PRODUCTION_ENERGY: &str = "Estimated_Production_Energy_MJ_per_kg";
    pub const CARBON_FOOTPRINT: &str = "Estimated_Carbon_Footprint_kg_CO2e_per_kg";
}

/// One material row with its five numeric attributes
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub name: String,

    /// Percent, expected 0-100
    pub renewable_content_percent: f64,

    pub average_lifespan_years: f64,

    /// Percent, expected 0-100
    pub recyclability_percent: f64,

    pub production_energy_mj_per_kg: f64,

    pub carbon_footprint_kg_co2e_per_kg: f64,
}

/// Load all materials from a CSV file, in file order
///
/// Fails fast: the first missing column or unparseable cell aborts the load.
pub fn load_materials(path: &Path) -> Result<Vec<MaterialRecord>> {
    if !path.exists() {
        return Err(MaterialDataError::NotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Reading material CSV: {}", path.display());

    let df = read_text_frame(path).map_err(|err| match err {
        // No header at all: the first required column is the one reported
        PolarsError::NoData(_) => MaterialDataError::MissingColumn { column: columns::NAME },
        other => MaterialDataError::Csv(other),
    })?;

    let materials = records_from_frame(&df)?;
    info!("Loaded {} materials from {}", materials.len(), path.display());

    Ok(materials)
}

/// Read the CSV with every column as String
///
/// Rows longer than the header are truncated; the surplus fields have no column.
fn read_text_frame(path: &Path) -> PolarsResult<DataFrame> {
    let parse_options = CsvParseOptions::default().with_truncate_ragged_lines(true);

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()
}

/// Convert a string-typed frame into records
///
/// Blank lines come through as rows with every required cell null or empty;
/// they are skipped and do not count towards row numbers in errors.
fn records_from_frame(df: &DataFrame) -> Result<Vec<MaterialRecord>> {
    let names = text_column(df, columns::NAME)?;
    let renewable = text_column(df, columns::RENEWABLE_CONTENT)?;
    let lifespan = text_column(df, columns::LIFESPAN)?;
    let recyclability = text_column(df, columns::RECYCLABILITY)?;
    let energy = text_column(df, columns::PRODUCTION_ENERGY)?;
    let carbon = text_column(df, columns::CARBON_FOOTPRINT)?;

    let mut materials = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let cells = [
            names.get(idx),
            renewable.get(idx),
            lifespan.get(idx),
            recyclability.get(idx),
            energy.get(idx),
            carbon.get(idx),
        ];
        if cells.iter().all(|cell| cell.map_or(true, |v| v.trim().is_empty())) {
            continue;
        }
        let row = materials.len() + 1;

        let name = match names.get(idx) {
            Some(name) if !name.is_empty() => name.to_string(),
            other => {
                return Err(MaterialDataError::MalformedRow {
                    row,
                    column: columns::NAME,
                    value: other.unwrap_or_default().to_string(),
                })
            }
        };

        materials.push(MaterialRecord {
            name,
            renewable_content_percent: parse_number(renewable.get(idx), row, columns::RENEWABLE_CONTENT)?,
            average_lifespan_years: parse_number(lifespan.get(idx), row, columns::LIFESPAN)?,
            recyclability_percent: parse_number(recyclability.get(idx), row, columns::RECYCLABILITY)?,
            production_energy_mj_per_kg: parse_number(energy.get(idx), row, columns::PRODUCTION_ENERGY)?,
            carbon_footprint_kg_co2e_per_kg: parse_number(carbon.get(idx), row, columns::CARBON_FOOTPRINT)?,
        });
    }

    Ok(materials)
}

fn text_column<'a>(df: &'a DataFrame, column: &'static str) -> Result<&'a StringChunked> {
    let col = df
        .column(column)
        .map_err(|_| MaterialDataError::MissingColumn { column })?;
    Ok(col.str()?)
}

/// Parse a numeric cell; empty or null cells are malformed
fn parse_number(cell: Option<&str>, row: usize, column: &'static str) -> Result<f64> {
    let raw = cell.unwrap_or_default();
    raw.trim()
        .parse::<f64>()
        .map_err(|_| MaterialDataError::MalformedRow {
            row,
            column,
            value: raw.to_string(),
        })
}
