//! Rank piping materials by sustainability score
//!
//! Reads data/material_data.csv next to the crate and prints the ranking.
//!
//! Usage:
//!   cargo run --bin rank_materials

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use piping_sustainability::{build_report, default_data_path, ReportStyle, ScoreWeights};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "piping_sustainability=warn,rank_materials=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = run_main(
        &default_data_path(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(code)
}

/// Run and map the outcome to a process exit status: 0 on success, 1 on any error
fn run_main(path: &Path, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match run_with(path, out) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            // Nothing left to report to if stderr itself is gone
            let _ = writeln!(err, "Error: {:#}", e);
            1
        }
    }
}

/// Build the report for `path` and write it to `out`
///
/// The report is only written once it is complete, so a failed run leaves `out` untouched.
fn run_with(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::info!("Material data: {}", path.display());

    let report = build_report(path, &ScoreWeights::STANDARD, ReportStyle::Summary)?;

    out.write_all(report.as_bytes())
        .context("Failed to write report to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_exits_one_with_no_stdout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("material_data.csv");
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run_main(&path, &mut out, &mut err);

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            format!("Error: CSV file not found at {}\n", path.display())
        );
    }

    #[test]
    fn test_malformed_file_exits_one_with_no_stdout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("material_data.csv");
        fs::write(
            &path,
            "Material_Name,Renewable_Content_Percent,Average_Lifespan_years,\
             Recyclability_Percent,Estimated_Production_Energy_MJ_per_kg,\
             Estimated_Carbon_Footprint_kg_CO2e_per_kg\n\
             PVC,0,fifty,20,68,2.4\n",
        )
        .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert_eq!(run_main(&path, &mut out, &mut err), 1);
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("Error: row 1:"));
    }

    #[test]
    fn test_success_exits_zero_and_prints_report() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run_main(&default_data_path(), &mut out, &mut err);

        assert_eq!(code, 0);
        assert!(err.is_empty());
        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("Sustainability Ranking of Piping Materials\n"));
        assert!(report.contains("1. Ductile Iron: 29.43\n"));
    }
}
