//! Plain-text ranking report

use crate::scorer::ScoredMaterial;

pub const TITLE: &str = "Sustainability Ranking of Piping Materials";
pub const NOTE: &str =
    "(Note: Higher score indicates better sustainability based on weighted factors)";
const SEPARATOR_WIDTH: usize = 50;

/// How much per-material detail the report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// One line per material
    #[default]
    Summary,
    /// Adds the raw attributes under each material
    Detailed,
}

/// Text formatter for ranked materials
pub struct TextFormatter;

impl TextFormatter {
    /// Format an already ranked sequence; rank numbers start at 1
    pub fn format(ranked: &[ScoredMaterial], style: ReportStyle) -> String {
        let mut out = String::with_capacity(128 + ranked.len() * 48);

        out.push_str(&format!("{}\n", TITLE));
        out.push_str(&format!("{}\n", "=".repeat(SEPARATOR_WIDTH)));

        for (idx, material) in ranked.iter().enumerate() {
            out.push_str(&format!(
                "{}. {}: {:.2}\n",
                idx + 1,
                material.name(),
                material.score
            ));
            if style == ReportStyle::Detailed {
                Self::format_details(&mut out, material);
            }
        }

        out.push_str(&format!("\n{}\n", NOTE));
        out
    }

    fn format_details(out: &mut String, material: &ScoredMaterial) {
        let r = &material.record;
        out.push_str(&format!(
            "   Renewable: {}%, Lifespan: {} yrs, Recyclability: {}%\n",
            r.renewable_content_percent, r.average_lifespan_years, r.recyclability_percent
        ));
        out.push_str(&format!(
            "   Production Energy: {} MJ/kg, Carbon: {} kg CO2e/kg\n",
            r.production_energy_mj_per_kg, r.carbon_footprint_kg_co2e_per_kg
        ));
    }
}
