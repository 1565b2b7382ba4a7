//! Sustainability Scorer
//!
//! Weighted linear score per material. Positive weights reward renewable
//! content, lifespan and recyclability; negative weights penalize production
//! energy and carbon footprint. Scores are only meaningful relative to each
//! other.

use crate::data::MaterialRecord;

/// Weight per material attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub renewable_content: f64,
    /// Per year of service life
    pub lifespan: f64,
    pub recyclability: f64,
    /// Negative: more energy is worse
    pub production_energy: f64,
    /// Negative: more CO2e is worse
    pub carbon_footprint: f64,
}

impl ScoreWeights {
    /// Fixed weights used for every report
    pub const STANDARD: ScoreWeights = ScoreWeights {
        renewable_content: 0.20,
        lifespan: 0.03,
        recyclability: 0.30,
        production_energy: -0.01,
        carbon_footprint: -0.20,
    };

    /// Weighted sum of the record's five attributes
    pub fn score(&self, record: &MaterialRecord) -> f64 {
        record.renewable_content_percent * self.renewable_content
            + record.average_lifespan_years * self.lifespan
            + record.recyclability_percent * self.recyclability
            + record.production_energy_mj_per_kg * self.production_energy
            + record.carbon_footprint_kg_co2e_per_kg * self.carbon_footprint
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A record paired with its computed score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMaterial {
    pub record: MaterialRecord,
    pub score: f64,
}

impl ScoredMaterial {
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Score a record with the standard weights
pub fn score(record: &MaterialRecord) -> f64 {
    ScoreWeights::STANDARD.score(record)
}

/// Score every record, keeping input order
pub fn score_all(records: Vec<MaterialRecord>, weights: &ScoreWeights) -> Vec<ScoredMaterial> {
    records
        .into_iter()
        .map(|record| {
            let score = weights.score(&record);
            ScoredMaterial { record, score }
        })
        .collect()
}
