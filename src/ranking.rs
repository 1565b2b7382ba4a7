//! Ranking of scored materials

use tracing::debug;

use crate::scorer::ScoredMaterial;

/// Order by score, highest first
///
/// `sort_by` is stable, so equal scores keep their input order.
/// `total_cmp` keeps the order total if a NaN ever gets through.
pub fn rank(mut materials: Vec<ScoredMaterial>) -> Vec<ScoredMaterial> {
    materials.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));
    debug!("Ranked {} materials", materials.len());
    materials
}

/// Fold -0.0 into 0.0 so the two compare equal
fn sort_key(score: f64) -> f64 {
    if score == 0.0 {
        0.0
    } else {
        score
    }
}
