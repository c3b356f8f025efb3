//! CSV export of a ranked result set.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use savor_core::Recommendation;

/// Flat row shape written per recommendation; column names mirror the
/// catalog source plus the computed score.
#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    address: &'a str,
    tel: &'a str,
    cuisines: &'a str,
    pricing: &'a str,
    rating: &'a str,
    reviews: &'a str,
    score: f32,
}

/// Write one query's recommendations to a CSV file, ranked order
/// preserved.
pub fn export_csv(path: &Path, recommendations: &[Recommendation]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;

    for recommendation in recommendations {
        let r = &recommendation.restaurant;
        writer
            .serialize(ExportRow {
                name: &r.name,
                address: &r.address,
                tel: &r.phone,
                cuisines: &r.cuisines,
                pricing: &r.pricing,
                rating: &r.rating,
                reviews: &r.reviews,
                score: recommendation.score,
            })
            .context("failed to write recommendation row")?;
    }
    writer.flush().context("failed to flush export file")?;

    info!(path = %path.display(), rows = recommendations.len(), "recommendations exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use savor_core::Restaurant;

    #[test]
    fn writes_header_and_ranked_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recommendations-1.csv");
        let recommendations = vec![Recommendation {
            restaurant: Restaurant {
                name: "Luigi".to_string(),
                address: "12 Baker Street".to_string(),
                phone: "555-0100".to_string(),
                cuisines: "Italian".to_string(),
                pricing: "$$".to_string(),
                rating: "4.5".to_string(),
                reviews: "120".to_string(),
            },
            score: 0.75,
        }];

        export_csv(&path, &recommendations).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,address,tel,cuisines,pricing,rating,reviews,score"
        );
        assert!(lines.next().unwrap().starts_with("Luigi,12 Baker Street"));
    }
}
