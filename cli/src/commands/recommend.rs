use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use savor_config::Config;
use savor_core::Catalog;
use savor_engine::{export_csv, RankOutcome, Recommender};

use super::ui;

/// One-shot query: extract, rank, print, optionally export.
pub fn handle_recommend(
    query: &str,
    top: usize,
    data: &Path,
    save: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load_from(config_path)?;
    anyhow::ensure!(
        top >= 1 && top <= config.ranking.max_results,
        "--top must be between 1 and {}",
        config.ranking.max_results
    );

    let catalog = Catalog::load(data, config.catalog.max_rows)?;
    anyhow::ensure!(!catalog.is_empty(), "catalog is empty after cleaning");
    let recommender = Recommender::new(catalog, &config);

    ui::print_header(&format!("Searching for: {query}"));
    let preferences = recommender.extract(query);
    for token in preferences.iter().filter(|t| !t.is_empty()) {
        ui::print_key_value("preference", token);
    }

    let started = Instant::now();
    let outcome = recommender.rank(&preferences, top);
    let elapsed = started.elapsed();

    match outcome {
        RankOutcome::NoMatch => println!("No matching restaurants found."),
        RankOutcome::Ranked(recommendations) => {
            ui::print_header(&format!(
                "Top {} recommended restaurants (in {:.4} seconds)",
                recommendations.len(),
                elapsed.as_secs_f64()
            ));
            for (i, recommendation) in recommendations.iter().enumerate() {
                ui::print_recommendation(i + 1, recommendation);
            }
            if let Some(path) = save {
                export_csv(path, &recommendations)?;
                ui::print_success(&format!("Recommendations saved to {}", path.display()));
            }
        }
    }

    Ok(())
}
