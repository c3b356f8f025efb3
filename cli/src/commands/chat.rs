use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use savor_config::Config;
use savor_core::Catalog;
use savor_engine::{export_csv, RankOutcome, Recommender};

use super::ui;

/// Interactive session loop: preference text, then a count, then styled
/// results with an optional CSV export per query.
pub fn handle_chat(data: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let catalog = Catalog::load(data, config.catalog.max_rows)?;
    anyhow::ensure!(!catalog.is_empty(), "catalog is empty after cleaning");
    let recommender = Recommender::new(catalog, &config);

    let name = match prompt("Name? ")? {
        Some(name) if !name.is_empty() => name,
        _ => "friend".to_string(),
    };
    ui::print_header(&format!("Welcome to the savor restaurant recommender, {name}!"));
    println!("Enter 'exit' at any time to end the session.");

    let mut saved_files = 0usize;
    loop {
        let input = match prompt("\nHow may I help you? ")? {
            Some(input) => input,
            None => break,
        };
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let preferences = recommender.extract(&input);
        let top_n = match prompt_for_count(config.ranking.max_results)? {
            Some(top_n) => top_n,
            None => break,
        };

        println!("\nGetting your recommendations...");
        let started = Instant::now();
        let outcome = recommender.rank(&preferences, top_n);
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

                match prompt_yes_no(
                    "\nWould you like to save these recommendations to a CSV file? (yes/no) ",
                )? {
                    Some(true) => {
                        saved_files += 1;
                        let file = format!("recommendations-{saved_files}.csv");
                        export_csv(Path::new(&file), &recommendations)?;
                        ui::print_success(&format!("Recommendations saved to {file}"));
                    }
                    Some(false) => println!("Your recommendations won't be saved."),
                    None => break,
                }
            }
        }
    }

    println!("Thank you for using savor!");
    Ok(())
}

/// Read one trimmed line; `None` when stdin is closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep asking until the user supplies a valid count. The ranker never
/// sees an invalid value: non-numeric, zero and above-ceiling inputs are
/// all rejected here with a specific message.
fn prompt_for_count(ceiling: usize) -> Result<Option<usize>> {
    loop {
        let input = match prompt("How many recommendations do you wish to receive? ")? {
            Some(input) => input,
            None => return Ok(None),
        };
        match input.parse::<usize>() {
            Err(_) => ui::print_error("Invalid input. Enter a number."),
            Ok(0) => ui::print_error("Please enter a number above 0."),
            Ok(n) if n > ceiling => ui::print_error(&format!(
                "The system can return at most {ceiling} recommendations."
            )),
            Ok(n) => return Ok(Some(n)),
        }
    }
}

fn prompt_yes_no(label: &str) -> Result<Option<bool>> {
    loop {
        let input = match prompt(label)? {
            Some(input) => input,
            None => return Ok(None),
        };
        match input.to_lowercase().as_str() {
            "yes" | "y" => return Ok(Some(true)),
            "no" | "n" => return Ok(Some(false)),
            _ => ui::print_error("Invalid input. Try again."),
        }
    }
}
