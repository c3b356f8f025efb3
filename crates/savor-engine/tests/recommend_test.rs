use savor_config::{Config, EmptyPreference, IndexConfig};
use savor_core::{Catalog, PreferenceSet, Restaurant};
use savor_engine::{RankOutcome, Ranker, Recommender};
use savor_index::FeatureIndex;

fn restaurant(name: &str, cuisines: &str, pricing: &str, address: &str, rating: &str) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        address: address.to_string(),
        phone: "555-0100".to_string(),
        cuisines: cuisines.to_string(),
        pricing: pricing.to_string(),
        rating: rating.to_string(),
        reviews: "10".to_string(),
    }
}

/// The three-row catalog from the ranking contract: distinct rows with
/// overlapping cuisine labels.
fn three_row_catalog() -> Catalog {
    Catalog::from_records(
        vec![
            restaurant("Trattoria", "Italian", "$$", "12 Baker Street", "4.5"),
            restaurant("Bistro", "Italian,French", "$$$", "8 Rue Cler", "4.2"),
            restaurant("Cantina", "Mexican", "$", "3 Plaza Mayor", "4.0"),
        ],
        8000,
    )
}

fn ranked(outcome: RankOutcome) -> Vec<String> {
    match outcome {
        RankOutcome::Ranked(recommendations) => recommendations
            .into_iter()
            .map(|r| r.restaurant.name)
            .collect(),
        RankOutcome::NoMatch => panic!("expected ranked results"),
    }
}

fn prefs(tokens: &[&str]) -> PreferenceSet {
    PreferenceSet::new(tokens.iter().map(|t| t.to_string()).collect())
}

#[test]
fn italian_preference_ranks_the_two_candidates_first() {
    let catalog = three_row_catalog();
    let index = FeatureIndex::build(&catalog, &IndexConfig::default());
    let ranker = Ranker::new(EmptyPreference::MatchAll);

    let names = ranked(ranker.rank(&catalog, &index, &prefs(&["italian"]), 2));
    assert_eq!(names.len(), 2);
    // Both candidates score (1 + sim(0,1)) / 2; the tie keeps catalog order.
    assert_eq!(names, vec!["Trattoria", "Bistro"]);
}

#[test]
fn ranking_is_idempotent() {
    let catalog = three_row_catalog();
    let index = FeatureIndex::build(&catalog, &IndexConfig::default());
    let ranker = Ranker::new(EmptyPreference::MatchAll);
    let preferences = prefs(&["italian"]);

    let first = ranker.rank(&catalog, &index, &preferences, 3);
    let second = ranker.rank(&catalog, &index, &preferences, 3);
    assert_eq!(first, second);
}

#[test]
fn top_n_equal_to_catalog_size_returns_whole_catalog() {
    let catalog = three_row_catalog();
    let index = FeatureIndex::build(&catalog, &IndexConfig::default());
    let ranker = Ranker::new(EmptyPreference::MatchAll);

    let names = ranked(ranker.rank(&catalog, &index, &prefs(&["italian"]), 3));
    assert_eq!(names.len(), 3);

    let more = ranked(ranker.rank(&catalog, &index, &prefs(&["italian"]), 100));
    assert_eq!(more.len(), 3);
}

#[test]
fn empty_token_matches_everything_under_match_all() {
    let catalog = three_row_catalog();
    let index = FeatureIndex::build(&catalog, &IndexConfig::default());
    let ranker = Ranker::new(EmptyPreference::MatchAll);

    // An extraction with no usable signal still selects the whole
    // catalog: the empty string is a substring of every cuisine field.
    let names = ranked(ranker.rank(&catalog, &index, &prefs(&[""]), 3));
    assert_eq!(names.len(), 3);
}

#[test]
fn empty_token_yields_no_match_under_no_match_policy() {
    let catalog = three_row_catalog();
    let index = FeatureIndex::build(&catalog, &IndexConfig::default());
    let ranker = Ranker::new(EmptyPreference::NoMatch);

    let outcome = ranker.rank(&catalog, &index, &prefs(&[""]), 3);
    assert_eq!(outcome, RankOutcome::NoMatch);
}

#[test]
fn non_candidate_rows_can_outrank_candidates() {
    // Two near-identical Italian rows in London, one Italian outlier on a
    // remote island, and a Mexican row sharing the London feature text.
    // The Mexican row never passes the cuisine filter, yet its mean
    // similarity to the candidate subset beats the Italian outlier's.
    let catalog = Catalog::from_records(
        vec![
            restaurant("LondonA", "Italian", "$$", "12 Baker Street London", "4.5"),
            restaurant("LondonB", "Italian", "$$", "12 Baker Street London", "4.5"),
            restaurant(
                "Outlier",
                "Italian,Unagi",
                "luxury",
                "99 Remote Island Nowhere",
                "1.0",
            ),
            restaurant("Mexicali", "Mexican", "$$", "12 Baker Street London", "4.5"),
        ],
        8000,
    );
    let index = FeatureIndex::build(&catalog, &IndexConfig::default());
    let ranker = Ranker::new(EmptyPreference::MatchAll);

    let names = ranked(ranker.rank(&catalog, &index, &prefs(&["italian"]), 3));
    assert_eq!(names, vec!["LondonA", "LondonB", "Mexicali"]);
}

#[test]
fn recommend_end_to_end_with_cuisine_match() {
    let catalog = three_row_catalog();
    let recommender = Recommender::new(catalog, &Config::default());

    let names = ranked(recommender.recommend("craving italian food tonight", 2));
    assert_eq!(names, vec!["Trattoria", "Bistro"]);
}

#[test]
fn recommend_end_to_end_without_signal_follows_policy() {
    let mut config = Config::default();
    config.ranking.empty_preference = EmptyPreference::NoMatch;
    let recommender = Recommender::new(three_row_catalog(), &config);

    let outcome = recommender.recommend("cheap eats downtown", 2);
    assert_eq!(outcome, RankOutcome::NoMatch);

    // The historical default instead matches the whole catalog.
    let recommender = Recommender::new(three_row_catalog(), &Config::default());
    let names = ranked(recommender.recommend("cheap eats downtown", 5));
    assert_eq!(names.len(), 3);
}

#[test]
fn extraction_feeds_ranking_for_the_example_query() {
    let recommender = Recommender::new(three_row_catalog(), &Config::default());

    let preferences = recommender.extract(
        "Find restaurants in England with a budget of $50 per person & Mediterranean food",
    );
    let tokens = preferences.tokens();
    assert!(tokens[0].contains("England"));
    assert!(tokens[1].contains("50"));
    // "Mediterranean" is not in this catalog's vocabulary.
    assert_eq!(tokens.last().unwrap(), "");

    // Under the historical policy the empty cuisine token still ranks
    // the whole catalog.
    let names = ranked(recommender.rank(&preferences, 3));
    assert_eq!(names.len(), 3);
}
