use console::Style;
use savor_core::Recommendation;

pub fn print_header(title: &str) {
    println!("\n{}", Style::new().bold().cyan().apply_to(title));
    println!("{}", Style::new().dim().apply_to("─".repeat(title.len())));
}

pub fn print_success(msg: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("SUCCESS:"), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("ERROR:"), msg);
}

pub fn print_key_value(key: &str, value: &str) {
    println!(
        "{}: {}",
        Style::new().dim().apply_to(key),
        Style::new().bold().apply_to(value)
    );
}

pub fn print_recommendation(i: usize, recommendation: &Recommendation) {
    let r = &recommendation.restaurant;
    println!(
        "{} {} {}",
        Style::new().dim().apply_to(format!("{i}.")),
        Style::new().bold().cyan().apply_to(&r.name),
        Style::new()
            .dim()
            .apply_to(format!("(score {:.3})", recommendation.score)),
    );
    println!(
        "   {} | {} | rated {} ({} reviews)",
        r.cuisines, r.pricing, r.rating, r.reviews
    );
    println!("   {} | {}", r.address, r.phone);
}
