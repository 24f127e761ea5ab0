use super::panel_ui::open_review_panel;
use super::AppContext;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use hype_meter_core::{ReviewScreen, ReviewStats};
use hype_meter_models::{Review, MAX_RATING};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_reviews(ctx: &AppContext, limit: Option<usize>, output: &Output) -> Result<()> {
    let config = ctx.load_config()?;
    let repository = ctx.open_repository(&config)?;

    let mut screen = ReviewScreen::new();
    let reviews = open_review_panel(&mut screen, &repository, output).await?;
    let stats = ReviewStats::from_reviews(reviews);
    let shown = &reviews[..limit.unwrap_or(reviews.len()).min(reviews.len())];

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            print_header();
            println!("{}", stats_table(&stats));
            println!();
            println!("{}", format!("Fan Reviews ({})", stats.total).bright_white().bold());
            println!("{}", reviews_table(shown));
            if shown.len() < reviews.len() {
                output.info(format!("... and {} more", reviews.len() - shown.len()));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "stats": stats,
                "reviews": shown,
            }));
        }
    }

    Ok(())
}

pub async fn run_stats(ctx: &AppContext, output: &Output) -> Result<()> {
    let config = ctx.load_config()?;
    let repository = ctx.open_repository(&config)?;

    let mut screen = ReviewScreen::new();
    let reviews = open_review_panel(&mut screen, &repository, output).await?;
    let stats = ReviewStats::from_reviews(reviews);

    match output.format() {
        OutputFormat::Human => {
            if !output.is_quiet() {
                println!("{}", stats_table(&stats));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => output.json(&json!(stats)),
    }

    Ok(())
}

pub fn print_header() {
    println!("\n{}", "╔════════════════════════════════════════════════════════════╗".bright_white());
    println!("{} {}", "║".bright_white(), "HYPE METER".bright_red().bold());
    println!("{}", "╚════════════════════════════════════════════════════════════╝".bright_white());
    println!();
}

/// Filled and empty stars out of five
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

pub fn stats_table(stats: &ReviewStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Total Reviews").add_attribute(Attribute::Bold),
        Cell::new("Average Rating").add_attribute(Attribute::Bold),
        Cell::new("Hyped Fans").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(stats.total),
        Cell::new(format!("{} / 5", stats.average_rating)).fg(Color::Yellow),
        Cell::new(stats.hyped).fg(Color::Red),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

pub fn reviews_table(reviews: &[Review]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Fan").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Review").add_attribute(Attribute::Bold),
    ]);
    for review in reviews {
        table.add_row(vec![
            Cell::new(&review.name).fg(Color::Cyan),
            Cell::new(stars(review.rating)).fg(Color::Yellow),
            Cell::new(&review.date),
            Cell::new(&review.review),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
