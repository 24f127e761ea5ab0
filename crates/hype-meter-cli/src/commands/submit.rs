use super::panel_ui::is_interactive;
use super::prompts;
use super::reviews::stats_table;
use super::AppContext;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use hype_meter_core::{hype_label, ReviewDraft, ReviewScreen, ReviewSubmitter};
use serde_json::json;

const MISSING_FIELDS_MESSAGE: &str = "Please fill in your name, rating, and review!";

pub async fn run_submit(
    ctx: &AppContext,
    name: Option<String>,
    rating: Option<u8>,
    text: Option<String>,
    output: &Output,
) -> Result<()> {
    let draft = collect_draft(name, rating, text, is_interactive() && output.is_human())?;

    // Reject before touching the store
    if let Err(e) = draft.validate() {
        output.error(MISSING_FIELDS_MESSAGE);
        return Err(color_eyre::eyre::eyre!("Review not submitted: {}", e));
    }

    let config = ctx.load_config()?;
    let repository = ctx.open_repository(&config)?;
    let submitter = ReviewSubmitter::from_config(repository, &config);

    let mut screen = ReviewScreen::new();
    screen.open_reviews();

    let outcome = match submitter.submit_review(&draft.name, draft.rating, &draft.text).await {
        Ok(outcome) => outcome,
        Err(e) => {
            output.error(MISSING_FIELDS_MESSAGE);
            return Err(color_eyre::eyre::eyre!("Review not submitted: {}", e));
        }
    };
    tracing::debug!(review_id = outcome.review.id, persisted = outcome.persisted, "Submission finished");

    screen.apply_submitted(outcome.reviews);
    let stats = screen
        .stats()
        .ok_or_else(|| color_eyre::eyre::eyre!("Review panel closed during submission"))?;

    match output.format() {
        OutputFormat::Human => {
            output.success("Thank you for your review! 🎬");
            if !output.is_quiet() {
                println!("{}", stats_table(&stats));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "success": true,
                "review": outcome.review,
                "stats": stats,
            }));
        }
    }

    Ok(())
}

/// Fill in missing fields, prompting only when `interactive`.
///
/// Anything still missing stays blank (or 0 for the rating) so validation rejects it.
fn collect_draft(
    name: Option<String>,
    rating: Option<u8>,
    text: Option<String>,
    interactive: bool,
) -> Result<ReviewDraft> {
    let name = match name {
        Some(name) => name,
        None if interactive => prompt_non_blank("Your name")?,
        None => String::new(),
    };

    let rating = match rating {
        Some(rating) => rating,
        None if interactive => {
            let picked = prompts::prompt_rating()?;
            if let Some(label) = hype_label(picked) {
                println!("{}", label);
            }
            picked
        }
        None => 0,
    };

    let text = match text {
        Some(text) => text,
        None if interactive => prompt_non_blank("Your review")?,
        None => String::new(),
    };

    Ok(ReviewDraft::new(name, rating, text))
}

fn prompt_non_blank(prompt: &str) -> Result<String> {
    let value = prompts::prompt_string(prompt, None)?;
    Ok(value.trim().to_string())
}
