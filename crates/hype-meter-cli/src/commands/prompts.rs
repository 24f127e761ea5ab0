use color_eyre::Result;
use dialoguer::{Input, Password, Select};
use hype_meter_core::hype_label;
use hype_meter_models::{MAX_RATING, MIN_RATING};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a secret (masked input)
pub fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))
}

/// Pick a star rating, highest first
pub fn prompt_rating() -> Result<u8> {
    let ratings: Vec<u8> = (MIN_RATING..=MAX_RATING).rev().collect();
    let items: Vec<String> = ratings.iter().map(|&r| rating_choice(r)).collect();

    let index = Select::new()
        .with_prompt("Your rating")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read rating: {}", e))?;

    Ok(ratings[index])
}

fn rating_choice(rating: u8) -> String {
    format!("{}  {}", super::reviews::stars(rating), hype_label(rating).unwrap_or_default())
}
