use crate::output::Output;
use color_eyre::Result;
use hype_meter_core::{ReviewRepository, ReviewScreen};
use hype_meter_models::Review;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner shown while the review document is being fetched.
///
/// Off for JSON output, quiet mode and non-terminals; those get a log line instead.
pub struct LoadingIndicator {
    spinner: Option<ProgressBar>,
}

impl LoadingIndicator {
    pub fn start(message: &str, output: &Output) -> Self {
        if !output.is_human() || output.is_quiet() || !is_interactive() {
            tracing::debug!("{} (no spinner)", message);
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.red} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner: Some(spinner) }
    }

    pub fn finish(self) {
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}

/// Open the review panel and load a fresh collection into it
pub async fn open_review_panel<'a>(
    screen: &'a mut ReviewScreen,
    repository: &ReviewRepository,
    output: &Output,
) -> Result<&'a [Review]> {
    let ticket = screen.open_reviews();
    let indicator = LoadingIndicator::start("Loading fan reviews...", output);
    let reviews = repository.load_reviews().await;
    indicator.finish();

    if !screen.apply_loaded(ticket, reviews) {
        return Err(color_eyre::eyre::eyre!("Review panel was closed before reviews loaded"));
    }
    screen
        .reviews()
        .ok_or_else(|| color_eyre::eyre::eyre!("Review panel has no reviews to show"))
}
