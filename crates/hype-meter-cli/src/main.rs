use clap::{ArgAction, Parser, Subcommand};
use commands::{config, reviews, submit, AppContext};
use hype_meter_config::PathManager;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "hype-meter")]
#[command(about = "Hype Meter - read and share fan reviews for the movie")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to a file, rotated daily. Without PATH the file goes to the config directory
    #[arg(long, global = true, value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the hype meter: fan reviews with rating summary
    #[command(long_about = "Load the shared fan reviews and show them newest first together with the total count, average rating and number of hyped fans. The bundled reviews are always shown, even when the review store cannot be reached.")]
    Reviews {
        /// Show at most this many reviews
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Show only the rating summary
    Stats,
    /// Share your hype: submit a review
    #[command(long_about = "Submit a review with your name, a 1-5 star rating and some text. Missing values are prompted for when running in a terminal.")]
    Submit {
        /// Your display name
        #[arg(long)]
        name: Option<String>,

        /// Star rating from 1 to 5
        #[arg(long)]
        rating: Option<u8>,

        /// Review text
        #[arg(long)]
        text: Option<String>,
    },
    /// Manage the review store configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the access key)
    Show {
        /// Show the access key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Write a new config file
    Init {
        /// Document URL of the review store (prompted for if omitted)
        #[arg(long)]
        endpoint: Option<String>,

        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Store the access key for the review store
    SetKey {
        /// Access key (prompted for with hidden input if omitted)
        #[arg(long)]
        key: Option<String>,
    },
    /// Remove the stored access key
    ClearKey,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .map(|path| path.unwrap_or_else(|| PathManager::default().default_log_file()));
    logging::init_logging(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let ctx = AppContext::resolve(cli.config);

    match cli.command {
        Commands::Reviews { limit } => reviews::run_reviews(&ctx, limit, &output).await,
        Commands::Stats => reviews::run_stats(&ctx, &output).await,
        Commands::Submit { name, rating, text } => submit::run_submit(&ctx, name, rating, text, &output).await,
        Commands::Config { cmd } => config::run_config(&ctx, cmd, &output).await,
    }
}
