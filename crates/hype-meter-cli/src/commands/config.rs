use super::panel_ui::is_interactive;
use super::prompts;
use super::AppContext;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use hype_meter_config::{Config, ACCESS_KEY_ENV};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(ctx, full, output),
        ConfigCommands::Init { endpoint, force } => init_config(ctx, endpoint, force, output),
        ConfigCommands::SetKey { key } => set_key(ctx, key, output),
        ConfigCommands::ClearKey => clear_key(ctx, output),
    }
}

fn show_config(ctx: &AppContext, full: bool, output: &Output) -> Result<()> {
    let config_file = ctx.config_file();
    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Run 'hype-meter config init --endpoint <URL>' to create it.");
        return Ok(());
    }

    let config = ctx.load_config()?;
    let credentials = ctx.load_credentials()?;
    let key_source = if std::env::var(ACCESS_KEY_ENV).is_ok() {
        ACCESS_KEY_ENV.to_string()
    } else {
        ctx.credentials_file().display().to_string()
    };
    let key_display = match credentials.resolve_access_key() {
        Some(key) if full => key,
        Some(key) => mask_string(&key),
        None => "<not set>".to_string(),
    };
    let timeout_display = config
        .store
        .timeout_seconds
        .map(|s| format!("{}s", s))
        .unwrap_or_else(|| "client default".to_string());

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            println!("\n{}", "Configuration".bright_cyan().bold());
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Config File").add_attribute(Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![Cell::new("Endpoint"), Cell::new(&config.store.endpoint)]);
            table.add_row(vec![Cell::new("Access Key Header"), Cell::new(&config.store.access_key_header)]);
            table.add_row(vec![
                Cell::new("Access Key"),
                Cell::new(format!("{} ({})", key_display, key_source)),
            ]);
            table.add_row(vec![Cell::new("Timeout"), Cell::new(timeout_display)]);
            table.add_row(vec![Cell::new("Date Format"), Cell::new(&config.reviews.date_format)]);
            table.add_row(vec![
                Cell::new("Avatar Colors"),
                Cell::new(format!("#{} on #{}", config.avatar.color, config.avatar.background)),
            ]);
            let status = if config.is_store_configured() {
                Cell::new("✓ ready").fg(Color::Green)
            } else {
                Cell::new("✗ endpoint not configured").fg(Color::Red)
            };
            table.add_row(vec![Cell::new("Status"), status]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "store": {
                    "endpoint": config.store.endpoint,
                    "access_key_header": config.store.access_key_header,
                    "access_key": key_display,
                    "timeout_seconds": config.store.timeout_seconds,
                },
                "reviews": { "date_format": config.reviews.date_format },
                "avatar": config.avatar,
                "configured": config.is_store_configured(),
            }));
        }
    }

    Ok(())
}

fn init_config(ctx: &AppContext, endpoint: Option<String>, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.config_file().to_path_buf();
    if config_file.exists() && !force {
        return Err(color_eyre::eyre::eyre!(
            "Configuration already exists at {}. Use --force to overwrite it.",
            config_file.display()
        ));
    }

    let endpoint = match endpoint {
        Some(endpoint) => Some(endpoint),
        None if is_interactive() => {
            Some(prompts::prompt_string("Review store document URL", None)?).filter(|e| !e.trim().is_empty())
        }
        None => None,
    };

    let config = match endpoint {
        Some(endpoint) => Config::with_endpoint(endpoint.trim().to_string()),
        None => Config::template(),
    };
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(format!("Configuration written to {}", config_file.display()));
    if let Err(e) = config.validate() {
        output.warn(format!("Edit the file before use: {}", e));
    }
    Ok(())
}

fn set_key(ctx: &AppContext, key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => prompts::prompt_password("Store access key")?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(color_eyre::eyre::eyre!("Access key cannot be empty"));
    }

    let mut credentials = ctx.load_credentials()?;
    credentials.set_access_key(key);
    credentials
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save credentials: {}", e))?;

    output.success(format!("Access key saved to {}", ctx.credentials_file().display()));
    Ok(())
}

fn clear_key(ctx: &AppContext, output: &Output) -> Result<()> {
    let mut credentials = ctx.load_credentials()?;
    if credentials.get_access_key().is_none() {
        output.info("No access key stored.");
        return Ok(());
    }
    credentials.clear_access_key();
    credentials
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save credentials: {}", e))?;
    output.success("Access key removed");
    Ok(())
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
