//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use shoe_card::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::{find_config, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate { path } => validate_config(path.as_deref(), ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let card = &ctx.config.card;
    println!();
    println!("[card]");
    ctx.output.kv("currency", card.currency.code());
    ctx.output.kv(
        "new_release_window_days",
        &card.new_release_window_days.to_string(),
    );
    ctx.output.kv("link_prefix", &card.link_prefix);
    ctx.output.kv("spacer_px", &card.spacer_px.to_string());

    println!();
    println!("[card.theme.colors]");
    let colors = &card.theme.colors;
    ctx.output.kv("white", &colors.white);
    ctx.output.kv("primary", &colors.primary);
    ctx.output.kv("secondary", &colors.secondary);
    ctx.output.kv("gray700", &colors.gray700);
    ctx.output.kv("gray900", &colors.gray900);

    println!();
    println!("[card.theme.weights]");
    let weights = &card.theme.weights;
    ctx.output.kv("normal", &weights.normal.to_string());
    ctx.output.kv("medium", &weights.medium.to_string());
    ctx.output.kv("bold", &weights.bold.to_string());

    println!();
    println!("[output]");
    ctx.output.kv("title", &ctx.config.output.title);
    ctx.output
        .kv("log_level", &ctx.config.output.log_level.to_string());
    ctx.output
        .kv("log_format", &format!("{:?}", ctx.config.output.log_format));

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = ctx.config_path.clone().or_else(|| find_config(&ctx.cwd)) else {
        bail!("No config file found. Run `shoecard config init` to create one.");
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.card.validate()?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    let content = generate_default_config(&ctx.config.output.title);
    tokio::fs::write(&config_path, content).await?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(path: Option<&str>, ctx: &Context) -> Result<()> {
    let path: PathBuf = match path {
        Some(p) => ctx.resolve_path(p),
        None => match &ctx.config_path {
            Some(p) => p.clone(),
            None => bail!("No config file found. Run `shoecard config init` to create one."),
        },
    };

    ctx.output
        .header(&format!("Validating {}", path.display()));

    let config = CliConfig::load(&path)?;
    let warnings = config_warnings(&config);

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}

/// Settings that load fine but are probably mistakes.
fn config_warnings(config: &CliConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.card.new_release_window_days == 0 {
        warnings.push(
            "card.new_release_window_days is 0: only future releases will be tagged".to_string(),
        );
    }
    if config.card.new_release_window_days > 365 {
        warnings.push(format!(
            "card.new_release_window_days is {}: most listings will be tagged as new",
            config.card.new_release_window_days
        ));
    }
    if config.card.link_prefix.is_empty() {
        warnings.push("card.link_prefix is empty: cards will link to /{slug}".to_string());
    }
    if config.output.title.trim().is_empty() {
        warnings.push("output.title is empty".to_string());
    }

    warnings
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["card", "currency"] => Ok(config.card.currency.code().to_string()),
        ["card", "new_release_window_days"] => {
            Ok(config.card.new_release_window_days.to_string())
        }
        ["card", "link_prefix"] => Ok(config.card.link_prefix.clone()),
        ["card", "spacer_px"] => Ok(config.card.spacer_px.to_string()),
        ["card", "theme", "colors", "white"] => Ok(config.card.theme.colors.white.clone()),
        ["card", "theme", "colors", "primary"] => Ok(config.card.theme.colors.primary.clone()),
        ["card", "theme", "colors", "secondary"] => {
            Ok(config.card.theme.colors.secondary.clone())
        }
        ["card", "theme", "colors", "gray700"] => Ok(config.card.theme.colors.gray700.clone()),
        ["card", "theme", "colors", "gray900"] => Ok(config.card.theme.colors.gray900.clone()),
        ["card", "theme", "weights", "normal"] => Ok(config.card.theme.weights.normal.to_string()),
        ["card", "theme", "weights", "medium"] => Ok(config.card.theme.weights.medium.to_string()),
        ["card", "theme", "weights", "bold"] => Ok(config.card.theme.weights.bold.to_string()),
        ["output", "title"] => Ok(config.output.title.clone()),
        ["output", "log_level"] => Ok(config.output.log_level.to_string().to_lowercase()),
        ["output", "log_format"] => Ok(format!("{:?}", config.output.log_format).to_lowercase()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["card", "currency"] => {
            config.card.currency = match Currency::from_code(value) {
                Some(currency) => currency,
                None => bail!("Unknown currency: {}", value),
            }
        }
        ["card", "new_release_window_days"] => {
            config.card.new_release_window_days = value.parse()?
        }
        ["card", "link_prefix"] => config.card.link_prefix = value.to_string(),
        ["card", "spacer_px"] => config.card.spacer_px = value.parse()?,
        ["card", "theme", "colors", "white"] => config.card.theme.colors.white = value.to_string(),
        ["card", "theme", "colors", "primary"] => {
            config.card.theme.colors.primary = value.to_string()
        }
        ["card", "theme", "colors", "secondary"] => {
            config.card.theme.colors.secondary = value.to_string()
        }
        ["card", "theme", "colors", "gray700"] => {
            config.card.theme.colors.gray700 = value.to_string()
        }
        ["card", "theme", "colors", "gray900"] => {
            config.card.theme.colors.gray900 = value.to_string()
        }
        ["card", "theme", "weights", "normal"] => config.card.theme.weights.normal = value.parse()?,
        ["card", "theme", "weights", "medium"] => config.card.theme.weights.medium = value.parse()?,
        ["card", "theme", "weights", "bold"] => config.card.theme.weights.bold = value.parse()?,
        ["output", "title"] => config.output.title = value.to_string(),
        ["output", "log_level"] => {
            config.output.log_level = value.parse().map_err(anyhow::Error::msg)?
        }
        ["output", "log_format"] => {
            config.output.log_format = match value.to_lowercase().as_str() {
                "json" => shoe_observability::LogFormat::Json,
                "human" => shoe_observability::LogFormat::Human,
                other => bail!("Unknown log format: {}", other),
            }
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoe_observability::{LogFormat, LogLevel};

    #[test]
    fn test_get_set_round_trip() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "card.new_release_window_days", "14").unwrap();
        set_config_value(&mut config, "card.currency", "gbp").unwrap();
        set_config_value(&mut config, "card.theme.colors.primary", "red").unwrap();
        set_config_value(&mut config, "output.log_level", "debug").unwrap();
        set_config_value(&mut config, "output.log_format", "JSON").unwrap();

        assert_eq!(
            get_config_value(&config, "card.new_release_window_days").unwrap(),
            "14"
        );
        assert_eq!(get_config_value(&config, "card.currency").unwrap(), "GBP");
        assert_eq!(
            get_config_value(&config, "card.theme.colors.primary").unwrap(),
            "red"
        );
        assert_eq!(config.output.log_level, LogLevel::Debug);
        assert_eq!(get_config_value(&config, "output.log_format").unwrap(), "json");
        assert_eq!(config.output.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = CliConfig::default();
        assert!(get_config_value(&config, "card.size").is_err());
        assert!(set_config_value(&mut config, "deploy.canary", "true").is_err());
    }

    #[test]
    fn test_bad_values() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "card.currency", "XYZ").is_err());
        assert!(set_config_value(&mut config, "card.spacer_px", "wide").is_err());
        assert!(set_config_value(&mut config, "output.log_level", "loud").is_err());
    }

    #[test]
    fn test_warnings() {
        assert!(config_warnings(&CliConfig::default()).is_empty());

        let mut config = CliConfig::default();
        config.card.new_release_window_days = 0;
        config.card.link_prefix = String::new();
        assert_eq!(config_warnings(&config).len(), 2);
    }
}
