//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{CartError, CartResult};
use crate::persistence::{Backend, LoadPolicy};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const VALID_KEYS: [&str; 6] = [
    "general.verbose",
    "general.log_format",
    "storage.backend",
    "storage.namespace",
    "storage.dir",
    "storage.on_corrupt",
];

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> CartResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> CartResult<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> CartResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::step_ok_detail(
        &ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> CartResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();

    if let Err(e) = apply_value(&mut config, key, value) {
        ui::step_error_detail(&ctx, "Cannot set config key", &e.to_string());
        ui::remark(&ctx, &format!("Valid keys: {}", VALID_KEYS.join(", ")));
        return Err(e);
    }

    manager.save(&config).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply a dot-separated key to the config, validating the value
fn apply_value(config: &mut Config, key: &str, value: &str) -> CartResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["general", "log_format"] => {
            if !matches!(value, "text" | "json") {
                return Err(CartError::User(format!(
                    "Invalid log format: {}. Use text/json",
                    value
                )));
            }
            config.general.log_format = value.to_string();
        }
        ["storage", "backend"] => {
            Backend::parse(value)?;
            config.storage.backend = value.trim().to_ascii_lowercase();
        }
        ["storage", "namespace"] => {
            if value.trim().is_empty() {
                return Err(CartError::User("Namespace must not be empty".to_string()));
            }
            config.storage.namespace = value.to_string();
        }
        ["storage", "dir"] => config.storage.dir = Some(PathBuf::from(value)),
        ["storage", "on_corrupt"] => config.storage.on_corrupt = parse_policy(value)?,
        _ => return Err(CartError::User(format!("Unknown config key: {}", key))),
    }

    Ok(())
}

fn parse_bool(value: &str) -> CartResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CartError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_policy(value: &str) -> CartResult<LoadPolicy> {
    match value.to_lowercase().as_str() {
        "fail" => Ok(LoadPolicy::Fail),
        "reset" => Ok(LoadPolicy::Reset),
        _ => Err(CartError::User(format!(
            "Invalid corrupt-cart policy: {}. Use fail/reset",
            value
        ))),
    }
}
