//! Config subcommands handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};

use cutline::config::migrate_config;
use cutline::Config;

use super::ansi;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist), adds any
/// missing fields from the current default config, shows a preview of the
/// changes and asks for confirmation unless `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("Config is already up to date.");
        return Ok(());
    }

    if file_exists {
        println!(
            "Found {} missing field(s) in {} new section(s):",
            result.added_fields.len(),
            result.sections_added.len()
        );
    } else {
        println!("Config file does not exist. Will create with default settings.");
    }
    println!();
    print_diff_preview(&result.content, &result.added_fields, !file_exists);
    println!();

    if !yes && !prompt_confirmation(&format!("Write {}?", config_path.display()))? {
        println!("No changes made.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;
    println!("Config written to {}", config_path.display());

    Ok(())
}

/// Print a diff-style preview of the config changes.
///
/// Lines holding added fields get a green `+` prefix; for a new file every
/// line is an addition.
fn print_diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) {
    let mut current_section = String::new();

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].to_string();
            let section_prefix = format!("{}.", current_section);
            if is_new_file || added_fields.iter().any(|f| f.starts_with(&section_prefix)) {
                println!("  {}", line);
            }
            continue;
        }

        let is_added = trimmed
            .split_once('=')
            .map(|(key, _)| format!("{}.{}", current_section, key.trim()))
            .map_or(false, |field| added_fields.contains(&field));

        if is_added || (is_new_file && !trimmed.is_empty()) {
            println!("{}+ {}{}", ansi::GREEN, line, ansi::RESET);
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to apply changes automatically");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
