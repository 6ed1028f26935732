//! Init command - first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Nevn Setup");
    println!();
    println!("Welcome to Nevn! Let's make sure everything is configured correctly.\n");

    // Step 1: Check prerequisites
    println!("{}", style("Step 1: Checking prerequisites").bold().cyan());
    println!();

    if ytdlp_available() {
        Output::success("yt-dlp is installed!");
    } else {
        Output::warning("yt-dlp was not found. Nevn needs it to list videos and fetch captions.");
        println!("    {} {}", style("->").dim(), style(install_hint()).dim());
        println!();

        if !prompt_continue("Continue anyway?")? {
            println!();
            Output::info("Setup cancelled. Install yt-dlp and run 'nevn init' again.");
            return Ok(());
        }
    }

    println!();

    // Step 2: Output directory
    println!("{}", style("Step 2: Setting up directories").bold().cyan());
    println!();

    let output_dir = settings.output_dir();
    if output_dir.exists() {
        Output::info(&format!("Output directory exists: {}", output_dir.display()));
    } else {
        std::fs::create_dir_all(&output_dir)?;
        Output::success(&format!("Created output directory: {}", output_dir.display()));
    }

    println!();

    // Step 3: Config file
    println!("{}", style("Step 3: Configuration file").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else if prompt_continue("Create default configuration file?")? {
        settings.save_to(&config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        println!();
        println!(
            "  The default keyword list is in the [keywords] section. Edit it with: {}",
            style("nevn config edit").green()
        );
    } else {
        Output::info("Skipped config file creation. Using defaults.");
    }

    println!();

    // Summary
    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!(
        "  {} Build a video list for a channel",
        style("nevn videos <url>").cyan()
    );
    println!("  {} Analyze it for keyword mentions", style("nevn analyze").cyan());
    println!();
    println!("For more help: {}", style("nevn --help").cyan());

    Ok(())
}

/// Check whether yt-dlp is on the PATH.
fn ytdlp_available() -> bool {
    std::process::Command::new("yt-dlp")
        .arg("--version")
        .output()
        .is_ok()
}

/// Get platform-specific install hint.
fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "Install with: brew install yt-dlp"
    } else if cfg!(target_os = "linux") {
        "Install with: pip install yt-dlp"
    } else {
        "Install from: https://github.com/yt-dlp/yt-dlp"
    }
}

/// Prompt user for yes/no confirmation.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} ", style("?").cyan(), message);
    print!("{} ", style("[y/N]").dim());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y" || input.trim().to_lowercase() == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_hint_mentions_ytdlp() {
        assert!(install_hint().contains("yt-dlp"));
    }
}
