//! Retouch CLI
//!
//! Thin wrapper around retouch-core for deriving prompts without the UI.
//!
//! ## Usage
//!
//! ```bash
//! # List the preset adjustments
//! retouch presets
//!
//! # List the one-click enhancements as JSON
//! retouch enhancements --json
//!
//! # Print a preset's prompt
//! retouch preset "Studio Light"
//!
//! # Compose a slider prompt
//! retouch slider --brightness 80 --contrast -10
//!
//! # Validate free-form text
//! retouch custom "make the sky a dramatic purple"
//!
//! # Print an enhancement's prompt
//! retouch enhance Upscale
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use retouch_core::{
    find_enhancement, find_preset, AdjustmentState, EditOption, SliderKind, ENHANCEMENTS,
    PRESETS,
};

/// Retouch - AI photo adjustment prompts
#[derive(Parser)]
#[command(name = "retouch")]
#[command(version = "0.1.0")]
#[command(about = "Retouch - derive photo adjustment prompts")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List preset adjustments
    Presets {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List one-click enhancements
    Enhancements {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt of a preset
    Preset {
        /// Preset name (case-insensitive)
        name: String,
    },

    /// Compose a prompt from slider values
    Slider {
        /// Brightness (-100..=100)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true,
              value_parser = clap::value_parser!(i32).range(-100..=100))]
        brightness: i32,

        /// Contrast (-100..=100)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true,
              value_parser = clap::value_parser!(i32).range(-100..=100))]
        contrast: i32,
    },

    /// Use free-form text as the prompt
    Custom {
        /// Adjustment description
        text: String,
    },

    /// Print the prompt of an enhancement
    Enhance {
        /// Enhancement name (case-insensitive)
        name: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_catalog(title: &str, catalog: &[EditOption], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} ({}):", title, catalog.len());
    for option in catalog {
        println!("  {}", option.name);
        println!("    {}", option.tooltip);
    }
    Ok(())
}

/// Fails wherever the panel would keep its apply button disabled.
fn derive_prompt(state: &AdjustmentState) -> Result<String> {
    let prompt = state.actionable_prompt()?;
    tracing::info!(mode = state.mode().name(), "Derived prompt");
    Ok(prompt)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Presets { json } => print_catalog("Presets", &PRESETS, json)?,
        Commands::Enhancements { json } => print_catalog("Enhancements", &ENHANCEMENTS, json)?,
        Commands::Preset { name } => {
            let preset = find_preset(&name)?;
            let mut state = AdjustmentState::new();
            state.select_preset(preset.prompt);
            println!("{}", derive_prompt(&state)?);
        }
        Commands::Slider {
            brightness,
            contrast,
        } => {
            let mut state = AdjustmentState::new();
            state.set_slider(SliderKind::Brightness, brightness);
            state.set_slider(SliderKind::Contrast, contrast);
            let prompt = derive_prompt(&state).context("Both sliders are at zero")?;
            println!("{}", prompt);
        }
        Commands::Custom { text } => {
            let mut state = AdjustmentState::new();
            state.set_custom(text);
            println!("{}", derive_prompt(&state)?);
        }
        Commands::Enhance { name } => {
            let enhancement = find_enhancement(&name)?;
            println!("{}", enhancement.prompt);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run(cli)
}
