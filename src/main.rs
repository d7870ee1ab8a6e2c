#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::HostConfig;

/// Global host settings, set from command line
static HOST_CONFIG: OnceLock<HostConfig> = OnceLock::new();

/// Get the host settings (set from command line or default)
pub fn get_host_config() -> HostConfig {
    HOST_CONFIG.get().cloned().unwrap_or_default()
}

/// Retouch - AI photo editing panels
#[derive(Parser, Debug)]
#[command(name = "retouch-desktop")]
#[command(about = "Retouch - adjustment and enhancement panels for AI photo editing")]
struct Args {
    /// Simulated duration of an edit request, in milliseconds
    #[arg(short, long, default_value_t = 1500)]
    latency_ms: u64,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 720.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let host = HostConfig {
        request_latency: Duration::from_millis(args.latency_ms),
    };
    let _ = HOST_CONFIG.set(host.clone());

    tracing::info!(
        "Starting Retouch with simulated request latency {:?}",
        host.request_latency
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Retouch")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
