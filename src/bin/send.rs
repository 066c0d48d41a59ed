//! Relay sender executable.
//!
//! The packaging pipeline drops this binary beside the main application and
//! registers it as the handler for the custom URL scheme. The OS then
//! launches it with the URL as the only argument; it relays the URL to the
//! running instance and exits.
//!
//! Release builds on Windows use the graphical subsystem so no console
//! window flashes during the handler invocation; debug builds keep the
//! console and emit diagnostics.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    // release builds install no subscriber and stay silent
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lur=debug")),
        )
        .init();

    lur::run(env::args().skip(1))
}
