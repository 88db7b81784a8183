//! `wfctl` entry point.
//!
//! This binary is the composition root:
//!
//! 1. **Parse configuration** from flags and `WEBFACTION_*` variables.
//! 2. **Wire logging**: a `tracing-subscriber` registry with an `EnvFilter`
//!    and either a text or a JSON layer, both on stderr so stdout carries
//!    only command output.
//! 3. **Construct infrastructure**: an `XmlRpcTransport`, handed to
//!    `webfaction::Client::login`.
//! 4. **Run one command** and print its result as pretty JSON.
//!
//! Any failure is printed to stderr and the process exits with status 1.

mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Args, LogFormat};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match commands::execute(&args).and_then(|value| Ok(serde_json::to_string_pretty(&value)?)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let (text, json) = match args.log_format {
        LogFormat::Text => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}
