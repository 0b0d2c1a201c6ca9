use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfmix::cli::Cli;
use pdfmix::commands;
use pdfmix::output::Reporter;

fn main() {
    // Diagnostics go to stderr and stay silent unless RUST_LOG is set, so
    // the alternate-screen UI keeps stdout to itself.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let reporter = Reporter::default();

    if let Err(err) = commands::run(cli, &reporter) {
        if err.is_cancellation() {
            reporter.info(&err.to_string());
        } else {
            reporter.error(&err.to_string());
        }
        process::exit(err.exit_code());
    }
}
