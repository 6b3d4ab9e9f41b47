use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but the diff.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = cli::Cli::parse();
    commands::run(cli)
}
