use tracing::debug;

use crate::cli::Cli;

/// Run the comparison and print the rendered diff to stdout, followed by a
/// newline regardless of format. Plain output arrives line-terminated, so
/// it prints with a trailing blank line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    debug!(
        path_a = %cli.path_a.display(),
        path_b = %cli.path_b.display(),
        format = %cli.format,
        "comparing configuration files"
    );
    let diff = confdiff_sdk::generate_diff(&cli.path_a, &cli.path_b, &cli.format)?;
    println!("{diff}");
    Ok(())
}
