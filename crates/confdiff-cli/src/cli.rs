use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "confdiff",
    about = "Compares two configuration files and shows a difference",
    version,
)]
pub struct Cli {
    /// First configuration file (.json, .yaml, or .yml)
    pub path_a: PathBuf,

    /// Second configuration file (.json, .yaml, or .yml)
    pub path_b: PathBuf,

    /// Output format: stylish, plain, or json
    #[arg(short, long, default_value = "stylish")]
    pub format: String,
}
