use std::path::PathBuf;

use clap::Parser;

/// kunit-insert - scaffold a KUnit test for a kernel source file
#[derive(Parser, Debug)]
#[command(name = "kunit-insert")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The source file's directory must contain a Makefile and a Kconfig.")]
pub struct Cli {
    /// Source file to write tests for
    #[arg(short, long, value_name = "FILE")]
    pub filepath: PathBuf,

    /// Config file (defaults to .kunit-insert.toml next to the source file)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suffix appended to the source stem to name the test
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Name of the test subdirectory
    #[arg(long, value_name = "DIR")]
    pub test_dir: Option<String>,

    /// Do not add a GCOV_PROFILE line for the source object
    #[arg(long)]
    pub no_gcov: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
