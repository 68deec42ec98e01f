//! kunit-insert CLI
//!
//! Usage: kunit-insert -f <FILE>
//!
//! Creates `kunit_test/` next to FILE with a test skeleton and a kbuild
//! Makefile, then registers the test in the parent Makefile and Kconfig.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::warn;

use cli::Cli;
use kunit_insert::application::ScaffoldOptions;
use kunit_insert::config::{self, Config, ConfigWarning};
use kunit_insert::error::{ScaffoldError, ScaffoldResult};
use kunit_insert::logging;
use kunit_insert::presentation::{create_scaffold_use_case, format_error, renderer, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if let Err(e) = run(cli, format) {
        let message = format_error(&e, format);
        match format {
            OutputFormat::Json => println!("{message}"),
            OutputFormat::Text => eprintln!("{message}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, format: OutputFormat) -> Result<()> {
    logging::init(cli.verbose);

    let source_dir = cli
        .filepath
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let (config, warnings) = config::load_or_default(cli.config.as_deref(), source_dir)
        .context("failed to load configuration")?;
    for warning in &warnings {
        log_warning(warning);
    }

    let config = apply_cli_overrides(config, &cli)?;
    let options = ScaffoldOptions::new(&cli.filepath)
        .with_layout(config.layout)
        .with_gcov(config.coverage.gcov);

    let report = create_scaffold_use_case()
        .execute(&options)
        .with_context(|| format!("failed to scaffold tests for {}", cli.filepath.display()))?;

    let unicode = std::io::stdout().is_terminal()
        && !std::env::var("TERM").is_ok_and(|t| t.eq_ignore_ascii_case("dumb"));
    let mut stdout = std::io::stdout().lock();
    renderer(format, unicode, cli.verbose).render(&report, &mut stdout)?;
    Ok(())
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> ScaffoldResult<Config> {
    if let Some(suffix) = &cli.suffix {
        config.layout.test_suffix = suffix.clone();
    }
    if let Some(dir) = &cli.test_dir {
        config.layout.test_dir = dir.clone();
    }
    if cli.no_gcov {
        config.coverage.gcov = false;
    }
    config
        .layout
        .validate()
        .map_err(|message| ScaffoldError::InvalidConfig {
            file: PathBuf::from("command line"),
            message,
        })?;
    Ok(config)
}

fn log_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => {
            warn!(key = %warning.key, %location, "unknown config key, did you mean '{suggestion}'?")
        }
        None => warn!(key = %warning.key, %location, "unknown config key"),
    }
}
