//! Output Rendering
//!
//! Renders a scaffold report (or an error) as human text or JSON.

use std::io::{self, Write};

use crate::application::{InsertOutcome, ScaffoldReport};
use crate::error::ScaffoldError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            write: "->",
            skip: "[ ]",
        }
    }
}

/// Trait for rendering scaffold reports
pub trait ReportRenderer {
    fn render(&self, report: &ScaffoldReport, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for scaffold reports
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level; unchanged files are listed from `-v` up
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &ScaffoldReport, out: &mut dyn Write) -> io::Result<()> {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        for step in &report.steps {
            let icon = match step.outcome {
                InsertOutcome::Created | InsertOutcome::Appended => icons.write,
                InsertOutcome::AlreadyPresent if self.verbose > 0 => icons.skip,
                InsertOutcome::AlreadyPresent => continue,
            };
            writeln!(out, "  {} {} ({})", icon, step.path.display(), step.outcome)?;
        }

        if report.additional && !report.has_changes() {
            writeln!(out, "Already up-to-date: {}", report.names.test_dir.display())?;
        }
        writeln!(
            out,
            "Done! You can write test cases on the {}",
            report.display_test_source().display()
        )
    }
}

/// JSON renderer: one object per run
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &ScaffoldReport, out: &mut dyn Write) -> io::Result<()> {
        let value = serde_json::json!({
            "event": "complete",
            "command": "insert",
            "test_source": report.display_test_source(),
            "additional": report.additional,
            "changed": report.has_changes(),
            "guard": report.guard,
            "names": report.names,
            "steps": report.steps,
        });
        writeln!(out, "{value}")
    }
}

/// Renderer for the requested format
pub fn renderer(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Format a top-level error for stderr (text) or stdout (JSON)
pub fn format_error(err: &anyhow::Error, format: OutputFormat) -> String {
    let missing = matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::MissingRequiredFile { .. })
    );

    match format {
        OutputFormat::Json => serde_json::json!({
            "event": "error",
            "kind": if missing { "missing_file" } else { "error" },
            "message": format!("{err:#}"),
        })
        .to_string(),
        OutputFormat::Text => {
            let mut text = format!("error: {err:#}");
            if missing {
                text.push_str(
                    "\nhint: the source file's directory needs a Makefile and a Kconfig",
                );
            }
            text
        }
    }
}
