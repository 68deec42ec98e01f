//! Presentation Layer
//!
//! - `factory` - Wires the scaffold use case to local infrastructure
//! - `output` - Text/JSON rendering of reports and errors

pub mod factory;
pub mod output;

pub use factory::create_scaffold_use_case;
pub use output::{format_error, renderer, OutputFormat, ReportRenderer};
