//! Template Providers
//!
//! Concrete implementations of the TemplateProvider port.

mod kunit;

pub use kunit::KunitTemplates;
