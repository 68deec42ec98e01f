//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod template_provider;

pub use file_system::FileSystem;
pub use template_provider::{Skeletons, TemplateProvider};
