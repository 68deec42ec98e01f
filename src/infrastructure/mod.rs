//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory for tests)
//! - `templates/` - Template providers (KUnit)

pub mod fs;
pub mod templates;

// Re-export for convenience
pub use fs::LocalFs;
pub use templates::KunitTemplates;
