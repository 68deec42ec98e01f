//! Domain Services
//!
//! Stateless text functions used by the scaffold use case.

pub mod containment;
pub mod guard_extractor;

pub use containment::{is_contained, normalize_whitespace};
pub use guard_extractor::extract_guard;
