//! Domain Layer
//!
//! Pure naming and text logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Layout, DerivedNames, BuildGuard)
//! - `services/` - Text services (guard extraction, containment)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, TemplateProvider)

pub mod ports;
pub mod services;
pub mod value_objects;
