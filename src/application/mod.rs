//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain naming or matching rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - Derive names, extract the guard, write and register the test
//!
//! ## Services
//!
//! - `inserter` - Idempotent append / write-or-append against a `FileSystem`

pub mod inserter;
pub mod scaffold;

pub use inserter::{append_if_absent, write_or_append_if_absent, InsertOutcome};
pub use scaffold::{
    ScaffoldOptions, ScaffoldReport, ScaffoldUseCase, StepRecord, TargetRole,
};
