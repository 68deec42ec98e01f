//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ScaffoldUseCase;
use crate::infrastructure::{KunitTemplates, LocalFs};

/// Type alias for the concrete ScaffoldUseCase with all dependencies
pub type ConcreteScaffoldUseCase = ScaffoldUseCase<LocalFs, KunitTemplates>;

/// Create a scaffold use case writing KUnit skeletons to the local disk
pub fn create_scaffold_use_case() -> ConcreteScaffoldUseCase {
    ScaffoldUseCase::new(LocalFs::new(), KunitTemplates::new())
}
