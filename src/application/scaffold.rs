//! Scaffold Use Case
//!
//! Orchestrates one run:
//! 1. Resolve the source path and derive names
//! 2. Extract the build guard from the parent Makefile
//! 3. Create the test directory (unless a previous run did)
//! 4. Render skeletons
//! 5. Register the test in the parent Makefile and Kconfig
//! 6. Write the test Makefile and test source
//!
//! There is no rollback: when a step fails, files written by earlier steps
//! stay as they are.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::inserter::{self, InsertOutcome};
use crate::domain::ports::{FileSystem, TemplateProvider};
use crate::domain::services::extract_guard;
use crate::domain::value_objects::{BuildGuard, DerivedNames, Layout};
use crate::error::{ScaffoldError, ScaffoldResult};

/// Options for the scaffold use case
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Source file under test, as given by the user
    pub source: PathBuf,
    /// File and directory naming
    pub layout: Layout,
    /// Add a `GCOV_PROFILE_<obj> := y` line for the source object
    pub gcov: bool,
}

impl ScaffoldOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            layout: Layout::default(),
            gcov: true,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_gcov(mut self, gcov: bool) -> Self {
        self.gcov = gcov;
        self
    }
}

/// Which file a step touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRole {
    ParentBuildFile,
    ParentConfigFile,
    TestBuildFile,
    TestSource,
}

/// One insert performed during the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub role: TargetRole,
    pub path: PathBuf,
    pub outcome: InsertOutcome,
}

/// Result of a scaffold run
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    /// Source path as given
    pub requested: PathBuf,
    pub names: DerivedNames,
    pub guard: BuildGuard,
    /// The test directory already existed (a previous run for this directory)
    pub additional: bool,
    pub steps: Vec<StepRecord>,
}

impl ScaffoldReport {
    /// Generated test source
    pub fn test_source(&self) -> &Path {
        &self.names.test_source
    }

    /// The test source path expressed relative to the path the user gave
    /// (relative input stays relative).
    pub fn display_test_source(&self) -> PathBuf {
        let base = self.requested.parent().unwrap_or_else(|| Path::new(""));
        match self.names.test_source.strip_prefix(&self.names.dir) {
            Ok(relative) => base.join(relative),
            Err(_) => self.names.test_source.clone(),
        }
    }

    /// `true` if any file was created or modified
    pub fn has_changes(&self) -> bool {
        self.steps.iter().any(|s| s.outcome.is_change())
    }
}

/// Rule adding the test subdirectory to the parent kbuild
pub fn subdir_rule(test_dir: &str) -> String {
    format!("\nobj-$(CONFIG_KUNIT)\t\t\t+= {test_dir}/\n")
}

/// Rule enabling gcov instrumentation for one object
pub fn gcov_rule(object: &str) -> String {
    format!("GCOV_PROFILE_{object}\t\t:=y\n")
}

/// Scaffold use case
pub struct ScaffoldUseCase<F, T>
where
    F: FileSystem,
    T: TemplateProvider,
{
    fs: F,
    templates: T,
}

impl<F, T> ScaffoldUseCase<F, T>
where
    F: FileSystem,
    T: TemplateProvider,
{
    pub fn new(fs: F, templates: T) -> Self {
        Self { fs, templates }
    }

    pub fn execute(&self, options: &ScaffoldOptions) -> ScaffoldResult<ScaffoldReport> {
        let layout = &options.layout;
        layout
            .validate()
            .map_err(|message| ScaffoldError::InvalidLayout { message })?;
        let source = std::path::absolute(&options.source)?;
        let names = DerivedNames::derive(&source, layout)?;
        if !self.fs.exists(&source) {
            return Err(ScaffoldError::missing(source));
        }

        // Read before creating anything so a missing Makefile leaves the tree untouched.
        let build_file = names.build_file(layout);
        let guard = extract_guard(&self.fs.read(&build_file)?, &names.source_object);
        debug!(object = %names.source_object, %guard, "build guard");

        let additional = self.fs.exists(&names.test_dir);
        if additional {
            info!(dir = %names.test_dir.display(), "test directory exists, adding to it");
        } else {
            self.fs.create_dir(&names.test_dir)?;
            info!(dir = %names.test_dir.display(), "created test directory");
        }

        let skeletons = self
            .templates
            .produce(&names.namespace, &names.test_object);
        let mut steps = Vec::with_capacity(6);
        let mut record = |role, path: PathBuf, outcome| {
            steps.push(StepRecord { role, path, outcome });
        };

        let outcome = inserter::append_if_absent(&self.fs, &build_file, &subdir_rule(&layout.test_dir))?;
        record(TargetRole::ParentBuildFile, build_file.clone(), outcome);
        if options.gcov {
            let outcome =
                inserter::append_if_absent(&self.fs, &build_file, &gcov_rule(&names.source_object))?;
            record(TargetRole::ParentBuildFile, build_file, outcome);
        }

        let config_file = names.config_file(layout);
        let declaration = format!("config {}", names.kconfig_name());
        let outcome = if inserter::contains(&self.fs, &config_file, &declaration)? {
            debug!(symbol = names.kconfig_name(), "symbol already declared");
            InsertOutcome::AlreadyPresent
        } else {
            let block = format!("\n{}\n", skeletons.config_block);
            inserter::append_if_absent(&self.fs, &config_file, &block)?
        };
        record(TargetRole::ParentConfigFile, config_file, outcome);

        let test_build_file = names.test_build_file(layout);
        for rule in [guard.build_rule(&names.test_object), skeletons.build_rule] {
            let outcome = inserter::write_or_append_if_absent(&self.fs, &test_build_file, &rule)?;
            record(TargetRole::TestBuildFile, test_build_file.clone(), outcome);
        }

        let outcome =
            inserter::write_or_append_if_absent(&self.fs, &names.test_source, &skeletons.source)?;
        record(TargetRole::TestSource, names.test_source.clone(), outcome);

        Ok(ScaffoldReport {
            requested: options.source.clone(),
            names,
            guard,
            additional,
            steps,
        })
    }
}
