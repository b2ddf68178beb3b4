//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments with their own dataset file
//! - Executing CLI commands against that dataset

use anyhow::Result;
use assert_cmd::Command;
use assert_cmd::assert::Assert;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use helptrace_types::Dataset;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use helptrace_testing::TestWorld;
///
/// let world = TestWorld::with_sample_dataset().unwrap();
/// world.run(&["stats"]).success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    dataset_path: PathBuf,
}

impl TestWorld {
    /// Create an isolated environment seeded with the given dataset.
    pub fn new(dataset: &Dataset) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let dataset_path = temp_dir.path().join("dataset.json");
        std::fs::write(&dataset_path, serde_json::to_string_pretty(dataset)?)?;

        Ok(Self {
            temp_dir,
            dataset_path,
        })
    }

    /// Environment seeded with the shared sample dataset.
    pub fn with_sample_dataset() -> Result<Self> {
        Self::new(&fixtures::sample_dataset())
    }

    /// Path of the dataset file handed to the CLI.
    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    /// Root of the temporary environment (for export outputs etc).
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run the binary against this world's dataset and return the assertion.
    pub fn run(&self, args: &[&str]) -> Assert {
        Command::cargo_bin("helptrace")
            .expect("helptrace binary should be built")
            .arg("--data")
            .arg(&self.dataset_path)
            .env_remove("HELPTRACE_PATH")
            .args(args)
            .assert()
    }
}
