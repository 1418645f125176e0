//! Dependency installation for freshly scaffolded projects.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Runs the install step inside a new project directory.
///
/// The scaffolder only needs one implementation, but the seam keeps the
/// subprocess out of tests: integration tests substitute a stub and assert
/// on the directory it was handed.
pub trait Installer {
    fn install(&self, project_dir: &Path) -> Result<()>;
}

/// Blocking `npm install` with inherited stdio, so npm's own progress
/// output reaches the terminal directly.
///
/// `CI=1` is forced on top of the parent environment so npm never waits
/// on an interactive prompt. Everything else passes through untouched.
pub struct NpmInstaller;

impl Installer for NpmInstaller {
    fn install(&self, project_dir: &Path) -> Result<()> {
        let status = Command::new("npm")
            .arg("install")
            .current_dir(project_dir)
            .env("CI", "1")
            .status()
            .context("Failed to run npm install")?;

        if status.success() {
            Ok(())
        } else {
            anyhow::bail!("npm install exited with {}", status)
        }
    }
}
