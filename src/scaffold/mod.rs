//! Project scaffolding: directory creation, file emission, dependency install.
//!
//! The whole operation is strictly sequential. Each step depends on the
//! filesystem state left by the previous one, so nothing is parallelized
//! and nothing is retried. There is no rollback either: a failure halfway
//! leaves whatever was already written on disk.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::install::Installer;

mod error;
pub mod templates;

pub use error::ScaffoldError;

/// Fallback project name when the caller does not provide one.
pub const DEFAULT_NAME: &str = "my-app";

/// One scaffold invocation: a project name and its resolved root.
///
/// The base directory is passed in explicitly so tests can point the
/// scaffolder at a temp dir; only the CLI reads the ambient working
/// directory.
pub struct Scaffold {
    name: String,
    root: PathBuf,
}

impl Scaffold {
    pub fn new(base_dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let root = base_dir.as_ref().join(&name);
        Self { name, root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the project directory, write the full file manifest, then
    /// run the installer inside the new root.
    ///
    /// Fails with [`ScaffoldError::AlreadyExists`] before touching anything
    /// if the target directory is present. Running twice with the same name
    /// therefore always fails the second time.
    pub fn create_project(&self, installer: &dyn Installer) -> Result<(), ScaffoldError> {
        if self.root.exists() {
            return Err(ScaffoldError::AlreadyExists {
                name: self.name.clone(),
            });
        }

        println!("🎨 Scaffolding project: {}", self.name);

        fs::create_dir_all(&self.root).map_err(|source| ScaffoldError::WriteFailed {
            path: self.root.clone(),
            source,
        })?;

        for file in templates::manifest(&self.name) {
            self.write_file(&file)?;
        }

        println!("\n➡️  npm install");
        installer
            .install(&self.root)
            .map_err(|err| ScaffoldError::InstallFailed {
                reason: format!("{:#}", err),
            })?;

        println!(
            "\n{} Project generated at: {}",
            "✅".green(),
            self.root.display()
        );
        println!("\nNext steps:");
        println!("  1. cd {}", self.name);
        println!("  2. npm run dev");

        Ok(())
    }

    fn write_file(&self, file: &templates::ProjectFile) -> Result<(), ScaffoldError> {
        let dest = self.root.join(file.path);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&dest, &file.contents).map_err(|source| ScaffoldError::WriteFailed {
            path: dest.clone(),
            source,
        })?;

        println!("  📝 {}", file.path);

        Ok(())
    }
}
