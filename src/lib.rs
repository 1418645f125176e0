pub mod install;
pub mod scaffold;

// Re-export commonly used types
pub use install::{Installer, NpmInstaller};
pub use scaffold::{Scaffold, ScaffoldError};
