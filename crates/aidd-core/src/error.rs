//! Fatal, user-facing error conditions
//!
//! Per-file skips and failing external commands are not errors: they are
//! logged and counted by the installer, which keeps going. Only the
//! conditions below terminate the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Unknown preset '{name}'. Available presets: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("Templates directory not found: {}", .0.display())]
    TemplatesRootMissing(PathBuf),

    #[error("{marker}/ already exists in {}. Use --force to overwrite.", .target.display())]
    AlreadyInitialized { marker: &'static str, target: PathBuf },
}
