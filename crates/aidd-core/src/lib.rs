//! AIDD Core - library behind the `create-aidd` scaffolding CLI
//!
//! This library turns a set of user selections (frontend stack, backend,
//! AI-assistant tooling, analysis commands, documentation modules) into
//! filesystem side effects: template files copied to tool-imposed
//! locations plus a few external command invocations.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Catalog** - static registries mapping every selection enum to its
//!   template files, labels and commands (pure data)
//! - **Planner** - pure function from a selection bundle to an ordered
//!   install plan
//! - **Executor** - sequential runner performing copies and shell-outs
//! - **TUI** - optional cliclack-based wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based wizard module

pub mod catalog;
pub mod choices;
pub mod error;
pub mod installer;
pub mod presets;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use choices::SelectionBundle;
pub use error::InstallError;
pub use installer::{install, InstallReport};
pub use presets::{resolve as resolve_preset, Preset};

#[cfg(feature = "tui")]
pub use tui::run_wizard;
