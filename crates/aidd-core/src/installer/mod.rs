//! Installation planning and execution
//!
//! This module provides:
//! - A pure planner turning a selection bundle into ordered copy operations
//! - A sequential executor performing the copies and external commands

pub mod exec;
pub mod plan;

pub use exec::{install, InstallReport};
pub use plan::{build_plan, command_dest, InstallPlan, PlannedCopy, Section};
