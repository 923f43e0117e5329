//! Installation executor
//!
//! Performs the planned filesystem side effects sequentially, in phase
//! order. Per-file problems are skip-and-warn; external commands are
//! best-effort; only the upfront guards abort the run. Nothing is rolled
//! back on partial failure.

use crate::catalog::{DX_PACKAGES, HOOK_FILES, MARKER_DIR};
use crate::choices::SelectionBundle;
use crate::error::InstallError;
use crate::installer::plan::{build_plan, PlannedCopy, Section};
use crate::runtime::{run_shell, PackageRunner};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What happened during one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    /// Files successfully copied
    pub copied: usize,
    /// Cataloged files missing from the template root
    pub skipped: usize,
    /// External commands that exited non-zero
    pub failed_commands: usize,
}

/// Run the whole installation for a selection bundle.
///
/// `templates_dir` is resolved by the caller; the executor reads nothing
/// from ambient process state besides the current directory used to
/// absolutize a relative target.
pub async fn install(bundle: &SelectionBundle, templates_dir: &Path) -> Result<InstallReport> {
    let target = absolutize(&bundle.target_dir)?;
    let claude = bundle.has_claude();

    println!();
    println!("{}", "Installing AIDD setup".bold());
    println!("{}", format!("Destination: {}", target.display()).dimmed());
    println!();

    // Guards run before any side effect
    if !templates_dir.exists() {
        return Err(InstallError::TemplatesRootMissing(templates_dir.to_path_buf()).into());
    }
    if !bundle.force && target.join(MARKER_DIR).exists() {
        return Err(InstallError::AlreadyInitialized {
            marker: MARKER_DIR,
            target,
        }
        .into());
    }

    let plan = build_plan(bundle);
    let mut report = InstallReport::default();

    // Phase 1: external scaffold command, best-effort
    if let Some(scaffold) = &plan.scaffold {
        println!("{}", format!("Scaffolding: {}", scaffold.label).cyan());
        let command = format!("{} \"{}\"", scaffold.command, target.display());
        run_best_effort(&command, &std::env::current_dir()?, &mut report).await;
    }

    // Phases 2 to 6: template copies
    let mut current_section = None;
    for op in &plan.copies {
        if current_section != Some(op.section) {
            println!("{}", op.section.title(claude).cyan());
            current_section = Some(op.section);
        }
        copy_one(templates_dir, &target, op, &mut report).await?;
    }

    // Phase 7: DX tooling
    if plan.dx_tooling {
        install_dx_tooling(&target, &plan.dx_configs, templates_dir, &mut report).await?;
    }

    // Phase 8: add-on installers, best-effort
    for addon in &plan.addons {
        println!("{}", format!("Add-on: {}", addon).cyan());
        run_best_effort(addon.install_command(), &target, &mut report).await;
    }

    print_summary(bundle, &report);

    Ok(report)
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(cwd.join(dir))
    }
}

/// Copy one planned file. Missing sources are logged and counted, never
/// fatal; destination parents are created idempotently.
async fn copy_one(
    templates_dir: &Path,
    target: &Path,
    op: &PlannedCopy,
    report: &mut InstallReport,
) -> Result<()> {
    let src_path = templates_dir.join(&op.src);
    if !src_path.exists() {
        println!("{}", format!("  ! skipped (missing): {}", op.src).yellow());
        report.skipped += 1;
        return Ok(());
    }

    let dest_path = target.join(&op.dest);
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::copy(&src_path, &dest_path)
        .await
        .with_context(|| format!("Failed to copy to: {}", dest_path.display()))?;

    println!("{}", format!("  + {}", op.dest).green());
    report.copied += 1;
    Ok(())
}

async fn run_best_effort(command: &str, cwd: &Path, report: &mut InstallReport) {
    match run_shell(command, cwd).await {
        Ok(true) => {}
        Ok(false) => {
            println!("{}", format!("  ! command failed: {command}").yellow());
            report.failed_commands += 1;
        }
        Err(e) => {
            println!("{}", format!("  ! {e:#}").yellow());
            report.failed_commands += 1;
        }
    }
}

/// Dev-tooling phase: dev dependencies, git hooks manager, hook scripts,
/// shared config files.
async fn install_dx_tooling(
    target: &Path,
    dx_configs: &[PlannedCopy],
    templates_dir: &Path,
    report: &mut InstallReport,
) -> Result<()> {
    println!("{}", "DX tooling".cyan());

    let runner = PackageRunner::detect();
    println!("{}", format!("  using {}", runner.name).dimmed());

    run_best_effort(&runner.install_dev_command(&DX_PACKAGES), target, report).await;
    run_best_effort(&runner.exec_command("husky init"), target, report).await;

    let hooks_dir = target.join(".husky");
    fs::create_dir_all(&hooks_dir)
        .await
        .context("Failed to create hooks directory")?;
    for (name, contents) in HOOK_FILES {
        let hook_path = hooks_dir.join(name);
        fs::write(&hook_path, contents)
            .await
            .with_context(|| format!("Failed to write hook: {}", hook_path.display()))?;
        set_executable(&hook_path).await?;
        println!("{}", format!("  + .husky/{name}").green());
    }

    if !dx_configs.is_empty() {
        println!("{}", Section::DxConfigs.title(false).cyan());
    }
    for op in dx_configs {
        copy_one(templates_dir, target, op, report).await?;
    }

    Ok(())
}

#[cfg(unix)]
async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .with_context(|| format!("Failed to set permissions: {}", path.display()))
}

#[cfg(not(unix))]
async fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

fn print_summary(bundle: &SelectionBundle, report: &InstallReport) {
    println!();
    println!(
        "{}",
        format!("Done! {} files copied.", report.copied).green().bold()
    );
    if report.skipped > 0 {
        println!(
            "{}",
            format!("{} template file(s) missing, skipped.", report.skipped).yellow()
        );
    }
    if report.failed_commands > 0 {
        println!(
            "{}",
            format!("{} external command(s) failed.", report.failed_commands).yellow()
        );
    }

    println!();
    println!("{}", "Next steps".bold());
    println!(
        "  1. {} {}/docs/principles.md",
        "Read".dimmed(),
        MARKER_DIR
    );

    let tools: Vec<&str> = bundle.ai_tools.iter().map(|t| t.display_name()).collect();
    if !tools.is_empty() {
        println!("  2. {} {}", "Configured tools:".dimmed(), tools.join(", "));
    }

    if bundle.has_claude() {
        let slashes: Vec<String> = bundle
            .commands
            .iter()
            .map(|c| format!("/{}", c.slug()))
            .collect();
        println!(
            "  3. {} {}",
            "Claude slash commands:".dimmed(),
            slashes.join(", ")
        );
    } else if !bundle.commands.is_empty() {
        println!(
            "  3. {} {}/commands/",
            "Command references in".dimmed(),
            MARKER_DIR
        );
    }
    println!();
}
