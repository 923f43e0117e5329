//! create-aidd - scaffold a project with AI-driven development practices

use aidd_core::{presets, InstallError, SelectionBundle};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-aidd")]
#[command(about = "Scaffold a project with AI-driven development practices")]
#[command(version)]
pub struct Args {
    /// Target directory
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Use a preset (fullstack-next, fullstack-vite, landing, minimal, all)
    #[arg(long)]
    pub preset: Option<String>,

    /// Include everything without questions
    #[arg(long)]
    pub all: bool,

    /// Overwrite an existing setup
    #[arg(long)]
    pub force: bool,

    /// Non-interactive mode (accept defaults)
    #[arg(short, long)]
    pub yes: bool,

    /// Local directory to use for templates instead of the bundled ones
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

/// Template root: explicit flag, then env override, then the `templates/`
/// directory shipped next to the executable.
fn resolve_templates_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var("AIDD_TEMPLATES_DIR") {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let templates_dir = resolve_templates_dir(args.template_dir);

    // Acquisition modes are mutually exclusive: preset > all > yes > wizard
    let bundle = if let Some(name) = &args.preset {
        let preset = presets::resolve(name).ok_or_else(|| InstallError::UnknownPreset {
            name: name.clone(),
            available: presets::names().join(", "),
        })?;
        println!("{}", format!("Using preset: {}", preset.label).bold());
        SelectionBundle::from_preset(preset, args.directory, args.force)
    } else if args.all {
        println!("{}", "Full installation: everything included".bold());
        SelectionBundle::everything(args.directory, args.force)
    } else if args.yes {
        println!("{}", "Non-interactive mode: using defaults".bold());
        SelectionBundle::defaults(args.directory, args.force)
    } else {
        aidd_core::run_wizard(args.directory, args.force)?
    };

    let result = aidd_core::install(&bundle, &templates_dir).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result.map(|_| ())
}
