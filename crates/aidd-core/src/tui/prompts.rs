//! Sequential question wizard building a selection bundle
//!
//! Each question may depend on earlier answers: the scaffold confirm shows
//! the command for the chosen stack, the command hint depends on whether
//! Claude Code is selected, and the doc multiselect pre-checks the modules
//! suggested for the stack. Cancelling any prompt ends the process with
//! exit code 0; a cancelled prompt is never retried.

use crate::catalog::{
    scaffold_command, suggested_docs, AddOn, AiTool, AnalysisCommand, Backend, DocModule, Frontend,
    ProjectType, MARKER_DIR,
};
use crate::choices::SelectionBundle;
use anyhow::Result;
use std::path::PathBuf;

/// Unwrap a prompt result, treating cancellation as a normal exit
fn prompt<T>(res: std::io::Result<T>) -> Result<T> {
    match res {
        Ok(value) => Ok(value),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            let _ = cliclack::outro_cancel("Setup cancelled.");
            std::process::exit(0);
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the interactive wizard and return the resulting bundle
pub fn run_wizard(target_dir: PathBuf, force: bool) -> Result<SelectionBundle> {
    cliclack::intro("create-aidd: AI-driven development setup")?;

    // 1. Project type
    let project_type: ProjectType = prompt(
        cliclack::select("Project type?")
            .item(ProjectType::Personal, "Personal project", "standard setup")
            .item(
                ProjectType::Client,
                "Client project",
                "strict rules: observability, logs, PR checklist",
            )
            .interact(),
    )?;

    // 2. Frontend stack
    let mut frontend_select = cliclack::select("Frontend stack?");
    for frontend in Frontend::ALL {
        let hint = if frontend == Frontend::NextJs {
            "recommended"
        } else {
            ""
        };
        frontend_select = frontend_select.item(frontend, frontend.display_name(), hint);
    }
    let frontend: Frontend = prompt(frontend_select.interact())?;

    // 3. Backend
    let mut backend_select = cliclack::select("Backend?");
    for backend in Backend::ALL {
        let hint = if backend == Backend::Supabase {
            "recommended"
        } else {
            ""
        };
        backend_select = backend_select.item(backend, backend.display_name(), hint);
    }
    let backend: Backend = prompt(backend_select.interact())?;

    // 4. Scaffold the project with the stack's generator
    let scaffold = scaffold_command(frontend, backend);
    let scaffold_project: bool = prompt(
        cliclack::confirm(format!("Scaffold the project with {}?", scaffold.command))
            .initial_value(true)
            .interact(),
    )?;

    // 5. AI tools (at least one)
    let mut tool_select = cliclack::multiselect("AI tools to configure?");
    for tool in AiTool::ALL {
        let hint = if tool == AiTool::Claude {
            "recommended"
        } else {
            ""
        };
        tool_select = tool_select.item(tool, tool.display_name(), hint);
    }
    let ai_tools: Vec<AiTool> = prompt(
        tool_select
            .initial_values(vec![AiTool::Claude])
            .required(true)
            .interact(),
    )?;
    let claude = ai_tools.contains(&AiTool::Claude);

    // 6. Analysis commands
    let command_hint = if claude {
        "installed as Claude slash commands (/dry, /kiss...)"
    } else {
        "installed as references under .aidd/commands/"
    };
    let all_commands: bool = prompt(
        cliclack::confirm(format!(
            "Install all analysis commands? ({command_hint})"
        ))
        .initial_value(true)
        .interact(),
    )?;
    let commands = if all_commands {
        AnalysisCommand::ALL.to_vec()
    } else {
        let mut command_select = cliclack::multiselect("Which commands?");
        for cmd in AnalysisCommand::ALL {
            command_select = command_select.item(cmd, cmd.display_name(), "");
        }
        prompt(command_select.required(true).interact())?
    };

    // 7. Documentation modules, with stack-based suggestions pre-checked
    let suggested = suggested_docs(frontend, backend);
    let all_docs: bool = prompt(
        cliclack::confirm("Install all documentation modules?")
            .initial_value(true)
            .interact(),
    )?;
    let docs = if all_docs {
        DocModule::ALL.to_vec()
    } else {
        let mut doc_select = cliclack::multiselect("Which documentation modules?");
        for doc in DocModule::ALL {
            let hint = if suggested.contains(&doc) {
                "suggested for your stack"
            } else {
                ""
            };
            doc_select = doc_select.item(doc, doc.display_name(), hint);
        }
        prompt(
            doc_select
                .initial_values(suggested)
                .required(true)
                .interact(),
        )?
    };

    // 8. Constitution
    let include_constitution: bool = prompt(
        cliclack::confirm("Include the Clean Code Constitution? (large, exhaustive reference)")
            .initial_value(true)
            .interact(),
    )?;

    // 9. Skills authoring guide, only relevant with Claude Code
    let include_skills_guide = if claude {
        prompt(
            cliclack::confirm("Include the Claude skill authoring guide?")
                .initial_value(false)
                .interact(),
        )?
    } else {
        false
    };

    // 10. DX tooling
    let dx_tooling: bool = prompt(
        cliclack::confirm(
            "Install DX tooling? (Husky, lint-staged, Prettier, ESLint, Commitlint, Vitest)",
        )
        .initial_value(true)
        .interact(),
    )?;

    // 11. Optional add-ons
    let mut addon_select = cliclack::multiselect("Add-ons to install?");
    for addon in AddOn::ALL {
        addon_select = addon_select.item(addon, addon.display_name(), "");
    }
    let addons: Vec<AddOn> = prompt(addon_select.required(false).interact())?;

    cliclack::outro(format!(
        "Configuration complete. Installing into {MARKER_DIR}/ and tool locations..."
    ))?;

    Ok(SelectionBundle {
        target_dir,
        project_type,
        frontend,
        backend,
        ai_tools,
        commands,
        docs,
        include_constitution,
        include_skills_guide,
        scaffold_project,
        dx_tooling,
        addons,
        force,
    })
}
