//! Pure installation planner
//!
//! Turns a selection bundle into the ordered list of copy operations the
//! executor will perform. No filesystem access happens here, which keeps
//! the phase logic testable without fixtures.

use crate::catalog::{
    scaffold_command, AddOn, ScaffoldConfig, CLAUDE_SKILL_FILES, CONSTITUTION_FILE,
    DX_CONFIG_FILES, MARKER_DIR, SKILLS_GUIDE_FILES,
};
use crate::choices::SelectionBundle;

/// Phase a copy operation belongs to, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    AiTools,
    ClaudeSkills,
    Commands,
    Docs,
    Constitution,
    SkillsGuide,
    DxConfigs,
}

impl Section {
    pub fn title(&self, claude_selected: bool) -> &'static str {
        match self {
            Section::AiTools => "AI tools",
            Section::ClaudeSkills => "Claude skills",
            Section::Commands if claude_selected => "Claude commands (slash commands)",
            Section::Commands => "Commands (reference)",
            Section::Docs => "Documentation",
            Section::Constitution => "Constitution",
            Section::SkillsGuide => "Skills guide",
            Section::DxConfigs => "Quality configs",
        }
    }
}

/// One resolved copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub section: Section,
    pub src: String,
    pub dest: String,
}

impl PlannedCopy {
    fn new(section: Section, src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            section,
            src: src.into(),
            dest: dest.into(),
        }
    }
}

/// The full plan for one run
#[derive(Debug, Clone)]
pub struct InstallPlan {
    /// External scaffold command, when requested for the chosen stack
    pub scaffold: Option<ScaffoldConfig>,
    /// Copy operations for the template phases, in order
    pub copies: Vec<PlannedCopy>,
    /// Whether the DX tooling phase (runner, dev deps, hooks) runs
    pub dx_tooling: bool,
    /// Config files copied at the end of the DX tooling phase
    pub dx_configs: Vec<PlannedCopy>,
    /// Add-on install commands to run after everything else
    pub addons: Vec<AddOn>,
}

/// Destination for an analysis command file.
///
/// With Claude Code selected the commands become slash commands under
/// `.claude/`; without it they land under the marker directory as plain
/// reference documents.
pub fn command_dest(claude_selected: bool, source: &str) -> String {
    if claude_selected {
        format!(".claude/{source}")
    } else {
        format!("{MARKER_DIR}/{source}")
    }
}

/// Compute the ordered plan for a selection bundle
pub fn build_plan(bundle: &SelectionBundle) -> InstallPlan {
    let claude = bundle.has_claude();
    let mut copies = Vec::new();

    for tool in &bundle.ai_tools {
        for entry in tool.files() {
            copies.push(PlannedCopy::new(Section::AiTools, entry.src, entry.dest));
        }
    }

    if claude {
        for entry in CLAUDE_SKILL_FILES {
            copies.push(PlannedCopy::new(Section::ClaudeSkills, entry.src, entry.dest));
        }
    }

    for cmd in &bundle.commands {
        let src = cmd.source();
        let dest = command_dest(claude, &src);
        copies.push(PlannedCopy::new(Section::Commands, src, dest));
    }

    for doc in &bundle.docs {
        let src = doc.source();
        let dest = format!("{MARKER_DIR}/{src}");
        copies.push(PlannedCopy::new(Section::Docs, src, dest));
    }

    if bundle.include_constitution {
        copies.push(PlannedCopy::new(
            Section::Constitution,
            CONSTITUTION_FILE.src,
            CONSTITUTION_FILE.dest,
        ));
    }

    if bundle.include_skills_guide {
        for entry in SKILLS_GUIDE_FILES {
            copies.push(PlannedCopy::new(Section::SkillsGuide, entry.src, entry.dest));
        }
    }

    let dx_configs = if bundle.dx_tooling {
        DX_CONFIG_FILES
            .iter()
            .map(|entry| PlannedCopy::new(Section::DxConfigs, entry.src, entry.dest))
            .collect()
    } else {
        Vec::new()
    };

    InstallPlan {
        scaffold: bundle
            .scaffold_project
            .then(|| scaffold_command(bundle.frontend, bundle.backend)),
        copies,
        dx_tooling: bundle.dx_tooling,
        dx_configs,
        addons: bundle.addons.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AiTool, AnalysisCommand, Backend, DocModule, Frontend, ProjectType};
    use std::path::PathBuf;

    fn bundle(ai_tools: Vec<AiTool>) -> SelectionBundle {
        SelectionBundle {
            target_dir: PathBuf::from("."),
            project_type: ProjectType::Personal,
            frontend: Frontend::NextJs,
            backend: Backend::Supabase,
            ai_tools,
            commands: vec![AnalysisCommand::Dry, AnalysisCommand::Validate],
            docs: vec![
                DocModule::Principles,
                DocModule::Security,
                DocModule::Database,
            ],
            include_constitution: false,
            include_skills_guide: false,
            scaffold_project: false,
            dx_tooling: false,
            addons: Vec::new(),
            force: false,
        }
    }

    #[test]
    fn test_command_dest_branches() {
        assert_eq!(
            command_dest(true, "commands/dry.md"),
            ".claude/commands/dry.md"
        );
        assert_eq!(
            command_dest(false, "commands/dry.md"),
            ".aidd/commands/dry.md"
        );
    }

    #[test]
    fn test_plan_size_matches_selection() {
        // claude (1 file) + cursor (1 file) + 3 skills + 2 commands + 3 docs
        let plan = build_plan(&bundle(vec![AiTool::Claude, AiTool::Cursor]));
        assert_eq!(plan.copies.len(), 1 + 1 + 3 + 2 + 3);
        assert!(plan.scaffold.is_none());
        assert!(plan.dx_configs.is_empty());
        assert!(plan.addons.is_empty());
    }

    #[test]
    fn test_skills_only_with_claude() {
        let without = build_plan(&bundle(vec![AiTool::Cursor]));
        assert!(without
            .copies
            .iter()
            .all(|op| op.section != Section::ClaudeSkills));

        let with = build_plan(&bundle(vec![AiTool::Claude]));
        let skills: Vec<_> = with
            .copies
            .iter()
            .filter(|op| op.section == Section::ClaudeSkills)
            .collect();
        assert_eq!(skills.len(), CLAUDE_SKILL_FILES.len());
    }

    #[test]
    fn test_claude_selection_moves_every_command() {
        // Same command set, both branches of the destination rule
        let with = build_plan(&bundle(vec![AiTool::Claude]));
        for op in with.copies.iter().filter(|op| op.section == Section::Commands) {
            assert!(op.dest.starts_with(".claude/commands/"), "{}", op.dest);
        }

        let without = build_plan(&bundle(vec![AiTool::Cursor]));
        for op in without
            .copies
            .iter()
            .filter(|op| op.section == Section::Commands)
        {
            assert!(op.dest.starts_with(".aidd/commands/"), "{}", op.dest);
        }
    }

    #[test]
    fn test_docs_always_under_marker_dir() {
        let plan = build_plan(&bundle(vec![AiTool::Claude]));
        for op in plan.copies.iter().filter(|op| op.section == Section::Docs) {
            assert!(op.dest.starts_with(".aidd/docs/"), "{}", op.dest);
        }
    }

    #[test]
    fn test_conditional_entries_follow_flags() {
        let mut b = bundle(vec![AiTool::Claude]);
        b.include_constitution = true;
        b.include_skills_guide = true;
        let plan = build_plan(&b);

        let constitution = plan
            .copies
            .iter()
            .filter(|op| op.section == Section::Constitution)
            .count();
        let guide = plan
            .copies
            .iter()
            .filter(|op| op.section == Section::SkillsGuide)
            .count();
        assert_eq!(constitution, 1);
        assert_eq!(guide, SKILLS_GUIDE_FILES.len());
    }

    #[test]
    fn test_dx_and_scaffold_flags() {
        let mut b = bundle(vec![AiTool::Claude]);
        b.scaffold_project = true;
        b.dx_tooling = true;
        let plan = build_plan(&b);

        assert!(plan.scaffold.is_some());
        assert!(plan.dx_tooling);
        assert_eq!(plan.dx_configs.len(), DX_CONFIG_FILES.len());
        // DX config copies are not part of the template phases
        assert!(plan.copies.iter().all(|op| op.section != Section::DxConfigs));
    }

    #[test]
    fn test_section_titles_follow_claude_branch() {
        assert_eq!(
            Section::Commands.title(true),
            "Claude commands (slash commands)"
        );
        assert_eq!(Section::Commands.title(false), "Commands (reference)");
        assert_eq!(Section::DxConfigs.title(false), "Quality configs");
    }

    #[test]
    fn test_sections_come_out_in_phase_order() {
        let mut b = bundle(vec![AiTool::Claude]);
        b.include_constitution = true;
        b.include_skills_guide = true;
        let plan = build_plan(&b);

        let sections: Vec<Section> = plan.copies.iter().map(|op| op.section).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
    }
}
