//! The selection bundle consumed by the installer
//!
//! A bundle is built exactly once per invocation, from one of four mutually
//! exclusive sources (preset, everything, defaults, interactive wizard),
//! then handed to the installer and discarded.

use crate::catalog::{AddOn, AiTool, AnalysisCommand, Backend, DocModule, Frontend, ProjectType};
use crate::presets::Preset;
use std::path::PathBuf;

/// Everything the installer needs to know for one run
#[derive(Debug, Clone)]
pub struct SelectionBundle {
    pub target_dir: PathBuf,
    pub project_type: ProjectType,
    pub frontend: Frontend,
    pub backend: Backend,
    pub ai_tools: Vec<AiTool>,
    pub commands: Vec<AnalysisCommand>,
    pub docs: Vec<DocModule>,
    pub include_constitution: bool,
    pub include_skills_guide: bool,
    pub scaffold_project: bool,
    pub dx_tooling: bool,
    pub addons: Vec<AddOn>,
    pub force: bool,
}

impl SelectionBundle {
    /// Whether Claude Code is among the selected tools. Drives the
    /// skills phase and the slash-command destination branch.
    pub fn has_claude(&self) -> bool {
        self.ai_tools.contains(&AiTool::Claude)
    }

    /// Bundle from a named preset
    pub fn from_preset(preset: &Preset, target_dir: PathBuf, force: bool) -> Self {
        Self {
            target_dir,
            project_type: ProjectType::Personal,
            frontend: preset.frontend,
            backend: preset.backend,
            ai_tools: preset.ai_tools.to_vec(),
            commands: preset.commands.to_vec(),
            docs: preset.docs.to_vec(),
            include_constitution: preset.include_constitution,
            include_skills_guide: preset.include_skills_guide,
            scaffold_project: preset.scaffold_project,
            dx_tooling: preset.dx_tooling,
            addons: preset.addons.to_vec(),
            force,
        }
    }

    /// Bundle with every catalog entry selected (--all)
    pub fn everything(target_dir: PathBuf, force: bool) -> Self {
        Self {
            target_dir,
            project_type: ProjectType::Personal,
            frontend: Frontend::NextJs,
            backend: Backend::Supabase,
            ai_tools: AiTool::ALL.to_vec(),
            commands: AnalysisCommand::ALL.to_vec(),
            docs: DocModule::ALL.to_vec(),
            include_constitution: true,
            include_skills_guide: true,
            scaffold_project: true,
            dx_tooling: true,
            addons: AddOn::ALL.to_vec(),
            force,
        }
    }

    /// Non-interactive defaults (--yes)
    pub fn defaults(target_dir: PathBuf, force: bool) -> Self {
        Self {
            target_dir,
            project_type: ProjectType::Personal,
            frontend: Frontend::NextJs,
            backend: Backend::Supabase,
            ai_tools: vec![AiTool::Claude, AiTool::Cursor],
            commands: AnalysisCommand::ALL.to_vec(),
            docs: DocModule::ALL.to_vec(),
            include_constitution: true,
            include_skills_guide: false,
            scaffold_project: true,
            dx_tooling: true,
            addons: Vec::new(),
            force,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_selects_all_tools() {
        let bundle = SelectionBundle::everything(PathBuf::from("."), false);
        assert_eq!(bundle.ai_tools.len(), AiTool::ALL.len());
        assert_eq!(bundle.commands.len(), AnalysisCommand::ALL.len());
        assert_eq!(bundle.docs.len(), DocModule::ALL.len());
        assert!(bundle.include_constitution && bundle.include_skills_guide);
        assert!(bundle.has_claude());
    }

    #[test]
    fn test_defaults_are_claude_and_cursor() {
        let bundle = SelectionBundle::defaults(PathBuf::from("."), false);
        assert_eq!(bundle.ai_tools, vec![AiTool::Claude, AiTool::Cursor]);
        assert!(!bundle.include_skills_guide);
        assert!(bundle.addons.is_empty());
    }
}
