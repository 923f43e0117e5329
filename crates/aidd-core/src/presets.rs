//! Named presets answering every scaffolding question at once

use crate::catalog::{AddOn, AiTool, AnalysisCommand, Backend, DocModule, Frontend};

/// A fully-populated selection, minus target directory and overwrite flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub label: &'static str,
    pub frontend: Frontend,
    pub backend: Backend,
    pub ai_tools: &'static [AiTool],
    pub commands: &'static [AnalysisCommand],
    pub docs: &'static [DocModule],
    pub include_constitution: bool,
    pub include_skills_guide: bool,
    pub scaffold_project: bool,
    pub dx_tooling: bool,
    pub addons: &'static [AddOn],
}

pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "fullstack-next",
        label: "Fullstack Next.js + Supabase",
        frontend: Frontend::NextJs,
        backend: Backend::Supabase,
        ai_tools: &[AiTool::Claude, AiTool::Cursor],
        commands: &AnalysisCommand::ALL,
        docs: &DocModule::ALL,
        include_constitution: true,
        include_skills_guide: false,
        scaffold_project: true,
        dx_tooling: true,
        addons: &[],
    },
    Preset {
        name: "fullstack-vite",
        label: "Fullstack Vite + Supabase",
        frontend: Frontend::Vite,
        backend: Backend::Supabase,
        ai_tools: &[AiTool::Claude, AiTool::Cursor],
        commands: &AnalysisCommand::ALL,
        docs: &DocModule::ALL,
        include_constitution: true,
        include_skills_guide: false,
        scaffold_project: true,
        dx_tooling: true,
        addons: &[],
    },
    Preset {
        name: "landing",
        label: "Astro landing page",
        frontend: Frontend::Astro,
        backend: Backend::None,
        ai_tools: &[AiTool::Claude],
        commands: &[
            AnalysisCommand::Kiss,
            AnalysisCommand::Yagni,
            AnalysisCommand::Validate,
        ],
        docs: &[
            DocModule::Principles,
            DocModule::CodeQuality,
            DocModule::TypescriptConventions,
            DocModule::CssDesignTokens,
            DocModule::Performance,
            DocModule::Accessibility,
            DocModule::GitWorkflow,
            DocModule::SharedConfigs,
        ],
        include_constitution: false,
        include_skills_guide: false,
        scaffold_project: true,
        dx_tooling: false,
        addons: &[],
    },
    Preset {
        name: "minimal",
        label: "Minimal: principles only",
        frontend: Frontend::NextJs,
        backend: Backend::None,
        ai_tools: &[AiTool::Claude],
        commands: &[AnalysisCommand::Validate],
        docs: &[
            DocModule::Principles,
            DocModule::CodeQuality,
            DocModule::TypescriptConventions,
            DocModule::SharedConfigs,
        ],
        include_constitution: false,
        include_skills_guide: false,
        scaffold_project: false,
        dx_tooling: false,
        addons: &[],
    },
    Preset {
        name: "all",
        label: "Everything included",
        frontend: Frontend::NextJs,
        backend: Backend::Supabase,
        ai_tools: &AiTool::ALL,
        commands: &AnalysisCommand::ALL,
        docs: &DocModule::ALL,
        include_constitution: true,
        include_skills_guide: true,
        scaffold_project: true,
        dx_tooling: true,
        addons: &AddOn::ALL,
    },
];

/// Look up a preset by name. Unknown names are a user-facing error at the
/// CLI boundary; there is no fallback to defaults.
pub fn resolve(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Valid preset names, for error messages and help text
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_preset() {
        let preset = resolve("minimal").unwrap();
        assert_eq!(preset.name, "minimal");
        assert_eq!(preset.frontend, Frontend::NextJs);
        assert_eq!(preset.backend, Backend::None);
        assert_eq!(preset.ai_tools, &[AiTool::Claude]);
        assert_eq!(preset.commands, &[AnalysisCommand::Validate]);
        assert!(!preset.scaffold_project);
        assert!(!preset.dx_tooling);
    }

    #[test]
    fn test_resolve_unknown_preset() {
        assert!(resolve("does-not-exist").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn test_names_lists_every_preset() {
        let all_names = names();
        assert_eq!(all_names.len(), PRESETS.len());
        for expected in ["fullstack-next", "fullstack-vite", "landing", "minimal", "all"] {
            assert!(all_names.contains(&expected));
        }
    }

    #[test]
    fn test_all_preset_includes_everything() {
        let preset = resolve("all").unwrap();
        assert_eq!(preset.ai_tools.len(), AiTool::ALL.len());
        assert_eq!(preset.docs.len(), DocModule::ALL.len());
        assert!(preset.include_constitution && preset.include_skills_guide);
    }
}
