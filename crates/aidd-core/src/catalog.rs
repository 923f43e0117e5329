//! Static registries mapping selections to template files and shell commands
//!
//! Every table here is keyed by a closed enum, so lookups are total by
//! construction: there is no "unknown key" path at runtime. Destination
//! paths are fixed per key and never derived from user input.

use std::fmt;

/// Marker directory written into the target project root
pub const MARKER_DIR: &str = ".aidd";

/// A single (source, destination) copy operation.
/// `src` is relative to the template root, `dest` to the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyEntry {
    pub src: &'static str,
    pub dest: &'static str,
}

/// Kind of project being set up (drives how strict the suggested rules are)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Personal,
    Client,
}

/// Supported frontend stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frontend {
    NextJs,
    Vite,
    Astro,
}

impl Frontend {
    pub const ALL: [Frontend; 3] = [Frontend::NextJs, Frontend::Vite, Frontend::Astro];

    pub fn display_name(&self) -> &'static str {
        match self {
            Frontend::NextJs => "Next.js (App Router)",
            Frontend::Vite => "Vite (React)",
            Frontend::Astro => "Astro (landing / SEO)",
        }
    }

    /// Documentation modules worth suggesting for this stack
    pub fn suggested_docs(&self) -> &'static [DocModule] {
        match self {
            Frontend::NextJs | Frontend::Vite => &[
                DocModule::ReactPatterns,
                DocModule::StateManagement,
                DocModule::CssDesignTokens,
                DocModule::Performance,
            ],
            Frontend::Astro => &[DocModule::CssDesignTokens, DocModule::Performance],
        }
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Supabase,
    Convex,
    Sqlite,
    None,
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::Supabase,
        Backend::Convex,
        Backend::Sqlite,
        Backend::None,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::Supabase => "Supabase",
            Backend::Convex => "Convex",
            Backend::Sqlite => "SQLite",
            Backend::None => "None / Other",
        }
    }

    pub fn suggested_docs(&self) -> &'static [DocModule] {
        match self {
            Backend::Supabase => &[
                DocModule::Security,
                DocModule::Database,
                DocModule::ApiPatterns,
                DocModule::ApiContracts,
                DocModule::ErrorHandling,
            ],
            Backend::Convex => &[
                DocModule::ApiPatterns,
                DocModule::ApiContracts,
                DocModule::ErrorHandling,
            ],
            Backend::Sqlite => &[
                DocModule::Database,
                DocModule::ApiPatterns,
                DocModule::ApiContracts,
                DocModule::ErrorHandling,
            ],
            Backend::None => &[],
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// AI coding assistants with a tool-imposed config file location
///
/// - Claude Code  : CLAUDE.md (root) + .claude/skills/ + .claude/commands/
/// - Cursor       : .cursor/rules/*.mdc
/// - Copilot      : .github/copilot-instructions.md
/// - Codex        : AGENTS.md (root)
/// - Kilo Code    : .kilocode/rules.md
/// - Windsurf     : .windsurfrules (root)
/// - Aider        : .aider.conf.yml (root)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiTool {
    Claude,
    Cursor,
    Copilot,
    Codex,
    KiloCode,
    Windsurf,
    Aider,
}

impl AiTool {
    pub const ALL: [AiTool; 7] = [
        AiTool::Claude,
        AiTool::Cursor,
        AiTool::Copilot,
        AiTool::Codex,
        AiTool::KiloCode,
        AiTool::Windsurf,
        AiTool::Aider,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AiTool::Claude => "Claude Code",
            AiTool::Cursor => "Cursor",
            AiTool::Copilot => "GitHub Copilot",
            AiTool::Codex => "Codex (OpenAI)",
            AiTool::KiloCode => "Kilo Code",
            AiTool::Windsurf => "Windsurf (Codeium)",
            AiTool::Aider => "Aider",
        }
    }

    /// Instruction files this tool expects, at their imposed locations
    pub fn files(&self) -> &'static [CopyEntry] {
        match self {
            AiTool::Claude => &[CopyEntry {
                src: "ai/CLAUDE.md",
                dest: "CLAUDE.md",
            }],
            AiTool::Cursor => &[CopyEntry {
                src: "ai/cursor/rules/project.mdc",
                dest: ".cursor/rules/project.mdc",
            }],
            AiTool::Copilot => &[CopyEntry {
                src: "ai/copilot/copilot-instructions.md",
                dest: ".github/copilot-instructions.md",
            }],
            AiTool::Codex => &[CopyEntry {
                src: "ai/AGENTS.md",
                dest: "AGENTS.md",
            }],
            AiTool::KiloCode => &[CopyEntry {
                src: "ai/kilocode/rules.md",
                dest: ".kilocode/rules.md",
            }],
            AiTool::Windsurf => &[CopyEntry {
                src: "ai/windsurfrules",
                dest: ".windsurfrules",
            }],
            AiTool::Aider => &[CopyEntry {
                src: "ai/aider.conf.yml",
                dest: ".aider.conf.yml",
            }],
        }
    }
}

impl fmt::Display for AiTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Skill files copied only when Claude Code is selected
pub const CLAUDE_SKILL_FILES: [CopyEntry; 3] = [
    CopyEntry {
        src: "skills/aidd-frontend/SKILL.md",
        dest: ".claude/skills/aidd-frontend/SKILL.md",
    },
    CopyEntry {
        src: "skills/aidd-backend/SKILL.md",
        dest: ".claude/skills/aidd-backend/SKILL.md",
    },
    CopyEntry {
        src: "skills/aidd-review/SKILL.md",
        dest: ".claude/skills/aidd-review/SKILL.md",
    },
];

/// Analysis commands shipped as slash commands (Claude) or reference docs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisCommand {
    Dry,
    Kiss,
    Solid,
    Yagni,
    SecurityAudit,
    CodeReport,
    DeepDive,
    Validate,
}

impl AnalysisCommand {
    pub const ALL: [AnalysisCommand; 8] = [
        AnalysisCommand::Dry,
        AnalysisCommand::Kiss,
        AnalysisCommand::Solid,
        AnalysisCommand::Yagni,
        AnalysisCommand::SecurityAudit,
        AnalysisCommand::CodeReport,
        AnalysisCommand::DeepDive,
        AnalysisCommand::Validate,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisCommand::Dry => "DRY: detect duplicated code",
            AnalysisCommand::Kiss => "KISS: simplify the code",
            AnalysisCommand::Solid => "SOLID: apply SOLID principles",
            AnalysisCommand::Yagni => "YAGNI: remove speculative code",
            AnalysisCommand::SecurityAudit => "Security audit: scan for issues",
            AnalysisCommand::CodeReport => "Code report: whole-project analysis",
            AnalysisCommand::DeepDive => "Deep dive: macro-level debugging",
            AnalysisCommand::Validate => "Validate: final checklist",
        }
    }

    /// Slash-command name (how the command is invoked from Claude)
    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisCommand::Dry => "dry",
            AnalysisCommand::Kiss => "kiss",
            AnalysisCommand::Solid => "solid",
            AnalysisCommand::Yagni => "yagni",
            AnalysisCommand::SecurityAudit => "security-audit",
            AnalysisCommand::CodeReport => "code-report",
            AnalysisCommand::DeepDive => "deep-dive",
            AnalysisCommand::Validate => "validate",
        }
    }

    /// Source file relative to the template root
    pub fn source(&self) -> String {
        format!("commands/{}.md", self.slug())
    }
}

impl fmt::Display for AnalysisCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Documentation modules installed under the marker directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocModule {
    Principles,
    CodeQuality,
    TestingStrategy,
    GitWorkflow,
    Performance,
    Accessibility,
    Observability,
    AntiPatterns,
    ReactPatterns,
    StateManagement,
    TypescriptConventions,
    CssDesignTokens,
    Security,
    Database,
    ApiPatterns,
    ApiContracts,
    ErrorHandling,
    SharedConfigs,
}

impl DocModule {
    pub const ALL: [DocModule; 18] = [
        DocModule::Principles,
        DocModule::CodeQuality,
        DocModule::TestingStrategy,
        DocModule::GitWorkflow,
        DocModule::Performance,
        DocModule::Accessibility,
        DocModule::Observability,
        DocModule::AntiPatterns,
        DocModule::ReactPatterns,
        DocModule::StateManagement,
        DocModule::TypescriptConventions,
        DocModule::CssDesignTokens,
        DocModule::Security,
        DocModule::Database,
        DocModule::ApiPatterns,
        DocModule::ApiContracts,
        DocModule::ErrorHandling,
        DocModule::SharedConfigs,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DocModule::Principles => "Core principles",
            DocModule::CodeQuality => "Code quality & linting",
            DocModule::TestingStrategy => "Testing strategy",
            DocModule::GitWorkflow => "Git workflow",
            DocModule::Performance => "Performance",
            DocModule::Accessibility => "Accessibility",
            DocModule::Observability => "Observability & logs",
            DocModule::AntiPatterns => "Anti-patterns checklist",
            DocModule::ReactPatterns => "React & Next.js patterns",
            DocModule::StateManagement => "State management",
            DocModule::TypescriptConventions => "TypeScript conventions",
            DocModule::CssDesignTokens => "CSS & design tokens",
            DocModule::Security => "Security",
            DocModule::Database => "Database",
            DocModule::ApiPatterns => "API & backend patterns",
            DocModule::ApiContracts => "API contracts",
            DocModule::ErrorHandling => "Error handling",
            DocModule::SharedConfigs => "Shared quality configs",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DocModule::Principles => "principles",
            DocModule::CodeQuality => "code-quality",
            DocModule::TestingStrategy => "testing-strategy",
            DocModule::GitWorkflow => "git-workflow",
            DocModule::Performance => "performance",
            DocModule::Accessibility => "accessibility",
            DocModule::Observability => "observability",
            DocModule::AntiPatterns => "anti-patterns-checklist",
            DocModule::ReactPatterns => "react-nextjs-patterns",
            DocModule::StateManagement => "state-management",
            DocModule::TypescriptConventions => "typescript-conventions",
            DocModule::CssDesignTokens => "css-design-tokens",
            DocModule::Security => "security",
            DocModule::Database => "database",
            DocModule::ApiPatterns => "api-backend-patterns",
            DocModule::ApiContracts => "api-contracts",
            DocModule::ErrorHandling => "error-handling",
            DocModule::SharedConfigs => "shared-configs",
        }
    }

    /// Source file relative to the template root
    pub fn source(&self) -> String {
        format!("docs/{}.md", self.slug())
    }
}

impl fmt::Display for DocModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Docs always worth suggesting, regardless of stack
pub const CORE_DOCS: [DocModule; 5] = [
    DocModule::Principles,
    DocModule::CodeQuality,
    DocModule::TypescriptConventions,
    DocModule::GitWorkflow,
    DocModule::SharedConfigs,
];

/// Docs worth pre-checking for a stack: core docs plus the modules
/// associated with the chosen frontend and backend, in catalog order.
/// These are suggestions for the wizard, never enforced.
pub fn suggested_docs(frontend: Frontend, backend: Backend) -> Vec<DocModule> {
    DocModule::ALL
        .iter()
        .copied()
        .filter(|doc| {
            CORE_DOCS.contains(doc)
                || frontend.suggested_docs().contains(doc)
                || backend.suggested_docs().contains(doc)
        })
        .collect()
}

/// The exhaustive clean-code reference document
pub const CONSTITUTION_FILE: CopyEntry = CopyEntry {
    src: "docs/CLEAN-CODE-CONSTITUTION.md",
    dest: ".aidd/docs/CLEAN-CODE-CONSTITUTION.md",
};

/// Guide bundle for authoring custom Claude skills
pub const SKILLS_GUIDE_FILES: [CopyEntry; 2] = [
    CopyEntry {
        src: "skills/skill-authoring.md",
        dest: ".aidd/skills/skill-authoring.md",
    },
    CopyEntry {
        src: "docs/creating-skills.md",
        dest: ".aidd/docs/creating-skills.md",
    },
];

/// External scaffold command for a (frontend, backend) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub command: &'static str,
    pub label: &'static str,
}

/// Scaffold command to offer for the chosen stack
pub fn scaffold_command(frontend: Frontend, backend: Backend) -> ScaffoldConfig {
    match (frontend, backend) {
        (Frontend::NextJs, Backend::Supabase) => ScaffoldConfig {
            command: "npx create-next-app -e with-supabase",
            label: "Next.js + Supabase (official template)",
        },
        (Frontend::NextJs, _) => ScaffoldConfig {
            command: "npx create-next-app",
            label: "Next.js",
        },
        (Frontend::Vite, _) => ScaffoldConfig {
            command: "npm create vite@latest",
            label: "Vite (React + TypeScript)",
        },
        (Frontend::Astro, _) => ScaffoldConfig {
            command: "npm create astro@latest",
            label: "Astro",
        },
    }
}

/// Dev dependencies installed by the DX tooling phase
pub const DX_PACKAGES: [&str; 11] = [
    "eslint",
    "eslint-config-next",
    "eslint-config-prettier",
    "prettier",
    "prettier-plugin-tailwindcss",
    "husky",
    "lint-staged",
    "@commitlint/cli",
    "@commitlint/config-conventional",
    "vitest",
    "@testing-library/react",
];

/// Shared quality config files copied by the DX tooling phase
pub const DX_CONFIG_FILES: [CopyEntry; 5] = [
    CopyEntry {
        src: "configs/.prettierrc",
        dest: ".prettierrc",
    },
    CopyEntry {
        src: "configs/eslint.config.mjs",
        dest: "eslint.config.mjs",
    },
    CopyEntry {
        src: "configs/commitlint.config.mjs",
        dest: "commitlint.config.mjs",
    },
    CopyEntry {
        src: "configs/lint-staged.config.mjs",
        dest: "lint-staged.config.mjs",
    },
    CopyEntry {
        src: "configs/.vscode/settings.json",
        dest: ".vscode/settings.json",
    },
];

/// Git hook scripts written by the DX tooling phase (name, contents)
pub const HOOK_FILES: [(&str, &str); 2] = [
    ("pre-commit", "npx lint-staged\n"),
    ("commit-msg", "npx --no -- commitlint --edit \"$1\"\n"),
];

/// Optional add-on packages installed by running a shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOn {
    Bmad,
}

impl AddOn {
    pub const ALL: [AddOn; 1] = [AddOn::Bmad];

    pub fn display_name(&self) -> &'static str {
        match self {
            AddOn::Bmad => "BMAD Method (structured prompting workflow)",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            AddOn::Bmad => "npx bmad-method install",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_has_wellformed_entries() {
        for tool in AiTool::ALL {
            let files = tool.files();
            assert!(!files.is_empty(), "{} has no entries", tool);
            for entry in files {
                assert!(!entry.src.is_empty());
                assert!(!entry.dest.is_empty());
                assert!(!entry.dest.starts_with('/'), "dest must be relative");
            }
        }
    }

    #[test]
    fn test_every_command_has_source() {
        for cmd in AnalysisCommand::ALL {
            let src = cmd.source();
            assert!(src.starts_with("commands/"));
            assert!(src.ends_with(".md"));
        }
    }

    #[test]
    fn test_every_doc_has_source() {
        for doc in DocModule::ALL {
            let src = doc.source();
            assert!(src.starts_with("docs/"));
            assert!(src.ends_with(".md"));
        }
    }

    #[test]
    fn test_skill_and_guide_entries_wellformed() {
        for entry in CLAUDE_SKILL_FILES.iter().chain(SKILLS_GUIDE_FILES.iter()) {
            assert!(!entry.src.is_empty());
            assert!(entry.dest.starts_with('.'), "tool-scoped hidden directory");
        }
        assert!(CONSTITUTION_FILE.dest.starts_with(MARKER_DIR));
    }

    #[test]
    fn test_scaffold_command_total_over_stacks() {
        for frontend in Frontend::ALL {
            for backend in Backend::ALL {
                let cfg = scaffold_command(frontend, backend);
                assert!(!cfg.command.is_empty());
                assert!(!cfg.label.is_empty());
            }
        }
    }

    #[test]
    fn test_supabase_next_uses_official_template() {
        let cfg = scaffold_command(Frontend::NextJs, Backend::Supabase);
        assert!(cfg.command.contains("with-supabase"));
    }

    #[test]
    fn test_tool_destinations_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for tool in AiTool::ALL {
            for entry in tool.files() {
                assert!(seen.insert(entry.dest), "duplicate dest: {}", entry.dest);
            }
        }
    }

    #[test]
    fn test_suggested_docs_union() {
        let docs = suggested_docs(Frontend::NextJs, Backend::Supabase);
        for core in CORE_DOCS {
            assert!(docs.contains(&core));
        }
        assert!(docs.contains(&DocModule::ReactPatterns));
        assert!(docs.contains(&DocModule::Database));
        // Not suggested by core, Next.js, or Supabase
        assert!(!docs.contains(&DocModule::Accessibility));

        let bare = suggested_docs(Frontend::Astro, Backend::None);
        assert!(!bare.contains(&DocModule::ReactPatterns));
        assert!(bare.contains(&DocModule::CssDesignTokens));
    }

    #[test]
    fn test_suggested_docs_stay_in_catalog() {
        for frontend in Frontend::ALL {
            for doc in frontend.suggested_docs() {
                assert!(DocModule::ALL.contains(doc));
            }
        }
        for backend in Backend::ALL {
            for doc in backend.suggested_docs() {
                assert!(DocModule::ALL.contains(doc));
            }
        }
    }
}
