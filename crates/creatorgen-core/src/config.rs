/// Generator configuration — the hardcoded exclusion list, extra include
/// paths and artifact names.
///
/// The binary always runs with [`GeneratorConfig::default`]; other values
/// exist so tests can exercise the generator against custom lists.
use std::path::{Path, PathBuf};

/// Base name shared by the three generated artifacts.
pub const DEFAULT_PROJECT_NAME: &str = "gui";

/// Path substrings that exclude a file from the project.
pub const DEFAULT_BLACKLIST: &[&str] = &[".git"];

/// Include paths appended after the discovered directories.
pub const DEFAULT_EXTRA_INCLUDES: &[&str] = &["include", "/usr/include/SDL2"];

/// Exact content of the `.creator` marker file.
pub const CREATOR_MARKER: &str = "[General]\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base name of the artifacts (`<name>.files`, `<name>.includes`, `<name>.creator`).
    pub project_name: String,
    /// Substrings; any file path containing one of them is skipped.
    pub blacklist: Vec<String>,
    /// Literal lines written at the end of the include list.
    pub extra_includes: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
            extra_includes: DEFAULT_EXTRA_INCLUDES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn files_name(&self) -> String {
        format!("{}.files", self.project_name)
    }

    pub fn includes_name(&self) -> String {
        format!("{}.includes", self.project_name)
    }

    pub fn creator_name(&self) -> String {
        format!("{}.creator", self.project_name)
    }

    /// Absolute locations of the three artifacts inside `root`.
    pub fn artifact_paths(&self, root: &Path) -> [PathBuf; 3] {
        [
            root.join(self.files_name()),
            root.join(self.includes_name()),
            root.join(self.creator_name()),
        ]
    }
}
