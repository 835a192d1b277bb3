/// Substring-based path exclusion.
use super::ProjectPath;

/// Fixed set of substrings; a path matching any of them is excluded.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    patterns: Vec<String>,
}

impl Blacklist {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` if any pattern occurs anywhere in the rendered path.
    ///
    /// Matching is a plain substring test, so `.git` also excludes
    /// `./.gitignore` and `./src/.github/ci.yml`.
    pub fn is_excluded(&self, path: &ProjectPath) -> bool {
        let rendered = path.as_str();
        self.patterns.iter().any(|p| rendered.contains(p.as_str()))
    }
}
