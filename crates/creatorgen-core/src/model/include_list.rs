/// Deduplicated include directories in first-seen order.
///
/// The order is whatever the sorted file walk produces (innermost ancestor
/// first for each file) and is kept as-is rather than sorted, since IDE
/// include resolution follows line order.
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct IncludeList {
    /// Membership set, seeded with the empty root sentinel.
    seen: HashSet<String>,
    /// Directories in insertion order.
    dirs: Vec<String>,
}

impl Default for IncludeList {
    fn default() -> Self {
        Self::new()
    }
}

impl IncludeList {
    pub fn new() -> Self {
        let mut seen = HashSet::new();
        seen.insert(String::new());
        Self {
            seen,
            dirs: Vec::new(),
        }
    }

    /// Record `dir` if it has not been seen; returns `true` when appended.
    pub fn insert(&mut self, dir: &str) -> bool {
        self.insert_with(dir, |_| true)
    }

    /// Like [`insert`](Self::insert), but a new `dir` is only appended when
    /// `accept` returns `true`. `accept` is never called for a known `dir`,
    /// so an expensive check (a stat) runs once per directory at most.
    pub fn insert_with<F>(&mut self, dir: &str, accept: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if self.seen.contains(dir) || !accept(dir) {
            return false;
        }
        self.seen.insert(dir.to_string());
        self.dirs.push(dir.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    /// Render the `.includes` content: one directory per line, then the
    /// `extra` lines joined by newlines with no trailing newline.
    pub fn render(&self, extra: &[String]) -> String {
        let mut out = String::new();
        for dir in self.iter() {
            out.push_str(dir);
            out.push('\n');
        }
        out.push_str(&extra.join("\n"));
        out
    }
}
