/// Root-relative path strings as they appear in the generated files.
///
/// Every path is rendered as `./` followed by `/`-separated components
/// (`./src/widgets/Button.cpp`), and ordering is plain string ordering on
/// that rendering.
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Rendering of the traversal root itself. Never written to any artifact.
pub const ROOT: &str = ".";

const PREFIX: &str = "./";

/// A file or directory path relative to the traversal root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Render a path that is already relative to the root.
    ///
    /// Returns the rendered path and whether any component had to be
    /// converted lossily because it was not valid UTF-8.
    pub fn from_relative(relative: &Path) -> (Self, bool) {
        let mut rendered = String::from(ROOT);
        let mut lossy = false;
        for component in relative.components() {
            if let Component::Normal(name) = component {
                let name = match name.to_str() {
                    Some(s) => std::borrow::Cow::Borrowed(s),
                    None => {
                        lossy = true;
                        name.to_string_lossy()
                    }
                };
                rendered.push('/');
                rendered.push_str(&name);
            }
        }
        (Self(rendered), lossy)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ancestor directories, innermost first, stopping before the root.
    ///
    /// `./a/b/c.txt` yields `./a/b` then `./a`; `./c.txt` yields nothing.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            current: self.0.as_str(),
        }
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Iterator returned by [`ProjectPath::ancestors`].
pub struct Ancestors<'a> {
    current: &'a str,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    /// Stops at the root: `.` is never yielded, so the root directory is
    /// never written as an include path even for top-level files.
    fn next(&mut self) -> Option<&'a str> {
        let cut = self.current.rfind('/')?;
        let parent = &self.current[..cut];
        if parent.is_empty() || parent == ROOT {
            self.current = "";
            return None;
        }
        self.current = parent;
        Some(parent)
    }
}

/// Map a rendered root-relative string back onto the filesystem under `root`.
pub fn resolve(root: &Path, rendered: &str) -> PathBuf {
    let tail = rendered.strip_prefix(PREFIX).unwrap_or(rendered);
    if tail == ROOT || tail.is_empty() {
        return root.to_path_buf();
    }
    tail.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
}
