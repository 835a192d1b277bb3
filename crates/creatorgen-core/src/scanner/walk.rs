/// Directory walker using `jwalk` in serial mode.
///
/// Only non-directory entries are collected. Symlinks are not followed into;
/// a symlink is reported as a file unless its target is a directory, and a
/// dangling symlink is still reported as a file.
use crate::error::{GenerateError, Result};
use crate::model::ProjectPath;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Walk `root` and return every file as a root-relative path, unsorted.
///
/// Entries whose full path equals one of `skip` are left out. A missing
/// root or any walk error aborts the scan.
pub fn collect_files(root: &Path, skip: &[PathBuf]) -> Result<Vec<ProjectPath>> {
    let start = Instant::now();
    let mut files: Vec<ProjectPath> = Vec::with_capacity(1_024);
    let mut dirs_seen: u64 = 0;

    std::fs::metadata(root).map_err(|source| GenerateError::Metadata {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = entry_result.map_err(|source| GenerateError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        // The root itself.
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            dirs_seen += 1;
            continue;
        }
        if file_type.is_symlink() && points_to_dir(&path)? {
            continue;
        }
        if skip.iter().any(|s| *s == path) {
            continue;
        }

        let relative = match path.strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let (project_path, lossy) = ProjectPath::from_relative(relative);
        if lossy {
            warn!("Non UTF-8 file name, listed as {project_path}");
        }
        files.push(project_path);
    }

    debug!(
        "Walk of {} complete: {} files, {} dirs in {:?}",
        root.display(),
        files.len(),
        dirs_seen,
        start.elapsed()
    );

    Ok(files)
}

/// Resolve a symlink; a missing target counts as "not a directory".
fn points_to_dir(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(GenerateError::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rendered(files: &[ProjectPath]) -> Vec<String> {
        let mut out: Vec<String> = files.iter().map(|p| p.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn collects_nested_files_but_not_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/ui")).unwrap();
        fs::create_dir_all(tmp.path().join("empty")).unwrap();
        fs::write(tmp.path().join("src/ui/Button.cpp"), "").unwrap();
        fs::write(tmp.path().join("Makefile"), "").unwrap();

        let files = collect_files(tmp.path(), &[]).unwrap();
        assert_eq!(rendered(&files), vec!["./Makefile", "./src/ui/Button.cpp"]);
    }

    #[test]
    fn hidden_files_are_included() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".git/HEAD"), "ref").unwrap();

        let files = collect_files(tmp.path(), &[]).unwrap();
        assert_eq!(rendered(&files), vec!["./.git/HEAD"]);
    }

    #[test]
    fn skip_list_is_honoured() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("gui.files"), "").unwrap();
        fs::write(tmp.path().join("main.cpp"), "").unwrap();

        let files = collect_files(tmp.path(), &[tmp.path().join("gui.files")]).unwrap();
        assert_eq!(rendered(&files), vec!["./main.cpp"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_dirs_are_skipped_and_file_links_kept() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("real")).unwrap();
        fs::write(tmp.path().join("real/a.h"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("linked_dir"))
            .unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real/a.h"), tmp.path().join("b.h")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("dangling"))
            .unwrap();

        let files = collect_files(tmp.path(), &[]).unwrap();
        assert_eq!(
            rendered(&files),
            vec!["./b.h", "./dangling", "./real/a.h"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_keeps_walk_error_as_source() {
        use std::error::Error as _;
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("secret.h"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the directory; nothing to assert then.
        let readable = fs::read_dir(&locked).is_ok();
        let result = collect_files(tmp.path(), &[]);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        let err = result.unwrap_err();
        assert!(
            matches!(err, GenerateError::Walk { .. }),
            "expected Walk error, got {err:?}"
        );
        let source = err.source().expect("walk error must keep its cause");
        assert!(source.downcast_ref::<jwalk::Error>().is_some());
        assert!(err.to_string().starts_with("failed to walk "));
    }
}
