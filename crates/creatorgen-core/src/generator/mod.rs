/// Project-file generation — one straight pass from walk to artifacts.
///
/// traverse → sort → filter → write `.files` → collect include
/// directories → write `.includes` → write `.creator`.
pub mod writer;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::model::project_path::resolve;
use crate::model::{Blacklist, GenerateSummary, IncludeList, ProjectPath};
use crate::scanner;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Generate the three project artifacts for the tree under `root`.
///
/// Artifacts are written into `root` itself and are never listed in their
/// own file list, so repeated runs over an unchanged tree are byte-identical.
pub fn generate(root: &Path, config: &GeneratorConfig) -> Result<GenerateSummary> {
    let start = Instant::now();
    info!(
        "Generating {} project files in {}",
        config.project_name,
        root.display()
    );

    let [files_path, includes_path, creator_path] = config.artifact_paths(root);

    let mut files = scanner::collect_files(
        root,
        &[files_path.clone(), includes_path.clone(), creator_path.clone()],
    )?;
    files.sort();

    let blacklist = Blacklist::new(config.blacklist.iter().cloned());
    let (kept, includes) = select(root, &files, &blacklist);
    let excluded = files.len() - kept.len();
    debug!(
        "{} files kept, {} excluded, {} include directories",
        kept.len(),
        excluded,
        includes.len()
    );

    writer::write_file_list(&files_path, &kept)?;
    writer::write_include_list(&includes_path, &includes, &config.extra_includes)?;
    writer::write_marker(&creator_path)?;

    let summary = GenerateSummary {
        files_found: files.len() as u64,
        files_written: kept.len() as u64,
        files_excluded: excluded as u64,
        include_dirs: includes.len() as u64,
        duration: start.elapsed(),
    };
    info!("Project files written: {summary}");
    Ok(summary)
}

/// Apply the blacklist to `sorted` files and gather include directories.
///
/// Directories are recorded innermost-first per kept file, in file order,
/// and only when they exist on disk as directories.
fn select<'a>(
    root: &Path,
    sorted: &'a [ProjectPath],
    blacklist: &Blacklist,
) -> (Vec<&'a ProjectPath>, IncludeList) {
    let mut kept = Vec::with_capacity(sorted.len());
    let mut includes = IncludeList::new();

    for file in sorted {
        if blacklist.is_excluded(file) {
            continue;
        }
        for dir in file.ancestors() {
            includes.insert_with(dir, |d| resolve(root, d).is_dir());
        }
        kept.push(file);
    }

    (kept, includes)
}
