/// Artifact writers for the `.files`, `.includes` and `.creator` outputs.
///
/// Each artifact is created (truncating any previous content), written
/// through a `BufWriter` and flushed before returning.
use crate::config::CREATOR_MARKER;
use crate::error::{GenerateError, Result};
use crate::model::{IncludeList, ProjectPath};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_with<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let to_error = |source: std::io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(to_error)?;
    out.flush().map_err(to_error)
}

/// One path per line, each terminated by a newline.
pub fn write_file_list(path: &Path, files: &[&ProjectPath]) -> Result<()> {
    write_with(path, |out| {
        for file in files {
            writeln!(out, "{file}")?;
        }
        Ok(())
    })
}

pub fn write_include_list(path: &Path, includes: &IncludeList, extra: &[String]) -> Result<()> {
    write_with(path, |out| out.write_all(includes.render(extra).as_bytes()))
}

pub fn write_marker(path: &Path) -> Result<()> {
    write_with(path, |out| out.write_all(CREATOR_MARKER.as_bytes()))
}
