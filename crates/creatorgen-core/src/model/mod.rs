/// Data model for project-file generation.
///
/// Root-relative path rendering, the exclusion filter, the include
/// directory list and the run summary.
pub mod blacklist;
pub mod include_list;
pub mod project_path;
pub mod summary;

pub use blacklist::Blacklist;
pub use include_list::IncludeList;
pub use project_path::ProjectPath;
pub use summary::{format_count, GenerateSummary};
