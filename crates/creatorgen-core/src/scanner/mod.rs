/// Scanner module — enumerates the files under the traversal root.
///
/// The walk is a single serial `jwalk` pass; ordering is imposed afterwards
/// by the generator, so walk order never leaks into the output.
pub mod walk;

pub use walk::collect_files;
