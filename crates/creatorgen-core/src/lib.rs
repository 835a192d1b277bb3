/// creatorgen core — scanning and project-file generation.
///
/// This crate contains all logic with no CLI dependencies. The binary only
/// sets up logging and hands it the working directory.
///
/// # Modules
///
/// - [`config`] — Hardcoded blacklist, extra includes and artifact names.
/// - [`scanner`] — Serial directory walk producing root-relative file paths.
/// - [`model`] — Path rendering, blacklist, include list and run summary.
/// - [`generator`] — The `generate` pass and the artifact writers.
/// - [`error`] — Error type shared by all of the above.
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod scanner;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generator::generate;
pub use model::GenerateSummary;
