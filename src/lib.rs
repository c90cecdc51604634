//! cppnew scaffolds C++ projects.
//! It parses a small set of options, renders embedded CMake, source, license
//! and CI templates, and writes the resulting tree to disk.

/// Command-line parsing into validated options, plus help and version text
pub mod cli;

/// Names of environment variables and other shared constants
pub mod constants;

/// Error types and handling for the cppnew application
pub mod error;

/// License identifiers, display names and LICENSE templates
pub mod license;

/// env_logger setup
pub mod logger;

/// Console status lines and next-steps text
pub mod output;

/// Pure assembly of the directories and files that make up a project
pub mod project;

/// Placeholder substitution over the embedded templates
pub mod renderer;

/// Embedded boilerplate assets
pub mod templates;

/// Current user and year lookups
pub mod user;

/// Writes an assembled project to disk
pub mod writer;
