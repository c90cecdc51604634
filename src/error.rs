//! Error handling for cppnew.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::output::print_error;

/// Errors raised while parsing arguments or writing a project.
///
/// Variants fall in two groups: usage errors, detected before anything
/// touches the disk, and I/O errors raised by the writer. See [`Error::is_usage`].
#[derive(Error, Debug)]
pub enum Error {
    /// `new` was given without a project name
    #[error("project name required (usage: cppnew new <project-name> [options])")]
    MissingProjectName,

    /// The project name looks like an option
    #[error("project name cannot start with '-': '{name}'")]
    ProjectNameStartsWithDash { name: String },

    /// The project name is an empty string
    #[error("project name cannot be empty")]
    EmptyProjectName,

    /// An option received a value outside its accepted set
    #[error("invalid {option} '{value}', expected one of: {expected}")]
    InvalidValue { option: &'static str, value: String, expected: String },

    /// Token after the project name that is not a known option
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// An argument could not be decoded as UTF-8
    #[error("argument '{0}' is not valid UTF-8")]
    InvalidArgumentEncoding(String),

    /// First argument is not a known command
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// The project directory is already present on disk
    #[error("directory '{output_dir}' already exists")]
    OutputDirectoryExistsError { output_dir: String },

    /// A directory of the project could not be created
    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDirectoryError { path: PathBuf, source: io::Error },

    /// A file of the project could not be written
    #[error("failed to write file '{}': {source}", .path.display())]
    WriteFileError { path: PathBuf, source: io::Error },
}

impl Error {
    /// Returns true for malformed or invalid arguments, false for I/O failures.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingProjectName
                | Error::ProjectNameStartsWithDash { .. }
                | Error::EmptyProjectName
                | Error::InvalidValue { .. }
                | Error::UnknownOption(_)
                | Error::UnknownCommand(_)
                | Error::InvalidArgumentEncoding(_)
        )
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints a single `✗ <message>` line to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    let kind = if err.is_usage() { "usage" } else { "io" };
    log::debug!("aborting on {} error: {:?}", kind, err);
    print_error(&err.to_string());
    std::process::exit(1);
}
