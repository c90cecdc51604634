//! Command-line interface implementation for cppnew.
//! Parses the raw argument list into validated [`Options`] and renders the
//! help text with clap.
//!
//! Values must be attached with `=` (`--type=lib`, `-t=lib`); the
//! space-separated form is rejected as an unknown option.

use std::ffi::OsString;

use clap::{builder::EnumValueParser, Arg, ArgAction, ValueEnum};

use crate::constants::PROGRAM_NAME;
use crate::error::{Error, Result};
use crate::license::License;
use crate::user::CurrentUserProvider;

/// What the invocation asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    Help,
    NewHelp,
    Version,
    New,
}

/// Shape of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ProjectType {
    /// Executable application
    #[default]
    Exe,
    /// Static library
    Lib,
    /// Header-only library
    Header,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Exe => "exe",
            ProjectType::Lib => "lib",
            ProjectType::Header => "header",
        }
    }
}

/// C++ language standard written into CMakeLists.txt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CxxStandard {
    #[value(name = "17")]
    Cxx17,
    #[default]
    #[value(name = "20")]
    Cxx20,
    #[value(name = "23")]
    Cxx23,
}

impl CxxStandard {
    pub fn as_str(self) -> &'static str {
        match self {
            CxxStandard::Cxx17 => "17",
            CxxStandard::Cxx20 => "20",
            CxxStandard::Cxx23 => "23",
        }
    }
}

/// Validated scaffolding parameters for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub project_name: String,
    pub project_type: ProjectType,
    pub license: License,
    pub cxx_std: CxxStandard,
    pub author: String,
    pub description: String,
    pub enable_ci: bool,
    pub enable_lint: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            command: Command::Help,
            project_name: String::new(),
            project_type: ProjectType::default(),
            license: License::default(),
            cxx_std: CxxStandard::default(),
            author: String::new(),
            description: String::new(),
            enable_ci: true,
            enable_lint: true,
        }
    }
}

/// Decodes raw process arguments, rejecting the first one that is not UTF-8.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| Error::InvalidArgumentEncoding(raw.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Parses the full argument list, program name included.
///
/// The author default is taken from `user` once per call; a missing user
/// yields an empty author, never an error.
///
/// # Errors
/// * `Error::UnknownCommand` for anything other than `new`, help or version
/// * `Error::MissingProjectName`, `Error::EmptyProjectName`,
///   `Error::ProjectNameStartsWithDash` for a bad project name
/// * `Error::InvalidValue` when `--type`, `--license` or `--std` is out of range
/// * `Error::UnknownOption` for any other token after the project name
pub fn parse_args<I, T>(args: I, user: &dyn CurrentUserProvider) -> Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).skip(1);
    let options = Options {
        author: user.current_user().unwrap_or_default(),
        ..Options::default()
    };

    let Some(first) = args.next() else {
        return Ok(options);
    };

    match first.as_str() {
        "--help" | "-h" => Ok(options),
        "--version" | "-v" => Ok(Options { command: Command::Version, ..options }),
        "new" => parse_new(args, options),
        _ => Err(Error::UnknownCommand(first)),
    }
}

fn parse_new(mut args: impl Iterator<Item = String>, mut options: Options) -> Result<Options> {
    let name = args.next().ok_or(Error::MissingProjectName)?;

    if name == "--help" || name == "-h" {
        return Ok(Options { command: Command::NewHelp, ..options });
    }
    if name.is_empty() {
        return Err(Error::EmptyProjectName);
    }
    if name.starts_with('-') {
        return Err(Error::ProjectNameStartsWithDash { name });
    }

    options.command = Command::New;
    options.project_name = name;

    // Later occurrences overwrite earlier ones.
    for arg in args {
        apply_option(&mut options, &arg)?;
    }

    log::debug!("parsed options: {:?}", options);
    Ok(options)
}

fn apply_option(options: &mut Options, arg: &str) -> Result<()> {
    match arg {
        "--no-ci" => {
            options.enable_ci = false;
            return Ok(());
        }
        "--no-lint" => {
            options.enable_lint = false;
            return Ok(());
        }
        _ => {}
    }

    let (key, value) = match arg.split_once('=') {
        Some((key, value)) if !value.is_empty() => (key, value),
        _ => return Err(Error::UnknownOption(arg.to_string())),
    };

    match key {
        "--type" | "-t" => options.project_type = parse_value("project type", value)?,
        "--license" | "-l" => options.license = parse_value("license", value)?,
        "--std" | "-s" => options.cxx_std = parse_value("C++ standard", value)?,
        "--author" | "-a" => options.author = value.to_string(),
        "--desc" | "-d" => options.description = value.to_string(),
        _ => return Err(Error::UnknownOption(arg.to_string())),
    }
    Ok(())
}

fn parse_value<E: ValueEnum>(option: &'static str, value: &str) -> Result<E> {
    E::from_str(value, false).map_err(|_| Error::InvalidValue {
        option,
        value: value.to_string(),
        expected: possible_values::<E>(),
    })
}

/// Comma separated list of the values accepted for `E`.
pub fn possible_values<E: ValueEnum>() -> String {
    E::value_variants()
        .iter()
        .filter_map(|variant| variant.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describes the `new` subcommand for help rendering.
pub fn new_command() -> clap::Command {
    clap::Command::new("new")
        .about("Create a new C++ project")
        .bin_name(format!("{PROGRAM_NAME} new"))
        .override_usage(format!("{PROGRAM_NAME} new <PROJECT_NAME> [OPTIONS]"))
        .arg(
            Arg::new("name")
                .value_name("PROJECT_NAME")
                .required(true)
                .help("Project directory and C++ namespace"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("TYPE")
                .require_equals(true)
                .value_parser(EnumValueParser::<ProjectType>::new())
                .default_value(ProjectType::default().as_str())
                .help("Project type"),
        )
        .arg(
            Arg::new("license")
                .short('l')
                .long("license")
                .value_name("LICENSE")
                .require_equals(true)
                .value_parser(EnumValueParser::<License>::new())
                .default_value(License::default().as_str())
                .help("License written to LICENSE"),
        )
        .arg(
            Arg::new("std")
                .short('s')
                .long("std")
                .value_name("STANDARD")
                .require_equals(true)
                .value_parser(EnumValueParser::<CxxStandard>::new())
                .default_value(CxxStandard::default().as_str())
                .help("C++ standard"),
        )
        .arg(
            Arg::new("author")
                .short('a')
                .long("author")
                .value_name("NAME")
                .require_equals(true)
                .help("Author name [default: git config user.name]"),
        )
        .arg(
            Arg::new("desc")
                .short('d')
                .long("desc")
                .value_name("TEXT")
                .require_equals(true)
                .help("Project description"),
        )
        .arg(
            Arg::new("no-ci")
                .long("no-ci")
                .action(ArgAction::SetTrue)
                .help("Do not generate GitHub Actions workflows"),
        )
        .arg(
            Arg::new("no-lint")
                .long("no-lint")
                .action(ArgAction::SetTrue)
                .help("Do not generate .clang-format and .clang-tidy"),
        )
        .after_help(format!(
            "Examples:\n  \
             {PROGRAM_NAME} new myapp\n  \
             {PROGRAM_NAME} new mylib --type=lib --std=20\n  \
             {PROGRAM_NAME} new myheader --type=header --license=apache2\n  \
             {PROGRAM_NAME} new myproject --author=\"Jane Doe\" --desc=\"My project\"\n  \
             {PROGRAM_NAME} new myapp --no-ci --no-lint"
        ))
}

/// Describes the whole program for help rendering.
pub fn root_command() -> clap::Command {
    clap::Command::new(PROGRAM_NAME)
        .about("C++ project scaffolding tool")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
        .subcommand(new_command())
        .after_help(format!(
            "Examples:\n  \
             {PROGRAM_NAME} new myproject\n  \
             {PROGRAM_NAME} new myproject --type=lib --license=apache2\n  \
             {PROGRAM_NAME} new --help"
        ))
}

/// Top-level help.
pub fn help_text() -> String {
    root_command().render_help().to_string()
}

/// Help for `new`.
pub fn new_help_text() -> String {
    new_command().render_help().to_string()
}

pub fn version_text() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}
