//! cppnew's entry point.
//! Parses the arguments, dispatches the command and turns errors into exit codes.

use std::path::Path;

use cppnew::{
    cli::{help_text, new_help_text, parse_args, utf8_args, version_text, Command, Options},
    error::{default_error_handler, Result},
    logger::init_logger,
    output::{next_steps, print_success},
    project::generate_project,
    renderer::RenderContext,
    user::{current_year, GitUser},
    writer::{ensure_project_dir, write_project},
};

/// Main application entry point.
fn main() {
    init_logger();

    let options = match utf8_args(std::env::args_os())
        .and_then(|args| parse_args(args, &GitUser::new()))
    {
        Ok(options) => options,
        Err(err) => default_error_handler(err),
    };

    match options.command {
        Command::Help => print!("{}", help_text()),
        Command::NewHelp => print!("{}", new_help_text()),
        Command::Version => print!("{}", version_text()),
        Command::New => {
            if let Err(err) = run(&options) {
                default_error_handler(err);
            }
        }
    }
}

/// Generates the project into the current directory.
///
/// # Flow
/// 1. Refuses to continue if `<project_name>` already exists
/// 2. Builds the render context and assembles the project in memory
/// 3. Writes directories and files, reporting each file
/// 4. Prints the next steps
fn run(options: &Options) -> Result<()> {
    let root = Path::new(".");
    ensure_project_dir(root, &options.project_name)?;

    println!("Creating project '{}'...\n", options.project_name);

    let context = RenderContext::new(options, current_year());
    let project = generate_project(options, &context);

    write_project(&project, root, |path| {
        print_success(&format!("Created: {}", path.display()));
    })?;

    print_success("Project created successfully!");
    print!("{}", next_steps(options));
    Ok(())
}
