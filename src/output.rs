//! Console output: status lines and the next-steps block.

use colored::Colorize;

use crate::cli::{Options, ProjectType};

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Commands to build (and for executables, run) the fresh project.
pub fn next_steps(options: &Options) -> String {
    let mut steps = format!(
        "\nNext steps:\n  cd {}\n  cmake -B build -G Ninja\n  cmake --build build\n",
        options.project_name
    );
    match options.project_type {
        ProjectType::Exe => steps.push_str(&format!("  ./build/{}\n", options.project_name)),
        ProjectType::Header => steps.push_str("  ./build/examples/example\n"),
        ProjectType::Lib => {}
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;

    fn options(project_type: ProjectType) -> Options {
        Options {
            command: Command::New,
            project_name: "demo".to_string(),
            project_type,
            ..Options::default()
        }
    }

    #[test]
    fn test_next_steps_exe_runs_binary() {
        let steps = next_steps(&options(ProjectType::Exe));
        assert!(steps.contains("cd demo"));
        assert!(steps.contains("cmake --build build"));
        assert!(steps.ends_with("./build/demo\n"));
    }

    #[test]
    fn test_next_steps_header_runs_example() {
        let steps = next_steps(&options(ProjectType::Header));
        assert!(steps.ends_with("./build/examples/example\n"));
    }

    #[test]
    fn test_next_steps_lib_stops_after_build() {
        let steps = next_steps(&options(ProjectType::Lib));
        assert!(steps.ends_with("cmake --build build\n"));
    }
}
