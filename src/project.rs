//! Project assembly: turns options into the list of directories and files
//! to create. Nothing here touches the disk.

use std::path::{Path, PathBuf};

use crate::cli::{Options, ProjectType};
use crate::renderer::{PlaceholderRenderer, RenderContext, TemplateRenderer};
use crate::templates::Template;

/// A file to create and its final content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
}

/// Everything a project consists of, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFiles {
    pub directories: Vec<PathBuf>,
    pub files: Vec<FileEntry>,
}

impl ProjectFiles {
    pub fn file<P: AsRef<Path>>(&self, path: P) -> Option<&FileEntry> {
        self.files.iter().find(|entry| entry.path == path.as_ref())
    }

    pub fn has_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.file(path).is_some()
    }

    pub fn has_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        self.directories.iter().any(|dir| dir == path.as_ref())
    }
}

/// Accumulates a project rooted at `<project_name>/`.
struct Assembler<'a> {
    root: PathBuf,
    name: &'a str,
    context: &'a RenderContext,
    renderer: &'a dyn TemplateRenderer,
    project: ProjectFiles,
}

impl<'a> Assembler<'a> {
    fn new(name: &'a str, context: &'a RenderContext, renderer: &'a dyn TemplateRenderer) -> Self {
        Self {
            root: PathBuf::from(name),
            name,
            context,
            renderer,
            project: ProjectFiles::default(),
        }
    }

    fn dir<P: AsRef<Path>>(&mut self, relative: P) {
        self.project.directories.push(self.root.join(relative));
    }

    fn rendered<P: AsRef<Path>>(&mut self, relative: P, template: Template) {
        log::debug!("rendering {} into {}", template.name(), relative.as_ref().display());
        let content = self.renderer.render(template.source(), self.context);
        self.push(relative, content);
    }

    fn copied<P: AsRef<Path>>(&mut self, relative: P, template: Template) {
        self.push(relative, template.source().to_string());
    }

    fn push<P: AsRef<Path>>(&mut self, relative: P, content: String) {
        let path = self.root.join(relative);
        debug_assert!(!self.project.has_file(&path), "duplicate path {}", path.display());
        self.project.files.push(FileEntry { path, content });
    }

    /// `include/<name>`
    fn include_dir(&self) -> PathBuf {
        Path::new("include").join(self.name)
    }

    /// `include/<name>/<name>.hpp`
    fn public_header(&self) -> PathBuf {
        self.include_dir().join(format!("{}.hpp", self.name))
    }

    fn common(&mut self, options: &Options) {
        self.dir(self.include_dir());
        self.dir("tests");

        self.copied(".gitignore", Template::Gitignore);

        if options.enable_lint {
            self.copied(".clang-format", Template::ClangFormat);
            self.copied(".clang-tidy", Template::ClangTidy);
        }

        if let Some(template) = options.license.template() {
            self.rendered("LICENSE", template);
        }

        if options.enable_ci {
            let workflows = Path::new(".github").join("workflows");
            self.dir(&workflows);
            self.rendered(workflows.join("ci.yml"), Template::GithubCi);
            if options.project_type == ProjectType::Exe {
                self.rendered(workflows.join("release.yml"), Template::GithubRelease);
            }
        }
    }

    fn exe(mut self, options: &Options) -> ProjectFiles {
        self.dir("src");
        self.common(options);

        self.rendered("CMakeLists.txt", Template::CmakeExe);
        self.rendered(Path::new("src").join("main.cpp"), Template::MainCpp);
        self.rendered(self.include_dir().join("result.hpp"), Template::ResultHpp);
        self.rendered("README.md", Template::ReadmeExe);
        self.project
    }

    fn lib(mut self, options: &Options) -> ProjectFiles {
        self.dir("src");
        self.common(options);

        self.rendered("CMakeLists.txt", Template::CmakeLib);
        self.rendered(Path::new("tests").join("CMakeLists.txt"), Template::CmakeTests);
        self.rendered(self.public_header(), Template::LibHpp);
        self.rendered(self.include_dir().join("result.hpp"), Template::ResultHpp);
        self.rendered(Path::new("src").join(format!("{}.cpp", self.name)), Template::LibCpp);
        self.rendered(Path::new("tests").join("test_main.cpp"), Template::TestMainCpp);
        self.rendered("README.md", Template::ReadmeLib);
        self.project
    }

    fn header(mut self, options: &Options) -> ProjectFiles {
        self.dir("examples");
        self.common(options);

        self.rendered("CMakeLists.txt", Template::CmakeHeader);
        self.rendered(Path::new("examples").join("CMakeLists.txt"), Template::CmakeExamples);
        self.rendered(Path::new("tests").join("CMakeLists.txt"), Template::CmakeTests);
        self.rendered(self.public_header(), Template::HeaderOnlyHpp);
        self.rendered(Path::new("examples").join("example.cpp"), Template::ExampleCpp);
        self.rendered(Path::new("tests").join("test_main.cpp"), Template::TestMainCpp);
        self.rendered("README.md", Template::ReadmeLib);
        self.project
    }
}

/// Builds the project description with the default renderer.
pub fn generate_project(options: &Options, context: &RenderContext) -> ProjectFiles {
    generate_project_with(options, context, &PlaceholderRenderer::new())
}

/// Builds the project description with a caller-supplied renderer.
pub fn generate_project_with(
    options: &Options,
    context: &RenderContext,
    renderer: &dyn TemplateRenderer,
) -> ProjectFiles {
    let assembler = Assembler::new(&options.project_name, context, renderer);
    let project = match options.project_type {
        ProjectType::Exe => assembler.exe(options),
        ProjectType::Lib => assembler.lib(options),
        ProjectType::Header => assembler.header(options),
    };

    log::debug!(
        "assembled {} project '{}': {} directories, {} files (license: {})",
        options.project_type.as_str(),
        options.project_name,
        project.directories.len(),
        project.files.len(),
        options.license,
    );
    project
}
