//! Placeholder rendering for the embedded templates.
//! Replaces a fixed set of `{{NAME}}` tokens with values taken from a
//! [`RenderContext`]; nothing else in a template is interpreted.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::cli::Options;

/// Text used for `{{DESCRIPTION}}` when no description was given
pub const DEFAULT_DESCRIPTION: &str = "A C++ project";

/// Text used for `{{AUTHOR}}` when no author is known
pub const DEFAULT_AUTHOR: &str = "Author";

const PLACEHOLDER_PATTERN: &str =
    r"\{\{(PROJECT_NAME|DESCRIPTION|CXX_STD|AUTHOR|YEAR|LICENSE_NAME)\}\}";

/// Values substituted into templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub project_name: String,
    pub description: String,
    pub cxx_std: String,
    pub author: String,
    pub year: String,
    pub license_name: String,
}

impl RenderContext {
    /// Derives the context from parsed options and the current year.
    pub fn new(options: &Options, year: impl Into<String>) -> Self {
        Self {
            project_name: options.project_name.clone(),
            description: options.description.clone(),
            cxx_std: options.cxx_std.as_str().to_string(),
            author: options.author.clone(),
            year: year.into(),
            license_name: options.license.display_name().to_string(),
        }
    }

    fn value_of(&self, placeholder: &str) -> &str {
        match placeholder {
            "PROJECT_NAME" => &self.project_name,
            "DESCRIPTION" if self.description.is_empty() => DEFAULT_DESCRIPTION,
            "DESCRIPTION" => &self.description,
            "CXX_STD" => &self.cxx_std,
            "AUTHOR" if self.author.is_empty() => DEFAULT_AUTHOR,
            "AUTHOR" => &self.author,
            "YEAR" => &self.year,
            "LICENSE_NAME" => &self.license_name,
            _ => "",
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &RenderContext) -> String;
}

/// Single-pass literal placeholder substitution.
///
/// Every occurrence is replaced left to right and substituted values are
/// never scanned again, so a description containing `{{YEAR}}` stays as is.
pub struct PlaceholderRenderer {
    pattern: Regex,
}

impl PlaceholderRenderer {
    pub fn new() -> Self {
        let pattern = Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid");
        Self { pattern }
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        PlaceholderRenderer::new()
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> String {
        self.pattern
            .replace_all(template, |caps: &Captures| context.value_of(&caps[1]).to_string())
            .into_owned()
    }
}

static DEFAULT_RENDERER: LazyLock<PlaceholderRenderer> = LazyLock::new(PlaceholderRenderer::new);

/// Renders `template` with a shared [`PlaceholderRenderer`].
pub fn render(template: &str, context: &RenderContext) -> String {
    DEFAULT_RENDERER.render(template, context)
}
