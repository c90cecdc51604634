//! Boilerplate text embedded into the binary.
//! Each asset is addressed by a [`Template`] name and carries no logic of its
//! own; placeholders inside are filled in by the renderer.

/// Logical names of the embedded assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    CmakeExe,
    CmakeLib,
    CmakeHeader,
    CmakeExamples,
    CmakeTests,
    ResultHpp,
    MainCpp,
    LibHpp,
    LibCpp,
    HeaderOnlyHpp,
    ExampleCpp,
    TestMainCpp,
    Gitignore,
    ClangFormat,
    ClangTidy,
    LicenseMit,
    LicenseApache2,
    LicenseGpl3,
    LicenseBsd3,
    ReadmeExe,
    ReadmeLib,
    GithubCi,
    GithubRelease,
}

impl Template {
    /// Every embedded asset, in declaration order.
    pub const ALL: [Template; 23] = [
        Template::CmakeExe,
        Template::CmakeLib,
        Template::CmakeHeader,
        Template::CmakeExamples,
        Template::CmakeTests,
        Template::ResultHpp,
        Template::MainCpp,
        Template::LibHpp,
        Template::LibCpp,
        Template::HeaderOnlyHpp,
        Template::ExampleCpp,
        Template::TestMainCpp,
        Template::Gitignore,
        Template::ClangFormat,
        Template::ClangTidy,
        Template::LicenseMit,
        Template::LicenseApache2,
        Template::LicenseGpl3,
        Template::LicenseBsd3,
        Template::ReadmeExe,
        Template::ReadmeLib,
        Template::GithubCi,
        Template::GithubRelease,
    ];

    /// Raw asset text, placeholders untouched.
    pub fn source(self) -> &'static str {
        match self {
            Template::CmakeExe => include_str!("../templates/cmake/exe.cmake"),
            Template::CmakeLib => include_str!("../templates/cmake/lib.cmake"),
            Template::CmakeHeader => include_str!("../templates/cmake/header.cmake"),
            Template::CmakeExamples => include_str!("../templates/cmake/examples.cmake"),
            Template::CmakeTests => include_str!("../templates/cmake/tests.cmake"),
            Template::ResultHpp => include_str!("../templates/cpp/result.hpp"),
            Template::MainCpp => include_str!("../templates/cpp/main.cpp"),
            Template::LibHpp => include_str!("../templates/cpp/lib.hpp"),
            Template::LibCpp => include_str!("../templates/cpp/lib.cpp"),
            Template::HeaderOnlyHpp => include_str!("../templates/cpp/header_only.hpp"),
            Template::ExampleCpp => include_str!("../templates/cpp/example.cpp"),
            Template::TestMainCpp => include_str!("../templates/cpp/test_main.cpp"),
            Template::Gitignore => include_str!("../templates/config/gitignore"),
            Template::ClangFormat => include_str!("../templates/config/clang-format"),
            Template::ClangTidy => include_str!("../templates/config/clang-tidy"),
            Template::LicenseMit => include_str!("../templates/license/mit.txt"),
            Template::LicenseApache2 => include_str!("../templates/license/apache2.txt"),
            Template::LicenseGpl3 => include_str!("../templates/license/gpl3.txt"),
            Template::LicenseBsd3 => include_str!("../templates/license/bsd3.txt"),
            Template::ReadmeExe => include_str!("../templates/readme/exe.md"),
            Template::ReadmeLib => include_str!("../templates/readme/lib.md"),
            Template::GithubCi => include_str!("../templates/github/ci.yml"),
            Template::GithubRelease => include_str!("../templates/github/release.yml"),
        }
    }

    /// Stable name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Template::CmakeExe => "cmake/exe",
            Template::CmakeLib => "cmake/lib",
            Template::CmakeHeader => "cmake/header",
            Template::CmakeExamples => "cmake/examples",
            Template::CmakeTests => "cmake/tests",
            Template::ResultHpp => "cpp/result.hpp",
            Template::MainCpp => "cpp/main.cpp",
            Template::LibHpp => "cpp/lib.hpp",
            Template::LibCpp => "cpp/lib.cpp",
            Template::HeaderOnlyHpp => "cpp/header_only.hpp",
            Template::ExampleCpp => "cpp/example.cpp",
            Template::TestMainCpp => "cpp/test_main.cpp",
            Template::Gitignore => "config/gitignore",
            Template::ClangFormat => "config/clang-format",
            Template::ClangTidy => "config/clang-tidy",
            Template::LicenseMit => "license/mit",
            Template::LicenseApache2 => "license/apache2",
            Template::LicenseGpl3 => "license/gpl3",
            Template::LicenseBsd3 => "license/bsd3",
            Template::ReadmeExe => "readme/exe",
            Template::ReadmeLib => "readme/lib",
            Template::GithubCi => "github/ci",
            Template::GithubRelease => "github/release",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_asset_is_non_empty() {
        for template in Template::ALL {
            assert!(!template.source().is_empty(), "{} is empty", template.name());
        }
    }

    #[test]
    fn test_static_assets_have_no_placeholders() {
        for template in [Template::Gitignore, Template::ClangFormat, Template::ClangTidy] {
            assert!(!template.source().contains("{{"), "{} has a placeholder", template.name());
        }
    }

    #[test]
    fn test_header_only_is_self_contained() {
        let source = Template::HeaderOnlyHpp.source();
        assert!(source.contains("class Result"));
        assert!(!source.contains("result.hpp"));
    }
}
