//! License registry: maps a license to its display name and LICENSE template.

use clap::ValueEnum;

use crate::templates::Template;

/// Licenses a project can be generated with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum License {
    #[default]
    Mit,
    Apache2,
    Gpl3,
    Bsd3,
    /// No LICENSE file
    None,
}

impl License {
    /// Human-readable name, empty for [`License::None`].
    pub fn display_name(self) -> &'static str {
        match self {
            License::Mit => "MIT License",
            License::Apache2 => "Apache License 2.0",
            License::Gpl3 => "GNU General Public License v3.0",
            License::Bsd3 => "BSD 3-Clause License",
            License::None => "",
        }
    }

    /// Template of the LICENSE file, if the license has one.
    pub fn template(self) -> Option<Template> {
        match self {
            License::Mit => Some(Template::LicenseMit),
            License::Apache2 => Some(Template::LicenseApache2),
            License::Gpl3 => Some(Template::LicenseGpl3),
            License::Bsd3 => Some(Template::LicenseBsd3),
            License::None => None,
        }
    }

    /// Identifier accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            License::Mit => "mit",
            License::Apache2 => "apache2",
            License::Gpl3 => "gpl3",
            License::Bsd3 => "bsd3",
            License::None => "none",
        }
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name for a license identifier; `none` and unknown ids give "".
pub fn get_license_display_name(license: &str) -> &'static str {
    License::from_str(license, false)
        .map(License::display_name)
        .unwrap_or_default()
}
