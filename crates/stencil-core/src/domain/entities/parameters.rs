//! Generation parameters: raw invocation input and the resolved set.
//!
//! [`RawParameters`] is whatever the user typed, any field may be empty.
//! [`ParameterSet`] is the canonical, fully-defaulted form produced once per
//! invocation. Defaulting is plain conditional logic in
//! [`ParameterSet::from_raw`]; resolving the destination directory needs the
//! filesystem and therefore lives in the application layer
//! (`ParameterResolver`).

use std::fmt;
use std::path::{Path, PathBuf};

use super::snapshot::ConfigSnapshot;

pub const DEFAULT_PRODUCT_NAME: &str = "My Product";
pub const DEFAULT_PRODUCT_DESCRIPTION: &str = "My Product Description";
pub const DEFAULT_PRODUCT_VERSION: &str = "0.1.0";
pub const DEFAULT_PRODUCT_COMPANY: &str = "My Company";
pub const DEFAULT_PRODUCT_COPYRIGHT: &str = "\u{a9} now, My Company";

/// Prefix of synthesized reverse-domain product identifiers.
pub const IDENTIFIER_PREFIX: &str = "com.stencil.";

/// Directory `generate` writes into when none is given.
pub const DEFAULT_GENERATE_DIR: &str = ".";

/// Lowercase `name` and turn every space into a hyphen.
///
/// Nothing else is touched: punctuation, unicode and runs of spaces survive
/// (each space becomes its own hyphen).
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// The platform generated binaries are named for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    /// Platform this process was compiled for.
    pub const fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Suffix appended to default binary names.
    pub const fn executable_suffix(&self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            _ => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Invocation facts the defaults depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveEnv {
    pub platform: Platform,
    pub current_year: i32,
}

impl ResolveEnv {
    pub fn new(platform: Platform, current_year: i32) -> Self {
        Self {
            platform,
            current_year,
        }
    }

    /// Host platform with the given calendar year.
    pub fn host(current_year: i32) -> Self {
        Self::new(Platform::host(), current_year)
    }
}

/// Raw, user-supplied generation options. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    pub directory: PathBuf,
    pub name: String,
    pub binary: String,
    pub product_name: String,
    pub product_description: String,
    pub product_version: String,
    pub product_company: String,
    pub product_copyright: String,
    pub product_comments: String,
    pub product_identifier: String,
}

/// Canonical, fully-defaulted generation parameters.
///
/// Immutable once built; read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    name: String,
    binary: String,
    product_name: String,
    product_description: String,
    product_version: String,
    product_company: String,
    product_copyright: String,
    product_comments: String,
    product_identifier: String,
    destination: PathBuf,
}

impl ParameterSet {
    /// Apply every documented default to `raw`.
    ///
    /// `destination` must already be absolute and exist; the caller owns that.
    /// Company is resolved before the comment because the synthesized comment
    /// embeds it.
    pub fn from_raw(raw: &RawParameters, destination: PathBuf, env: ResolveEnv) -> Self {
        let product_company = or_default(&raw.product_company, DEFAULT_PRODUCT_COMPANY);

        let product_comments = if raw.product_comments.is_empty() {
            format!("(c) {} {}", env.current_year, product_company)
        } else {
            raw.product_comments.clone()
        };

        let product_identifier = if raw.product_identifier.is_empty() {
            format!("{IDENTIFIER_PREFIX}{}", normalize_name(&raw.name))
        } else {
            raw.product_identifier.clone()
        };

        let binary = if raw.binary.is_empty() {
            format!(
                "{}{}",
                normalize_name(&raw.name),
                env.platform.executable_suffix()
            )
        } else {
            raw.binary.clone()
        };

        Self {
            name: raw.name.clone(),
            binary,
            product_name: or_default(&raw.product_name, DEFAULT_PRODUCT_NAME),
            product_description: or_default(&raw.product_description, DEFAULT_PRODUCT_DESCRIPTION),
            product_version: or_default(&raw.product_version, DEFAULT_PRODUCT_VERSION),
            product_company,
            product_copyright: or_default(&raw.product_copyright, DEFAULT_PRODUCT_COPYRIGHT),
            product_comments,
            product_identifier,
            destination,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn binary(&self) -> &str {
        &self.binary
    }
    pub fn product_name(&self) -> &str {
        &self.product_name
    }
    pub fn product_description(&self) -> &str {
        &self.product_description
    }
    pub fn product_version(&self) -> &str {
        &self.product_version
    }
    pub fn product_company(&self) -> &str {
        &self.product_company
    }
    pub fn product_copyright(&self) -> &str {
        &self.product_copyright
    }
    pub fn product_comments(&self) -> &str {
        &self.product_comments
    }
    pub fn product_identifier(&self) -> &str {
        &self.product_identifier
    }
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Project onto the fields that survive across updates.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            binary: self.binary.clone(),
            product_company: self.product_company.clone(),
            product_name: self.product_name.clone(),
            product_identifier: self.product_identifier.clone(),
            product_description: self.product_description.clone(),
            product_version: self.product_version.clone(),
            product_copyright: self.product_copyright.clone(),
            product_comments: self.product_comments.clone(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
