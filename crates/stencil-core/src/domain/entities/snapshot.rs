//! The persisted subset of a [`ParameterSet`](super::parameters::ParameterSet).

use serde::{Deserialize, Serialize};

/// Config file `update` reads when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "appdata.yaml";

/// Directory `update` works in when none is given.
pub const DEFAULT_UPDATE_DIR: &str = "build";

/// Fields preserved across updates.
///
/// Keys are fixed. Unknown keys in a stored file are ignored and missing keys
/// decode as empty strings; no defaults are re-applied on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSnapshot {
    #[serde(rename = "binaryName")]
    pub binary: String,
    #[serde(rename = "companyName")]
    pub product_company: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productIdentifier")]
    pub product_identifier: String,
    #[serde(rename = "description")]
    pub product_description: String,
    #[serde(rename = "productVersion")]
    pub product_version: String,
    #[serde(rename = "copyright")]
    pub product_copyright: String,
    #[serde(rename = "comments")]
    pub product_comments: String,
}
