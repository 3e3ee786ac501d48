//! YAML codec for the config snapshot.

use serde_yaml::{Mapping, Value};
use stencil_core::{
    application::ports::{CodecError, SnapshotCodec},
    domain::ConfigSnapshot,
};

/// `serde_yaml` backed [`SnapshotCodec`].
///
/// Decoding is lenient about scalars: a hand-edited `productVersion: 2` or
/// `comments:` with no value reads back as `"2"` and `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSnapshotCodec;

impl YamlSnapshotCodec {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotCodec for YamlSnapshotCodec {
    fn encode(&self, snapshot: &ConfigSnapshot) -> Result<String, CodecError> {
        serde_yaml::to_string(snapshot).map_err(|e| CodecError(e.to_string()))
    }

    fn decode(&self, text: &str) -> Result<ConfigSnapshot, CodecError> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| CodecError(e.to_string()))?;

        let mapping = match value {
            // comments only, or an empty file
            Value::Null => return Ok(ConfigSnapshot::default()),
            Value::Mapping(m) => m,
            other => {
                return Err(CodecError(format!(
                    "expected a mapping of fields, found {}",
                    kind(&other)
                )));
            }
        };

        let normalized: Mapping = mapping
            .into_iter()
            .map(|(k, v)| (k, stringify_scalar(v)))
            .collect();

        serde_yaml::from_value(Value::Mapping(normalized)).map_err(|e| CodecError(e.to_string()))
    }
}

fn stringify_scalar(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigSnapshot {
        ConfigSnapshot {
            binary: "my-app".into(),
            product_company: "Acme".into(),
            product_name: "My App".into(),
            product_identifier: "com.stencil.my-app".into(),
            product_description: "Does things: quickly".into(),
            product_version: "1.0".into(),
            product_copyright: "\u{a9} now, Acme".into(),
            product_comments: "(c) 2030 Acme".into(),
        }
    }

    #[test]
    fn encodes_fixed_keys() {
        let text = YamlSnapshotCodec::new().encode(&sample()).unwrap();
        for key in [
            "binaryName:",
            "companyName:",
            "productName:",
            "productIdentifier:",
            "description:",
            "productVersion:",
            "copyright:",
            "comments:",
        ] {
            assert!(text.contains(key), "missing {key} in:\n{text}");
        }
    }

    #[test]
    fn encoded_snapshot_decodes_to_itself() {
        let codec = YamlSnapshotCodec::new();
        let text = codec.encode(&sample()).unwrap();
        assert_eq!(codec.decode(&text).unwrap(), sample());
    }

    #[test]
    fn missing_keys_are_empty_and_unknown_keys_ignored() {
        let snapshot = YamlSnapshotCodec::new()
            .decode("binaryName: tool\nextra: [1, 2]\n")
            .unwrap();
        assert_eq!(snapshot.binary, "tool");
        assert_eq!(snapshot.product_name, "");
        assert_eq!(snapshot.product_comments, "");
    }

    #[test]
    fn bare_scalars_read_as_text() {
        let snapshot = YamlSnapshotCodec::new()
            .decode("productVersion: 2\ncomments:\n")
            .unwrap();
        assert_eq!(snapshot.product_version, "2");
        assert_eq!(snapshot.product_comments, "");
    }

    #[test]
    fn comment_only_file_is_an_empty_snapshot() {
        let snapshot = YamlSnapshotCodec::new()
            .decode("# nothing here yet\n")
            .unwrap();
        assert_eq!(snapshot, ConfigSnapshot::default());
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(YamlSnapshotCodec::new().decode("binaryName: [unclosed").is_err());
        assert!(YamlSnapshotCodec::new().decode("- a\n- b\n").is_err());
    }
}
