//! Raw configuration document model
//!
//! A workflow document is YAML on the surface, but the engine's option values
//! include literal forms YAML does not resolve on its own: tuple literals such
//! as `(64, 64, 1)` and exponent floats written `4.E-4`. Parsing therefore
//! happens in two steps: `serde_yaml` builds the tree, then every plain scalar
//! is re-interpreted against the engine's literal grammar.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A single scalar option value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// A value in the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Fixed-arity tuple literal, e.g. `(64, 64, 1)`
    Tuple(Vec<Scalar>),
    /// Variable-length list, e.g. `[32, 64, 96]`
    List(Vec<Scalar>),
    /// Nested section mapping
    Section(BTreeMap<String, Value>),
}

impl Value {
    /// Human-readable description of the value's shape, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Value::Scalar(Scalar::Int(v)) => format!("integer {v}"),
            Value::Scalar(Scalar::Float(v)) => format!("float {v}"),
            Value::Scalar(Scalar::Bool(v)) => format!("boolean {v}"),
            Value::Scalar(Scalar::Str(v)) => format!("string '{v}'"),
            Value::Tuple(items) => format!("tuple of {} entries", items.len()),
            Value::List(items) => format!("list of {} entries", items.len()),
            Value::Section(_) => "section".to_string(),
        }
    }
}

/// A parsed, uninterpreted workflow document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: BTreeMap<String, Value>,
}

impl Document {
    /// Load a document from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref()).map_err(|source| Error::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_str(&text)
    }

    /// Parse a document from in-memory text
    pub fn from_str(text: &str) -> Result<Self> {
        let raw: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| Error::Parse(e.to_string()))?;
        let root = match convert(raw)? {
            Value::Section(map) => map,
            other => {
                return Err(Error::Parse(format!(
                    "document root must be a mapping of sections, found {}",
                    other.describe()
                )))
            }
        };
        Ok(Document { root })
    }

    /// Top-level section names present in the document
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Look up a top-level entry
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// The root mapping
    pub fn root(&self) -> &BTreeMap<String, Value> {
        &self.root
    }
}

/// Convert a `serde_yaml` tree into the document model
fn convert(value: serde_yaml::Value) -> Result<Value> {
    match value {
        // A bare key with no value reads as the empty string, matching how
        // the engine treats blank path options.
        serde_yaml::Value::Null => Ok(Value::Scalar(Scalar::Str(String::new()))),
        serde_yaml::Value::Bool(b) => Ok(Value::Scalar(Scalar::Bool(b))),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Scalar(Scalar::Int(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Scalar(Scalar::Float(f)))
            } else {
                Err(Error::Parse(format!("numeric value out of range: {n}")))
            }
        }
        serde_yaml::Value::String(s) => Ok(interpret_scalar(&s)),
        serde_yaml::Value::Sequence(items) => {
            let mut scalars = Vec::with_capacity(items.len());
            for item in items {
                match convert(item)? {
                    Value::Scalar(s) => scalars.push(s),
                    other => {
                        return Err(Error::Parse(format!(
                            "lists may only contain scalar values, found {}",
                            other.describe()
                        )))
                    }
                }
            }
            Ok(Value::List(scalars))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut section = BTreeMap::new();
            for (key, val) in map {
                let serde_yaml::Value::String(key) = key else {
                    return Err(Error::Parse("section keys must be strings".to_string()));
                };
                section.insert(key, convert(val)?);
            }
            Ok(Value::Section(section))
        }
        serde_yaml::Value::Tagged(tagged) => Err(Error::Parse(format!(
            "unsupported tagged value: {}",
            tagged.tag
        ))),
    }
}

/// Interpret a plain scalar against the engine's literal grammar
fn interpret_scalar(text: &str) -> Value {
    let trimmed = text.trim();
    if let Some(inner) = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Value::Tuple(parse_tuple_items(inner));
    }
    Value::Scalar(parse_scalar(trimmed))
}

fn parse_tuple_items(inner: &str) -> Vec<Scalar> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .map(|item| parse_scalar(item.trim()))
        .collect()
}

fn parse_scalar(text: &str) -> Scalar {
    match text {
        "True" | "TRUE" | "true" => return Scalar::Bool(true),
        "False" | "FALSE" | "false" => return Scalar::Bool(false),
        _ => {}
    }
    if let Ok(i) = text.parse::<i64>() {
        return Scalar::Int(i);
    }
    if looks_numeric(text) {
        if let Ok(f) = text.parse::<f64>() {
            return Scalar::Float(f);
        }
    }
    Scalar::Str(text.to_string())
}

/// Restrict float parsing to digit-built literals so words like `inf` and
/// `nan` stay strings.
fn looks_numeric(text: &str) -> bool {
    !text.is_empty()
        && text.contains(|c: char| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_scalars() {
        let doc =
            Document::from_str("SYSTEM:\n  NUM_CPUS: -1\nTRAIN:\n  LR: 0.001\n  OPTIMIZER: ADAM\n")
                .unwrap();
        let Some(Value::Section(system)) = doc.get("SYSTEM") else {
            panic!("SYSTEM should be a section");
        };
        assert_eq!(
            system.get("NUM_CPUS"),
            Some(&Value::Scalar(Scalar::Int(-1)))
        );
        let Some(Value::Section(train)) = doc.get("TRAIN") else {
            panic!("TRAIN should be a section");
        };
        assert_eq!(
            train.get("OPTIMIZER"),
            Some(&Value::Scalar(Scalar::Str("ADAM".to_string())))
        );
    }

    #[test]
    fn interprets_tuple_literals() {
        let doc = Document::from_str("DATA:\n  PATCH_SIZE: (64, 64, 1)\n").unwrap();
        let Some(Value::Section(data)) = doc.get("DATA") else {
            panic!("DATA should be a section");
        };
        assert_eq!(
            data.get("PATCH_SIZE"),
            Some(&Value::Tuple(vec![
                Scalar::Int(64),
                Scalar::Int(64),
                Scalar::Int(1)
            ]))
        );
    }

    #[test]
    fn interprets_exponent_floats() {
        let doc = Document::from_str("TRAIN:\n  LR: 4.E-4\n").unwrap();
        let Some(Value::Section(train)) = doc.get("TRAIN") else {
            panic!("TRAIN should be a section");
        };
        match train.get("LR") {
            Some(Value::Scalar(Scalar::Float(f))) => assert!((f - 4e-4).abs() < 1e-12),
            other => panic!("LR should be a float, got {other:?}"),
        }
    }

    #[test]
    fn interprets_python_style_booleans() {
        let doc = Document::from_str("AUGMENTOR:\n  ENABLE: True\n  VFLIP: False\n").unwrap();
        let Some(Value::Section(aug)) = doc.get("AUGMENTOR") else {
            panic!("AUGMENTOR should be a section");
        };
        assert_eq!(aug.get("ENABLE"), Some(&Value::Scalar(Scalar::Bool(true))));
        assert_eq!(aug.get("VFLIP"), Some(&Value::Scalar(Scalar::Bool(false))));
    }

    #[test]
    fn keeps_words_as_strings() {
        let doc = Document::from_str("MODEL:\n  ARCHITECTURE: unet\n  KERNEL_INIT: 'he_normal'\n")
            .unwrap();
        let Some(Value::Section(model)) = doc.get("MODEL") else {
            panic!("MODEL should be a section");
        };
        assert_eq!(
            model.get("ARCHITECTURE"),
            Some(&Value::Scalar(Scalar::Str("unet".to_string())))
        );
        assert_eq!(
            model.get("KERNEL_INIT"),
            Some(&Value::Scalar(Scalar::Str("he_normal".to_string())))
        );
    }

    #[test]
    fn parses_flow_lists() {
        let doc = Document::from_str("MODEL:\n  FEATURE_MAPS: [32, 64, 96]\n").unwrap();
        let Some(Value::Section(model)) = doc.get("MODEL") else {
            panic!("MODEL should be a section");
        };
        assert_eq!(
            model.get("FEATURE_MAPS"),
            Some(&Value::List(vec![
                Scalar::Int(32),
                Scalar::Int(64),
                Scalar::Int(96)
            ]))
        );
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = Document::from_str("DATA: [unclosed\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn rejects_scalar_root() {
        let err = Document::from_str("just a scalar").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn inf_and_nan_stay_strings() {
        assert_eq!(parse_scalar("inf"), Scalar::Str("inf".to_string()));
        assert_eq!(parse_scalar("nan"), Scalar::Str("nan".to_string()));
        assert_eq!(parse_scalar("1e-3"), Scalar::Float(1e-3));
    }
}
