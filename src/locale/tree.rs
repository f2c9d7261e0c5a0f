//! Typed locale tree built from translation JSON.

use std::collections::{
    BTreeMap,
    HashMap,
};

use serde_json::Value;

use super::LocaleError;

/// A single node of a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleNode {
    /// Translatable string.
    Leaf(String),
    /// Nested namespace.
    Namespace(LocaleTree),
    /// Any other JSON value. Holds the JSON kind for diagnostics.
    Malformed(&'static str),
}

impl LocaleNode {
    /// Converts a JSON value into a node.
    ///
    /// Strings become leaves, objects become namespaces and everything else
    /// is kept as [`LocaleNode::Malformed`] so callers can decide how loud to be.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Leaf(s.clone()),
            Value::Object(map) => Self::Namespace(LocaleTree::from_map(map)),
            Value::Array(_) => Self::Malformed("array"),
            Value::Number(_) => Self::Malformed("number"),
            Value::Bool(_) => Self::Malformed("boolean"),
            Value::Null => Self::Malformed("null"),
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_namespace(&self) -> Option<&LocaleTree> {
        match self {
            Self::Namespace(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<&str> for LocaleNode {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_string())
    }
}

impl From<LocaleTree> for LocaleNode {
    fn from(value: LocaleTree) -> Self {
        Self::Namespace(value)
    }
}

/// Nested key/value structure holding one language's UI text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTree {
    /// Child nodes by key.
    entries: BTreeMap<String, LocaleNode>,
}

impl LocaleTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses translation JSON text.
    ///
    /// # Errors
    /// - JSON parse error
    /// - The document root is not an object
    pub fn parse(text: &str) -> Result<Self, LocaleError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// Builds a tree from an already parsed JSON document.
    ///
    /// # Errors
    /// Returns [`LocaleError::NotAnObject`] when the root is not a JSON object.
    pub fn from_json(json: &Value) -> Result<Self, LocaleError> {
        match json {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(LocaleError::NotAnObject { kind: json_kind(other) }),
        }
    }

    /// Builds a tree from the entries of a JSON object.
    fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let entries =
            map.iter().map(|(key, value)| (key.clone(), LocaleNode::from_json(value))).collect();
        Self { entries }
    }

    /// Adds or replaces an entry, returning the tree for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: impl Into<LocaleNode>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<LocaleNode>) {
        self.entries.insert(key.into(), node.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.entries.get(key)
    }

    /// Resolves a separated key path such as `settings.drawer.language`.
    #[must_use]
    pub fn lookup(&self, path: &str, separator: &str) -> Option<&LocaleNode> {
        let mut segments = path.split(separator);
        let first = segments.next()?;
        let mut node = self.entries.get(first)?;
        for segment in segments {
            node = node.as_namespace()?.entries.get(segment)?;
        }
        Some(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LocaleNode)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of string leaves at any depth.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                LocaleNode::Leaf(_) => 1,
                LocaleNode::Namespace(tree) => tree.leaf_count(),
                LocaleNode::Malformed(_) => 0,
            })
            .sum()
    }

    /// Flattens the tree into separated key paths.
    ///
    /// Malformed nodes are skipped.
    #[must_use]
    pub fn flatten(&self, separator: &str) -> HashMap<String, String> {
        let mut result = HashMap::new();
        self.flatten_into(separator, None, &mut result);
        result
    }

    /// Collects leaves under `prefix` into `result`.
    fn flatten_into(
        &self,
        separator: &str,
        prefix: Option<&str>,
        result: &mut HashMap<String, String>,
    ) {
        for (key, node) in &self.entries {
            let full_key = join_key(prefix, key, separator);
            match node {
                LocaleNode::Leaf(s) => {
                    result.insert(full_key, s.clone());
                }
                LocaleNode::Namespace(tree) => tree.flatten_into(separator, Some(&full_key), result),
                LocaleNode::Malformed(_) => {}
            }
        }
    }

    /// Converts back to JSON.
    ///
    /// Malformed nodes only remember their kind and come back as `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(key, node)| {
                let value = match node {
                    LocaleNode::Leaf(s) => Value::String(s.clone()),
                    LocaleNode::Namespace(tree) => tree.to_json(),
                    LocaleNode::Malformed(_) => Value::Null,
                };
                (key.clone(), value)
            })
            .collect();
        Value::Object(map)
    }
}

pub(crate) fn join_key(prefix: Option<&str>, key: &str, separator: &str) -> String {
    prefix.map_or_else(|| key.to_string(), |p| format!("{p}{separator}{key}"))
}

/// JSON type name used in error messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}
