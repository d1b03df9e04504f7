//! JSON Patch support for resource patching
//!
//! This module defines the types used to patch resources:
//! - JsonPointer: RFC 6901 pointer into a JSON document (e.g. `/Spec/Plan`)
//! - PatchOperation: one RFC 6902 operation (add, remove, replace, move, copy, test)
//! - JsonPatch: an ordered operation array, applied all-or-nothing
//! - PatchType: the patch media types a caller may name
//!
//! Resources are patched in their serialized form: the stored entity is
//! converted to a `serde_json::Value`, the patch is applied to a copy, and the
//! result is decoded back only after validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Patch media types
// =============================================================================

/// Patch media type named by the caller
///
/// Only [`PatchType::JsonPatch`] is executable. The other two are recognised
/// so that callers get `Unsupported` rather than `InvalidArgument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchType {
    /// `application/json-patch+json` (RFC 6902)
    JsonPatch,
    /// `application/merge-patch+json` (RFC 7396)
    MergePatch,
    /// `application/strategic-merge-patch+json`
    StrategicMergePatch,
}

impl PatchType {
    /// Every recognised patch type
    pub const ALL: [PatchType; 3] = [
        PatchType::JsonPatch,
        PatchType::MergePatch,
        PatchType::StrategicMergePatch,
    ];

    /// The media type string for this patch type
    pub fn media_type(self) -> &'static str {
        match self {
            PatchType::JsonPatch => "application/json-patch+json",
            PatchType::MergePatch => "application/merge-patch+json",
            PatchType::StrategicMergePatch => "application/strategic-merge-patch+json",
        }
    }

    /// Look up a patch type by its exact media type string
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.media_type() == media_type)
    }

    /// Whether patches of this type can be executed
    pub fn is_supported(self) -> bool {
        matches!(self, PatchType::JsonPatch)
    }
}

impl fmt::Display for PatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

// =============================================================================
// JsonPointer
// =============================================================================

/// Error type for JSON pointer parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerParseError {
    /// Non-empty pointer that does not start with `/`
    #[error("pointer '{0}' must be empty or start with '/'")]
    MissingLeadingSlash(String),
    /// `~` not followed by `0` or `1`
    #[error("invalid escape sequence at position {0}")]
    InvalidEscape(usize),
}

/// A pointer into a JSON document (RFC 6901)
///
/// | Syntax | Meaning |
/// |--------|---------|
/// | (empty) | Whole document |
/// | `/Spec` | Object member `Spec` |
/// | `/Spec/Plan` | Nested member |
/// | `/Status/messages/0` | Array element |
/// | `/a~1b` | Member named `a/b` |
/// | `/m~0n` | Member named `m~n` |
///
/// # Examples
///
/// ```
/// use consolemock_core::JsonPointer;
///
/// let plan: JsonPointer = "/Spec/Plan".parse().unwrap();
/// assert_eq!(plan.tokens(), ["Spec", "Plan"]);
/// assert_eq!(plan, JsonPointer::root().key("Spec").key("Plan"));
///
/// let escaped: JsonPointer = "/a~1b".parse().unwrap();
/// assert_eq!(escaped.tokens(), ["a/b"]);
/// assert_eq!(escaped.to_string(), "/a~1b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JsonPointer {
    tokens: Vec<String>,
}

impl JsonPointer {
    /// The pointer to the whole document
    pub fn root() -> Self {
        JsonPointer { tokens: Vec::new() }
    }

    /// Create a pointer from unescaped reference tokens
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        JsonPointer { tokens }
    }

    /// The unescaped reference tokens
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Check if this is the root pointer
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token (builder style)
    pub fn key(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Get the parent pointer (None for root)
    pub fn parent(&self) -> Option<JsonPointer> {
        self.split_last().map(|(parent, _)| parent)
    }

    /// Split into the parent pointer and the last token
    pub fn split_last(&self) -> Option<(JsonPointer, &str)> {
        let (last, parent) = self.tokens.split_last()?;
        Some((JsonPointer::from_tokens(parent.to_vec()), last.as_str()))
    }

    /// Check if this pointer is a proper prefix of `other`
    pub fn is_strict_ancestor_of(&self, other: &JsonPointer) -> bool {
        self.tokens.len() < other.tokens.len() && other.tokens.starts_with(&self.tokens)
    }

    /// Render as an escaped pointer string
    pub fn to_pointer_string(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push('/');
            out.push_str(&token.replace('~', "~0").replace('/', "~1"));
        }
        out
    }
}

fn unescape_token(raw: &str, offset: usize) -> Result<String, PointerParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, '0')) => out.push('~'),
            Some((_, '1')) => out.push('/'),
            _ => return Err(PointerParseError::InvalidEscape(offset + i)),
        }
    }
    Ok(out)
}

impl FromStr for JsonPointer {
    type Err = PointerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(JsonPointer::root());
        }
        let Some(rest) = s.strip_prefix('/') else {
            return Err(PointerParseError::MissingLeadingSlash(s.to_string()));
        };

        let mut tokens = Vec::new();
        let mut offset = 1;
        for raw in rest.split('/') {
            tokens.push(unescape_token(raw, offset)?);
            offset += raw.len() + 1;
        }
        Ok(JsonPointer { tokens })
    }
}

impl TryFrom<String> for JsonPointer {
    type Error = PointerParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<JsonPointer> for String {
    fn from(p: JsonPointer) -> Self {
        p.to_pointer_string()
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pointer_string())
    }
}

// =============================================================================
// Patch operations
// =============================================================================

/// A single RFC 6902 operation
///
/// Deserializes from the standard wire form, e.g.
/// `{"op": "replace", "path": "/Spec/Plan", "value": "standard-medium"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Insert (or overwrite an object member) at `path`
    Add {
        /// Target location
        path: JsonPointer,
        /// Value to insert
        value: Value,
    },
    /// Remove the value at `path`
    Remove {
        /// Target location
        path: JsonPointer,
    },
    /// Replace the existing value at `path`
    Replace {
        /// Target location
        path: JsonPointer,
        /// Replacement value
        value: Value,
    },
    /// Remove the value at `from` and add it at `path`
    Move {
        /// Source location
        from: JsonPointer,
        /// Target location
        path: JsonPointer,
    },
    /// Copy the value at `from` to `path`
    Copy {
        /// Source location
        from: JsonPointer,
        /// Target location
        path: JsonPointer,
    },
    /// Fail unless the value at `path` equals `value`
    Test {
        /// Location to check
        path: JsonPointer,
        /// Expected value
        value: Value,
    },
}

impl PatchOperation {
    /// The target location of this operation
    pub fn path(&self) -> &JsonPointer {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Move { path, .. }
            | PatchOperation::Copy { path, .. }
            | PatchOperation::Test { path, .. } => path,
        }
    }
}

impl fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOperation::Add { path, value } => write!(f, "ADD {} = {}", path, value),
            PatchOperation::Remove { path } => write!(f, "REMOVE {}", path),
            PatchOperation::Replace { path, value } => write!(f, "REPLACE {} = {}", path, value),
            PatchOperation::Move { from, path } => write!(f, "MOVE {} -> {}", from, path),
            PatchOperation::Copy { from, path } => write!(f, "COPY {} -> {}", from, path),
            PatchOperation::Test { path, value } => write!(f, "TEST {} == {}", path, value),
        }
    }
}

// =============================================================================
// Patch errors
// =============================================================================

/// Error type for patch parsing and application
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The patch document is not a valid operation array
    #[error("malformed patch document: {0}")]
    Malformed(String),

    /// A location referenced by an operation does not exist
    #[error("path not found: {path}")]
    PathNotFound {
        /// The missing location
        path: String,
    },

    /// Traversal hit a scalar where a container was needed
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Location of the mismatch
        path: String,
        /// Expected type
        expected: &'static str,
        /// Actual type found
        found: &'static str,
    },

    /// Array reference token is not a valid index
    #[error("invalid array index '{token}' at {path}")]
    InvalidIndex {
        /// Location of the array
        path: String,
        /// The offending token
        token: String,
    },

    /// Array index past the end
    #[error("index out of bounds at {path}: {index} > {len}")]
    IndexOutOfBounds {
        /// Location of the array
        path: String,
        /// The requested index
        index: usize,
        /// The array length
        len: usize,
    },

    /// A `test` operation did not match
    #[error("test failed at {path}")]
    TestFailed {
        /// Location that was tested
        path: String,
    },

    /// A `move` whose target lies inside its source
    #[error("cannot move {from} into its own child {path}")]
    MoveIntoDescendant {
        /// Source location
        from: String,
        /// Target location
        path: String,
    },
}

// =============================================================================
// Pointer traversal
// =============================================================================

/// Parse an array reference token: decimal digits, no leading zeros
fn array_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

/// Helper to get type name for error messages
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Get the value a pointer refers to
///
/// # Examples
///
/// ```
/// use consolemock_core::{get_at_pointer, JsonPointer};
/// use serde_json::json;
///
/// let doc = json!({"Status": {"messages": ["a", "b"]}});
/// let ptr: JsonPointer = "/Status/messages/1".parse().unwrap();
/// assert_eq!(get_at_pointer(&doc, &ptr), Some(&json!("b")));
/// assert_eq!(get_at_pointer(&doc, &JsonPointer::root()), Some(&doc));
/// ```
pub fn get_at_pointer<'a>(value: &'a Value, pointer: &JsonPointer) -> Option<&'a Value> {
    let mut current = value;
    for token in pointer.tokens() {
        current = match current {
            Value::Object(obj) => obj.get(token)?,
            Value::Array(arr) => arr.get(array_index(token)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to the value a pointer refers to
pub fn get_at_pointer_mut<'a>(value: &'a mut Value, pointer: &JsonPointer) -> Option<&'a mut Value> {
    let mut current = value;
    for token in pointer.tokens() {
        current = match current {
            Value::Object(obj) => obj.get_mut(token)?,
            Value::Array(arr) => arr.get_mut(array_index(token)?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn parent_mut<'a>(root: &'a mut Value, parent: &JsonPointer) -> Result<&'a mut Value, PatchError> {
    get_at_pointer_mut(root, parent).ok_or_else(|| PatchError::PathNotFound {
        path: parent.to_string(),
    })
}

fn add_at_pointer(root: &mut Value, path: &JsonPointer, value: Value) -> Result<(), PatchError> {
    let Some((parent_ptr, last)) = path.split_last() else {
        *root = value;
        return Ok(());
    };

    match parent_mut(root, &parent_ptr)? {
        Value::Object(obj) => {
            obj.insert(last.to_string(), value);
            Ok(())
        }
        Value::Array(arr) => {
            if last == "-" {
                arr.push(value);
                return Ok(());
            }
            let index = array_index(last).ok_or_else(|| PatchError::InvalidIndex {
                path: parent_ptr.to_string(),
                token: last.to_string(),
            })?;
            if index > arr.len() {
                return Err(PatchError::IndexOutOfBounds {
                    path: parent_ptr.to_string(),
                    index,
                    len: arr.len(),
                });
            }
            arr.insert(index, value);
            Ok(())
        }
        other => Err(PatchError::TypeMismatch {
            path: parent_ptr.to_string(),
            expected: "object or array",
            found: value_type_name(other),
        }),
    }
}

fn remove_at_pointer(root: &mut Value, path: &JsonPointer) -> Result<Value, PatchError> {
    let Some((parent_ptr, last)) = path.split_last() else {
        return Ok(std::mem::take(root));
    };

    match parent_mut(root, &parent_ptr)? {
        Value::Object(obj) => obj.remove(last).ok_or_else(|| PatchError::PathNotFound {
            path: path.to_string(),
        }),
        Value::Array(arr) => {
            let index = array_index(last).ok_or_else(|| PatchError::InvalidIndex {
                path: parent_ptr.to_string(),
                token: last.to_string(),
            })?;
            if index >= arr.len() {
                return Err(PatchError::IndexOutOfBounds {
                    path: parent_ptr.to_string(),
                    index,
                    len: arr.len(),
                });
            }
            Ok(arr.remove(index))
        }
        other => Err(PatchError::TypeMismatch {
            path: parent_ptr.to_string(),
            expected: "object or array",
            found: value_type_name(other),
        }),
    }
}

fn apply_operation(root: &mut Value, op: &PatchOperation) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } => add_at_pointer(root, path, value.clone()),
        PatchOperation::Remove { path } => remove_at_pointer(root, path).map(|_| ()),
        PatchOperation::Replace { path, value } => {
            let target = get_at_pointer_mut(root, path).ok_or_else(|| PatchError::PathNotFound {
                path: path.to_string(),
            })?;
            *target = value.clone();
            Ok(())
        }
        PatchOperation::Move { from, path } => {
            if from == path {
                return get_at_pointer(root, from)
                    .map(|_| ())
                    .ok_or_else(|| PatchError::PathNotFound {
                        path: from.to_string(),
                    });
            }
            if from.is_strict_ancestor_of(path) {
                return Err(PatchError::MoveIntoDescendant {
                    from: from.to_string(),
                    path: path.to_string(),
                });
            }
            let value = remove_at_pointer(root, from)?;
            add_at_pointer(root, path, value)
        }
        PatchOperation::Copy { from, path } => {
            let value = get_at_pointer(root, from)
                .cloned()
                .ok_or_else(|| PatchError::PathNotFound {
                    path: from.to_string(),
                })?;
            add_at_pointer(root, path, value)
        }
        PatchOperation::Test { path, value } => {
            let actual = get_at_pointer(root, path).ok_or_else(|| PatchError::PathNotFound {
                path: path.to_string(),
            })?;
            if actual == value {
                Ok(())
            } else {
                Err(PatchError::TestFailed {
                    path: path.to_string(),
                })
            }
        }
    }
}

// =============================================================================
// JsonPatch
// =============================================================================

/// An RFC 6902 patch document: an ordered list of operations
///
/// Application is all-or-nothing: [`JsonPatch::apply`] works on a copy of the
/// input and only returns the new document if every operation succeeded.
///
/// # Examples
///
/// ```
/// use consolemock_core::JsonPatch;
/// use serde_json::json;
///
/// let patch: JsonPatch =
///     r#"[{"op": "replace", "path": "/Spec/Plan", "value": "standard-medium"}]"#
///         .parse()
///         .unwrap();
/// let doc = json!({"Spec": {"Plan": "standard-small"}});
/// let patched = patch.apply(&doc).unwrap();
/// assert_eq!(patched["Spec"]["Plan"], "standard-medium");
/// // The input is untouched
/// assert_eq!(doc["Spec"]["Plan"], "standard-small");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPatch(Vec<PatchOperation>);

impl JsonPatch {
    /// Create a patch from operations
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        JsonPatch(operations)
    }

    /// The operations in application order
    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the patch has no operations
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply the patch to a copy of `document`, returning the new document
    pub fn apply(&self, document: &Value) -> Result<Value, PatchError> {
        let mut patched = document.clone();
        for op in &self.0 {
            apply_operation(&mut patched, op)?;
        }
        Ok(patched)
    }
}

impl FromStr for JsonPatch {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| PatchError::Malformed(e.to_string()))
    }
}
