use crate::{PATH_SEPARATOR, REF_FIELD};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

type TraverseResult<'a> = Result<&'a Value, TraverserError>;
type TraverseTypeResult<'a, T> = Result<&'a T, TraverserError>;

/// Error types that can occur while navigating a specification document.
#[derive(Debug, PartialEq)]
pub enum TraverserError {
    /// A required field was not found in the node.
    MissingField(String),

    /// The found type does not match the expected type.
    TypeMismatch { expected: String, found: String },

    /// A `$ref` chain points back at itself.
    CyclicReference(String),
}

impl TraverserError {
    #[inline]
    pub(crate) fn missing_field(message: impl Into<String>) -> Self {
        Self::MissingField(message.into())
    }

    #[inline]
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    #[inline]
    pub(crate) fn cyclic_reference(message: impl Into<String>) -> Self {
        Self::CyclicReference(message.into())
    }
}

impl Display for TraverserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TraverserError::MissingField(field) => {
                write!(f, "Missing field: {}", field)
            }
            TraverserError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
            TraverserError::CyclicReference(field) => {
                write!(f, "Cyclic reference: {}", field)
            }
        }
    }
}

impl std::error::Error for TraverserError {}

/// Returns the JSON type name of a value, used in type mismatch messages.
pub(crate) fn serde_type_name(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// Read-only navigator over a specification document.
///
/// Owns the parsed specification and resolves local `$ref` pointers
/// (`#/components/...`) against it. Never mutates the tree.
#[derive(Debug)]
pub struct OpenApiTraverser {
    specification: Value,
}

impl OpenApiTraverser {
    /// Creates a new traverser from a specification document.
    ///
    /// # Returns
    /// The traverser, or a `TypeMismatch` error if the root is not a JSON object.
    pub fn new(specification: Value) -> Result<Self, TraverserError> {
        Self::require_object(&specification)?;
        Ok(Self { specification })
    }

    pub fn specification(&self) -> &Value {
        &self.specification
    }

    /// Resolves a node that might be a `{"$ref": "#/..."}` reference.
    ///
    /// # Returns
    /// The node itself when it carries no `$ref`, otherwise the referenced node
    /// with any chained references followed.
    pub fn resolve_possible_ref<'node>(&'node self, node: &'node Value) -> TraverseResult<'node> {
        let mut seen_references = HashSet::new();
        self.follow_reference(node, &mut seen_references)
    }

    fn follow_reference<'node>(
        &'node self,
        node: &'node Value,
        seen_references: &mut HashSet<&'node str>,
    ) -> TraverseResult<'node> {
        let ref_string = match Self::get_as_str(node, REF_FIELD) {
            Ok(ref_string) => ref_string,
            Err(_) => return Ok(node),
        };
        if !seen_references.insert(ref_string) {
            return Err(TraverserError::cyclic_reference(ref_string));
        }

        // Only document-local pointers can be resolved; the pointer keeps its
        // ~0/~1 escapes because Value::pointer decodes them.
        let pointer = match ref_string.strip_prefix('#') {
            Some(pointer) if pointer.is_empty() || pointer.starts_with(PATH_SEPARATOR) => pointer,
            _ => return Err(TraverserError::missing_field(ref_string)),
        };
        match self.specification.pointer(pointer) {
            None => Err(TraverserError::missing_field(ref_string)),
            Some(target) => self.follow_reference(target, seen_references),
        }
    }

    fn get_as_type<'n, T, F>(node: &'n Value, field: &str, converter: F) -> TraverseTypeResult<'n, T>
    where
        T: ?Sized,
        F: Fn(&'n Value) -> TraverseTypeResult<'n, T>,
    {
        match node.get(field) {
            None => Err(TraverserError::missing_field(field)),
            Some(found) => converter(found),
        }
    }

    fn require_type<'n, T, F>(
        node: &'n Value,
        converter: F,
        type_name: &'static str,
    ) -> Result<T, TraverserError>
    where
        F: Fn(&'n Value) -> Option<T>,
    {
        converter(node).ok_or_else(|| TraverserError::type_mismatch(type_name, serde_type_name(node)))
    }

    pub(crate) fn get_as_str<'n>(node: &'n Value, field: &str) -> TraverseTypeResult<'n, str> {
        Self::get_as_type(node, field, Self::require_str)
    }

    pub(crate) fn get_as_object<'n>(
        node: &'n Value,
        field: &str,
    ) -> TraverseTypeResult<'n, Map<String, Value>> {
        Self::get_as_type(node, field, Self::require_object)
    }

    pub(crate) fn get_as_array<'n>(node: &'n Value, field: &str) -> TraverseTypeResult<'n, Vec<Value>> {
        Self::get_as_type(node, field, Self::require_array)
    }

    pub(crate) fn get_as_bool(node: &Value, field: &str) -> Result<bool, TraverserError> {
        match node.get(field) {
            None => Err(TraverserError::missing_field(field)),
            Some(found) => Self::require_bool(found),
        }
    }

    pub(crate) fn require_bool(node: &Value) -> Result<bool, TraverserError> {
        Self::require_type(node, Value::as_bool, "boolean")
    }

    pub(crate) fn require_str(node: &Value) -> TraverseTypeResult<'_, str> {
        Self::require_type(node, Value::as_str, "string")
    }

    pub(crate) fn require_object(node: &Value) -> TraverseTypeResult<'_, Map<String, Value>> {
        Self::require_type(node, Value::as_object, "object")
    }

    pub(crate) fn require_array(node: &Value) -> TraverseTypeResult<'_, Vec<Value>> {
        Self::require_type(node, Value::as_array, "array")
    }
}
