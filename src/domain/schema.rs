use serde_json::Value;
use std::fmt;

// Primitive JSON kinds a request schema can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Object,
    Array,
}

impl ValueKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            // Numbers written with a fraction or exponent parse as f64 only.
            ValueKind::Integer => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_f64(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Object => value.is_object(),
            ValueKind::Array => value.is_array(),
        }
    }

    // Type label clients already match on in error messages.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::String => "<class 'str'>",
            ValueKind::Integer => "<class 'int'>",
            ValueKind::Float => "<class 'float'>",
            ValueKind::Boolean => "<class 'bool'>",
            ValueKind::Object => "<class 'dict'>",
            ValueKind::Array => "<class 'list'>",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Client-caused request shape violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingKey { key: String },
    WrongType { key: String, expected: ValueKind },
}

impl UsageError {
    pub fn code(&self) -> u8 {
        match self {
            UsageError::MissingKey { .. } => 1,
            UsageError::WrongType { .. } => 2,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            UsageError::MissingKey { key } | UsageError::WrongType { key, .. } => key,
        }
    }

    pub fn message(&self) -> String {
        match self {
            UsageError::MissingKey { key } => format!("Request body must contain key '{key}'."),
            // Fixed 'context' literal, whatever the key. Clients match this text.
            UsageError::WrongType { expected, .. } => {
                format!("Value type of 'context' must be {expected}.")
            }
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for UsageError {}

#[derive(Debug, Clone)]
struct FieldSpec {
    name: &'static str,
    kind: ValueKind,
}

// Ordered set of required fields. Validation stops at the first failure.
#[derive(Debug, Clone, Default)]
pub struct RequestSchema {
    fields: Vec<FieldSpec>,
}

impl RequestSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, name: &'static str, kind: ValueKind) -> Self {
        self.fields.push(FieldSpec { name, kind });
        self
    }

    pub fn validate(&self, body: &Value) -> Result<(), UsageError> {
        // Non-object bodies carry no keys, so the first field reports missing.
        let object = body.as_object();

        for field in &self.fields {
            match object.and_then(|map| map.get(field.name)) {
                None => {
                    return Err(UsageError::MissingKey {
                        key: field.name.to_string(),
                    });
                }
                Some(value) if !field.kind.matches(value) => {
                    return Err(UsageError::WrongType {
                        key: field.name.to_string(),
                        expected: field.kind,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
