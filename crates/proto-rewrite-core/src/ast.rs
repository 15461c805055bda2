//! Schema file AST: messages, enums and their fields.
//!
//! The tree is strictly nested: a [`File`] owns its top-level messages and
//! enums, and every [`Message`] owns its nested ones. Sibling order is
//! insertion order and is preserved by every pass.

use serde::{Deserialize, Serialize};

use crate::error::RewriteError;

/// A schema file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }

    /// Parse a file from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, RewriteError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RewriteError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A message definition, possibly containing nested messages and enums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MessageField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: MessageField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }
}

/// Cardinality label of a message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    Optional,
    Required,
    Repeated,
}

/// A single field of a message. Opaque to the passes; only compared for
/// structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<FieldLabel>,
    pub type_name: String,
    pub name: String,
    pub index: u32,
}

impl MessageField {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, index: u32) -> Self {
        Self {
            label: None,
            type_name: type_name.into(),
            name: name.into(),
            index,
        }
    }

    pub fn with_label(mut self, label: FieldLabel) -> Self {
        self.label = Some(label);
        self
    }
}

/// An enumerated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EnumField>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: EnumField) -> Self {
        self.fields.push(field);
        self
    }

    /// Whether some constant of this enum has the value 0.
    pub fn has_zero(&self) -> bool {
        self.fields.iter().any(|f| f.index == 0)
    }
}

/// A named enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumField {
    pub name: String,
    pub index: i32,
}

impl EnumField {
    pub fn new(name: impl Into<String>, index: i32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Structural identity of two message definitions.
///
/// Deep and order-sensitive: fields, nested messages and nested enums must
/// match exactly, recursively.
pub fn is_same_type(a: &Message, b: &Message) -> bool {
    a == b
}
