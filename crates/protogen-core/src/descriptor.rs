//! Read-only schema descriptor model.
//!
//! The model mirrors protobuf's `FileDescriptorProto` family closely enough
//! for generation passes, and is loaded from JSON:
//!
//! ```json
//! {"files": [{"name": "rbac.proto", "package": "sensu.core.v2",
//!   "messages": [{"name": "Rule", "fields": [
//!     {"name": "namespace", "number": 2, "type": "string",
//!      "options": {"default": "default"}}]}]}]}
//! ```
//!
//! Option maps (`options`) are kept as raw JSON and read through
//! [`try_get`](crate::options::try_get), so an option a pass does not
//! understand never fails the load.

use crate::options::try_get;
use crate::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set of schema files, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

/// One schema file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File path as given to the schema compiler, e.g. `core/v2/check.proto`
    pub name: String,

    /// Dotted schema package, e.g. `sensu.core.v2`
    #[serde(default)]
    pub package: String,

    /// Top-level messages in declaration order
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// A message type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Simple (unqualified) name
    pub name: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Messages declared inside this one
    #[serde(default)]
    pub nested_types: Vec<MessageDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// A field of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(default)]
    pub number: i32,

    #[serde(default)]
    pub label: Label,

    #[serde(rename = "type")]
    pub ty: FieldType,

    /// Referenced type for `message`, `enum` and `group` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Field cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[default]
    Optional,
    Required,
    Repeated,
}

/// Declared wire type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    Uint32,
    Enum,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
}

/// Classification of a field for literal emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    /// Singular `string` fields; literals are quoted
    String,
    /// Singular numeric, boolean and enum fields; literals are emitted bare
    Scalar,
    /// Everything else: messages, groups, bytes, and any repeated or map field
    Unsupported,
}

/// A message together with its position in the nesting hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedMessage<'a> {
    /// Simple names from the outermost enclosing message down to this one
    pub path: Vec<&'a str>,
    pub descriptor: &'a MessageDescriptor,
}

impl DescriptorSet {
    /// Parse a descriptor set from JSON.
    ///
    /// Accepts either `{"files": [...]}` or a single file object.
    pub fn from_json(bytes: &[u8]) -> GeneratorResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;

        let set = if value.get("files").is_some() {
            serde_json::from_value(value)?
        } else {
            DescriptorSet {
                files: vec![serde_json::from_value(value)?],
            }
        };

        set.validate()?;
        Ok(set)
    }

    /// Reject structurally unusable descriptors (empty names)
    pub fn validate(&self) -> GeneratorResult<()> {
        for file in &self.files {
            if file.name.trim().is_empty() {
                return Err(GeneratorError::DescriptorError(
                    "file name cannot be empty".to_string(),
                ));
            }
            for message in &file.messages {
                validate_message(&file.name, message)?;
            }
        }
        Ok(())
    }

    /// Total number of generated-for messages across all files
    pub fn message_count(&self) -> usize {
        self.files.iter().map(|f| f.messages().len()).sum()
    }
}

fn validate_message(file: &str, message: &MessageDescriptor) -> GeneratorResult<()> {
    if message.name.trim().is_empty() {
        return Err(GeneratorError::DescriptorError(format!(
            "{file}: message name cannot be empty"
        )));
    }
    if let Some(field) = message.fields.iter().find(|f| f.name.trim().is_empty()) {
        return Err(GeneratorError::DescriptorError(format!(
            "{file}: field #{} of {} has no name",
            field.number, message.name
        )));
    }
    for nested in &message.nested_types {
        validate_message(file, nested)?;
    }
    Ok(())
}

impl FileDescriptor {
    /// All messages of this file, depth-first in declaration order
    ///
    /// A message is yielded before the types nested inside it. Synthetic
    /// map-entry messages are skipped.
    pub fn messages(&self) -> Vec<ScopedMessage<'_>> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        for message in &self.messages {
            collect_messages(message, &mut path, &mut out);
        }
        out
    }

    /// Go package name for generated code
    ///
    /// Uses the `go_package` option when present (the part after `;`, or the
    /// last path segment), else the last segment of the schema package.
    pub fn go_package(&self) -> String {
        if let Some(go_package) = try_get::<String>(self.options.as_ref(), "go_package") {
            let name = match go_package.split_once(';') {
                Some((_, name)) => name,
                None => go_package.rsplit('/').next().unwrap_or(&go_package),
            };
            if !name.is_empty() {
                return name.replace(['.', '-'], "_");
            }
        }

        match self.package.rsplit('.').next() {
            Some(last) if !last.is_empty() => last.to_string(),
            _ => "main".to_string(),
        }
    }
}

fn collect_messages<'a>(
    message: &'a MessageDescriptor,
    path: &mut Vec<&'a str>,
    out: &mut Vec<ScopedMessage<'a>>,
) {
    if message.is_map_entry() {
        return;
    }
    path.push(&message.name);
    out.push(ScopedMessage {
        path: path.clone(),
        descriptor: message,
    });
    for nested in &message.nested_types {
        collect_messages(nested, path, out);
    }
    path.pop();
}

impl MessageDescriptor {
    /// Look up a field by its declared name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether this is a synthetic map-entry type
    pub fn is_map_entry(&self) -> bool {
        try_get::<bool>(self.options.as_ref(), "map_entry").unwrap_or(false)
    }
}

impl FieldDescriptor {
    /// Create a singular field with no options
    pub fn new(name: impl Into<String>, number: i32, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            number,
            label: Label::Optional,
            ty,
            type_name: None,
            options: None,
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    /// Set the referenced type name
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the options map
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }

    /// Classify the field for literal emission
    pub fn family(&self) -> TypeFamily {
        if self.is_repeated() {
            return TypeFamily::Unsupported;
        }
        match self.ty {
            FieldType::String => TypeFamily::String,
            FieldType::Double
            | FieldType::Float
            | FieldType::Int64
            | FieldType::Uint64
            | FieldType::Int32
            | FieldType::Fixed64
            | FieldType::Fixed32
            | FieldType::Bool
            | FieldType::Uint32
            | FieldType::Enum
            | FieldType::Sfixed32
            | FieldType::Sfixed64
            | FieldType::Sint32
            | FieldType::Sint64 => TypeFamily::Scalar,
            FieldType::Group | FieldType::Message | FieldType::Bytes => TypeFamily::Unsupported,
        }
    }
}
