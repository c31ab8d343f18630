//! Declared-default lookup

use protogen_core::{FieldDescriptor, try_get};

/// Options key carrying a field's declared default
pub const DEFAULT_OPTION_KEY: &str = "default";

/// Declared default of a field, as written in the schema.
///
/// Returns `None` when there is no field, no default, or the default entry
/// cannot be read as text. The value is never parsed or checked against the
/// field's type.
pub fn get_default(field: Option<&FieldDescriptor>, key: &str) -> Option<String> {
    let field = field?;
    try_get::<String>(field.options.as_ref(), key)
}
