//! Naming convention utilities for Go code generation.
//!
//! These follow the rules the Go protobuf generator uses, so names emitted by
//! protogen passes line up with the identifiers of the generated structs.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `api_version` | [`go_camel_case`] | `ApiVersion` |
//! | `["Outer", "Inner"]` | [`camel_case_slice`] | `Outer_Inner` |
//! | `descriptor` | [`go_field_name`] | `Descriptor_` |
//! | `Rule` | [`receiver_binding`] | `r` |

/// Method names the Go generator already puts on every message struct.
/// A field whose camel-cased name collides gets a trailing underscore.
const RESERVED_METHOD_NAMES: &[&str] = &[
    "Reset",
    "String",
    "ProtoMessage",
    "Marshal",
    "Unmarshal",
    "ExtensionRangeArray",
    "ExtensionMap",
    "Descriptor",
];

/// Convert a schema identifier to an exported Go identifier.
///
/// An underscore followed by a lowercase letter is dropped and the letter is
/// upper-cased; any other underscore is kept. A leading underscore becomes
/// `X`. Digits pass through unchanged.
///
/// # Examples
///
/// ```
/// use protogen_core::naming::go_camel_case;
///
/// assert_eq!(go_camel_case("api_version"), "ApiVersion");
/// assert_eq!(go_camel_case("_hidden"), "XHidden");
/// assert_eq!(go_camel_case("Outer_Inner"), "Outer_Inner");
/// assert_eq!(go_camel_case("rule_2"), "Rule_2");
/// ```
pub fn go_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 1);
    let mut i = 0;

    if chars.first() == Some(&'_') {
        out.push('X');
        i = 1;
    }

    while i < chars.len() {
        let c = chars[i];
        let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);

        if c == '_' && next_is_lower {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            i += 1;
            continue;
        }

        out.push(c.to_ascii_uppercase());
        while chars.get(i + 1).is_some_and(char::is_ascii_lowercase) {
            i += 1;
            out.push(chars[i]);
        }
        i += 1;
    }

    out
}

/// Camel-case a nested type path into a single Go type name.
///
/// # Examples
///
/// ```
/// use protogen_core::naming::camel_case_slice;
///
/// assert_eq!(camel_case_slice(&["Rule"]), "Rule");
/// assert_eq!(camel_case_slice(&["Check", "ProxyRequest"]), "Check_ProxyRequest");
/// assert_eq!(camel_case_slice(&["check", "proxy_request"]), "CheckProxyRequest");
/// ```
pub fn camel_case_slice<S: AsRef<str>>(path: &[S]) -> String {
    let joined = path.iter().map(|s| s.as_ref()).collect::<Vec<&str>>().join("_");
    go_camel_case(&joined)
}

/// Go struct field name for a schema field.
///
/// # Examples
///
/// ```
/// use protogen_core::naming::go_field_name;
///
/// assert_eq!(go_field_name("namespace"), "Namespace");
/// assert_eq!(go_field_name("string"), "String_");
/// ```
pub fn go_field_name(field: &str) -> String {
    let name = go_camel_case(field);
    if RESERVED_METHOD_NAMES.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// Single-letter method receiver for a Go type: its first character,
/// lower-cased.
///
/// # Examples
///
/// ```
/// use protogen_core::naming::receiver_binding;
///
/// assert_eq!(receiver_binding("Rule"), "r");
/// assert_eq!(receiver_binding("Outer_Inner"), "o");
/// ```
pub fn receiver_binding(type_name: &str) -> String {
    type_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}
