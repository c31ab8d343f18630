#![allow(non_snake_case)]

use super::*;
use protogen_core::{FieldType, GeneratorConfig, Label, MessageDescriptor};
use serde_json::json;
use test_case::test_case;

fn message(name: &str, fields: Vec<FieldDescriptor>) -> MessageDescriptor {
    MessageDescriptor {
        name: name.to_string(),
        fields,
        ..MessageDescriptor::default()
    }
}

fn with_default(field: FieldDescriptor, value: &str) -> FieldDescriptor {
    field.with_options(json!({ "default": value }))
}

fn metadata() -> FieldDescriptor {
    FieldDescriptor::new("metadata", 1, FieldType::Message)
        .with_type_name(".sensu.core.v2.ObjectMeta")
}

fn render(descriptor: &MessageDescriptor) -> String {
    let scoped = ScopedMessage {
        path: vec![descriptor.name.as_str()],
        descriptor,
    };
    render_defaults_method(&scoped, &DefaulterConfig::default())
}

// ============================================================================
// Method shape
// ============================================================================

#[test]
fn render_defaults_method___no_defaults___empty_method_with_blank_lines() {
    let check = message("Check", vec![FieldDescriptor::new("name", 1, FieldType::String)]);

    let text = render(&check);

    assert_eq!(text, "\nfunc (c *Check) Default() {\n}\n\n");
}

#[test]
fn render_defaults_method___nested_message___joined_type_name_and_simple_kind() {
    let inner = message("Inner", vec![metadata()]);
    let scoped = ScopedMessage {
        path: vec!["Outer", "Inner"],
        descriptor: &inner,
    };

    let text = render_defaults_method(&scoped, &DefaulterConfig::default());

    assert!(text.contains("func (o *Outer_Inner) Default() {"));
    assert!(text.contains("\to.Kind = \"Inner\"\n"));
}

#[test]
fn render_defaults_method___custom_config___names_flow_into_output() {
    let rule = message(
        "Rule",
        vec![
            metadata(),
            FieldDescriptor::new("namespace", 2, FieldType::String)
                .with_options(json!({"(sensu.default)": "ops"})),
        ],
    );
    let config = DefaulterConfig {
        method_name: "SetDefaults".to_string(),
        option_key: "(sensu.default)".to_string(),
        kind_field: "TypeKind".to_string(),
        api_version_field: "APIVersion".to_string(),
        api_version_expr: "\"core/v2\"".to_string(),
        ..DefaulterConfig::default()
    };
    let scoped = ScopedMessage {
        path: vec!["Rule"],
        descriptor: &rule,
    };

    let text = render_defaults_method(&scoped, &config);

    assert_eq!(
        text,
        "\nfunc (r *Rule) SetDefaults() {\n\
         \tr.TypeKind = \"Rule\"\n\
         \tr.APIVersion = \"core/v2\"\n\
         \tr.Namespace = \"ops\"\n\
         }\n\n"
    );
}

// ============================================================================
// Identity preamble
// ============================================================================

#[test]
fn render_defaults_method___metadata_field___preamble_in_fixed_order() {
    let role = message("Role", vec![metadata()]);

    let text = render(&role);

    assert_eq!(
        text,
        "\nfunc (r *Role) Default() {\n\
         \tr.Kind = \"Role\"\n\
         \tr.ApiVersion = SchemeGroupVersion.GroupVersionString()\n\
         }\n\n"
    );
}

#[test]
fn render_defaults_method___metadata_not_first___preamble_still_leads() {
    let entity = message(
        "Entity",
        vec![
            with_default(FieldDescriptor::new("entity_class", 1, FieldType::String), "agent"),
            metadata(),
        ],
    );

    let text = render(&entity);
    let kind = text.find("e.Kind").unwrap();
    let api = text.find("e.ApiVersion").unwrap();
    let class = text.find("e.EntityClass").unwrap();

    assert!(kind < api && api < class);
}

#[test]
fn render_defaults_method___metadata_with_default___no_extra_line() {
    let rule = message("Rule", vec![with_default(metadata(), "{}")]);

    let text = render(&rule);

    assert!(!text.contains("r.Metadata"));
}

#[test]
fn render_defaults_method___field_named_like_metadata___no_preamble() {
    let hook = message(
        "Hook",
        vec![
            FieldDescriptor::new("Metadata", 1, FieldType::Message),
            FieldDescriptor::new("object_metadata", 2, FieldType::Message),
        ],
    );

    let text = render(&hook);

    assert!(!text.contains("Kind"));
    assert!(!text.contains("ApiVersion"));
}

// ============================================================================
// Per-field defaults
// ============================================================================

#[test]
fn render_defaults_method___string_default___quoted_verbatim() {
    let silenced = message(
        "Silenced",
        vec![with_default(
            FieldDescriptor::new("reason", 1, FieldType::String),
            r#"say "hi"\n"#,
        )],
    );

    let text = render(&silenced);

    assert!(text.contains("\ts.Reason = \"say \"hi\"\\n\"\n"));
}

#[test]
fn render_defaults_method___string_default_empty___empty_literal() {
    let asset = message(
        "Asset",
        vec![with_default(FieldDescriptor::new("sha512", 1, FieldType::String), "")],
    );

    let text = render(&asset);

    assert!(text.contains("\ta.Sha512 = \"\"\n"));
}

#[test_case(FieldType::Uint32, "60" ; "unsigned")]
#[test_case(FieldType::Int64, "-1" ; "signed")]
#[test_case(FieldType::Bool, "true" ; "boolean")]
#[test_case(FieldType::Double, "0.5" ; "floating")]
#[test_case(FieldType::Enum, "1" ; "enumeration")]
#[test_case(FieldType::Sint32, "not-a-number" ; "unvalidated")]
fn render_defaults_method___scalar_default___unquoted_verbatim(ty: FieldType, value: &str) {
    let check = message(
        "Check",
        vec![with_default(FieldDescriptor::new("interval", 1, ty), value)],
    );

    let text = render(&check);

    assert!(text.contains(&format!("\tc.Interval = {value}\n")));
}

#[test_case(FieldDescriptor::new("spec", 1, FieldType::Message) ; "message")]
#[test_case(FieldDescriptor::new("spec", 1, FieldType::Group) ; "group")]
#[test_case(FieldDescriptor::new("spec", 1, FieldType::Bytes) ; "bytes")]
#[test_case(FieldDescriptor::new("spec", 1, FieldType::String).with_label(Label::Repeated) ; "repeated string")]
#[test_case(FieldDescriptor::new("spec", 1, FieldType::Int32).with_label(Label::Repeated) ; "repeated scalar")]
#[test_case(
    FieldDescriptor::new("spec", 1, FieldType::Message)
        .with_label(Label::Repeated)
        .with_type_name(".sensu.Policy.SpecEntry") ;
    "map"
)]
fn render_defaults_method___unsupported_field___no_line(field: FieldDescriptor) {
    let policy = message("Policy", vec![with_default(field, "x")]);

    let text = render(&policy);

    assert!(!text.contains("Spec"), "unexpected line in {text:?}");
    assert_eq!(text, "\nfunc (p *Policy) Default() {\n}\n\n");
}

#[test]
fn render_defaults_method___lines_follow_declaration_order() {
    let check = message(
        "Check",
        vec![
            with_default(FieldDescriptor::new("timeout", 3, FieldType::Uint32), "10"),
            FieldDescriptor::new("command", 1, FieldType::String),
            with_default(FieldDescriptor::new("interval", 2, FieldType::Uint32), "60"),
            with_default(FieldDescriptor::new("publish", 4, FieldType::Bool), "true"),
        ],
    );

    let text = render(&check);

    assert_eq!(
        text,
        "\nfunc (c *Check) Default() {\n\
         \tc.Timeout = 10\n\
         \tc.Interval = 60\n\
         \tc.Publish = true\n\
         }\n\n"
    );
}

#[test]
fn render_defaults_method___reserved_field_name___suffixed() {
    let doc = message(
        "Doc",
        vec![with_default(FieldDescriptor::new("descriptor", 1, FieldType::String), "d")],
    );

    let text = render(&doc);

    assert!(text.contains("\td.Descriptor_ = \"d\"\n"));
}

// ============================================================================
// Pass lifecycle
// ============================================================================

#[test]
fn DefaulterPlugin___name___is_defaulter() {
    assert_eq!(DefaulterPlugin::new().name(), "defaulter");
    assert!(!DefaulterPlugin::new().description().is_empty());
}

#[test]
fn DefaulterPlugin___generate___before_init_is_invalid_state() {
    let mut pass = DefaulterPlugin::new();
    let mut out = CodeWriter::new();

    let result = pass.generate(&FileDescriptor::default(), &mut out);

    assert!(matches!(result, Err(GeneratorError::InvalidState { .. })));
    assert!(out.is_empty());
}

#[test]
fn DefaulterPlugin___init___reads_section_from_context() {
    let mut config = GeneratorConfig::default();
    config
        .set_section(
            "defaulter",
            DefaulterConfig {
                method_name: "ApplyDefaults".to_string(),
                ..DefaulterConfig::default()
            },
        )
        .unwrap();
    let ctx = GeneratorContext::new(config);
    let file = FileDescriptor {
        name: "a.proto".to_string(),
        messages: vec![message("Asset", vec![])],
        ..FileDescriptor::default()
    };
    let mut pass = DefaulterPlugin::new();
    let mut out = CodeWriter::new();

    pass.init(&ctx).unwrap();
    pass.generate(&file, &mut out).unwrap();

    assert_eq!(out.as_str(), "\nfunc (a *Asset) ApplyDefaults() {\n}\n\n");
}

#[test]
fn DefaulterPlugin___init___rejects_blank_section_value() {
    let json = r#"{"defaulter": {"method_name": ""}}"#;
    let ctx = GeneratorContext::new(GeneratorConfig::from_json(json.as_bytes()).unwrap());
    let mut pass = DefaulterPlugin::new();

    let result = pass.init(&ctx);

    assert!(matches!(result, Err(GeneratorError::ConfigError(_))));
}

#[test]
fn DefaulterPlugin___init___rejects_malformed_section() {
    let json = r#"{"defaulter": {"method_name": 5}}"#;
    let ctx = GeneratorContext::new(GeneratorConfig::from_json(json.as_bytes()).unwrap());
    let mut pass = DefaulterPlugin::new();

    assert!(pass.init(&ctx).is_err());
}

#[test]
fn DefaulterPlugin___generate___one_method_per_message_in_order() {
    let mut entry = message("LabelsEntry", vec![]);
    entry.options = Some(json!({"map_entry": true}));
    let mut outer = message("Event", vec![metadata()]);
    outer.nested_types = vec![message("Sequence", vec![]), entry];
    let file = FileDescriptor {
        name: "event.proto".to_string(),
        messages: vec![outer, message("Silenced", vec![])],
        ..FileDescriptor::default()
    };
    let mut pass = DefaulterPlugin::with_config(DefaulterConfig::default());
    let mut out = CodeWriter::new();

    pass.generate(&file, &mut out).unwrap();

    let headers: Vec<&str> = out
        .as_str()
        .lines()
        .filter(|l| l.starts_with("func "))
        .collect();
    assert_eq!(
        headers,
        vec![
            "func (e *Event) Default() {",
            "func (e *Event_Sequence) Default() {",
            "func (s *Silenced) Default() {",
        ]
    );
}
