//! protogen-defaulter - `Default()` methods from schema-declared defaults
//!
//! For every message in a schema file this pass emits a Go method that
//! assigns each field its declared default:
//!
//! ```proto
//! message Rule {
//!   ObjectMeta metadata = 1;
//!   string namespace = 2 [(sensu.default) = "default"];
//! }
//! ```
//!
//! becomes
//!
//! ```go
//! func (r *Rule) Default() {
//! 	r.Kind = "Rule"
//! 	r.ApiVersion = SchemeGroupVersion.GroupVersionString()
//! 	r.Namespace = "default"
//! }
//! ```
//!
//! Only singular string, numeric, boolean and enum fields are assigned. A
//! default declared on any other field, or a default annotation that cannot
//! be read, is ignored rather than reported.

mod config;
mod emit;
mod extract;

pub use config::DefaulterConfig;
pub use emit::{DefaulterPlugin, emit_defaults_method, render_defaults_method};
pub use extract::{DEFAULT_OPTION_KEY, get_default};
