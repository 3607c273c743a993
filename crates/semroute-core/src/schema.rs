//! Schema extraction for dynamic route synthesis
//!
//! A [`Schema`] is a short structural description of something a route should
//! trigger: a data model or a function. The caller describes the entity with a
//! [`SchemaSource`], listing its fields or parameters explicitly, and
//! [`SchemaSource::extract`] renders the signature string that is later
//! embedded in the generation prompt.
//!
//! # Example
//! ```
//! use semroute_core::schema::{ParamSpec, SchemaSource};
//!
//! let source = SchemaSource::function(
//!     "get_weather",
//!     Some("Get current weather".to_string()),
//!     vec![ParamSpec::new("city").with_type("str")],
//!     Some("str".to_string()),
//! );
//!
//! let schema = source.extract().unwrap();
//! assert_eq!(schema.signature, "(city: str) -> str");
//! assert_eq!(schema.output.as_deref(), Some("str"));
//! ```

use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Placeholder used when a description or return type is absent
pub const NONE_LITERAL: &str = "None";

/// Return type assumed for every data model
const MODEL_RETURN_TYPE: &str = "str";

/// Structural description of a model or function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Model or function name
    pub name: String,

    /// Documentation, or the literal `"None"` when there is none
    pub description: String,

    /// Rendered parameter list and return type, e.g. `(city: str) -> str`
    pub signature: String,

    /// Declared return type; only set for functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Schema {
    /// Render the schema as pretty JSON for prompt embedding
    pub fn to_prompt_context(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// A declared field of a data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub type_name: String,
    /// Default value; only rendered when truthy
    #[serde(default)]
    pub default: Option<Value>,
}

impl FieldSpec {
    /// Create a field without a default
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default: None,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn render(&self) -> String {
        match &self.default {
            Some(default) if is_truthy(default) => {
                format!("{}: {} = {}", self.name, self.type_name, default)
            }
            _ => format!("{}: {}", self.name, self.type_name),
        }
    }
}

/// A formal parameter of a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(default)]
    pub type_name: Option<String>,
    /// Default value, already rendered as source text
    #[serde(default)]
    pub default: Option<String>,
}

impl ParamSpec {
    /// Create an unannotated parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            default: None,
        }
    }

    /// Set the type annotation
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn render(&self) -> String {
        match (&self.type_name, &self.default) {
            (Some(ty), Some(default)) => format!("{}: {} = {}", self.name, ty, default),
            (Some(ty), None) => format!("{}: {}", self.name, ty),
            (None, Some(default)) => format!("{}={}", self.name, default),
            (None, None) => self.name.clone(),
        }
    }
}

/// Entity a schema is extracted from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaSource {
    /// Structured data model with typed fields
    Model {
        name: String,
        doc: Option<String>,
        fields: Vec<FieldSpec>,
    },

    /// Callable with formal parameters
    Function {
        name: String,
        doc: Option<String>,
        params: Vec<ParamSpec>,
        return_type: Option<String>,
    },
}

impl SchemaSource {
    /// Describe a data model
    pub fn model(name: impl Into<String>, doc: Option<String>, fields: Vec<FieldSpec>) -> Self {
        SchemaSource::Model {
            name: name.into(),
            doc,
            fields,
        }
    }

    /// Describe a function
    pub fn function(
        name: impl Into<String>,
        doc: Option<String>,
        params: Vec<ParamSpec>,
        return_type: Option<String>,
    ) -> Self {
        SchemaSource::Function {
            name: name.into(),
            doc,
            params,
            return_type,
        }
    }

    /// Name of the described entity
    pub fn name(&self) -> &str {
        match self {
            SchemaSource::Model { name, .. } | SchemaSource::Function { name, .. } => name,
        }
    }

    /// Extract the schema
    ///
    /// Fails with [`RouteError::Schema`] when the entity name is empty or a
    /// field/parameter name is empty or repeated.
    pub fn extract(&self) -> Result<Schema> {
        match self {
            SchemaSource::Model { name, doc, fields } => {
                check_names(name, fields.iter().map(|f| f.name.as_str()))?;

                let parts: Vec<String> = fields.iter().map(FieldSpec::render).collect();
                Ok(Schema {
                    name: name.clone(),
                    description: describe(doc),
                    signature: format!("({}) -> {}", parts.join(", "), MODEL_RETURN_TYPE),
                    output: None,
                })
            }
            SchemaSource::Function {
                name,
                doc,
                params,
                return_type,
            } => {
                check_names(name, params.iter().map(|p| p.name.as_str()))?;

                let parts: Vec<String> = params.iter().map(ParamSpec::render).collect();
                let mut signature = format!("({})", parts.join(", "));
                if let Some(ret) = return_type {
                    signature.push_str(" -> ");
                    signature.push_str(ret);
                }

                Ok(Schema {
                    name: name.clone(),
                    description: describe(doc),
                    signature,
                    output: Some(
                        return_type
                            .clone()
                            .unwrap_or_else(|| NONE_LITERAL.to_string()),
                    ),
                })
            }
        }
    }
}

fn describe(doc: &Option<String>) -> String {
    doc.clone().unwrap_or_else(|| NONE_LITERAL.to_string())
}

fn check_names<'a>(entity: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    if entity.trim().is_empty() {
        return Err(RouteError::Schema("entity name must not be empty".to_string()));
    }

    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(RouteError::Schema(format!(
                "`{}` declares a field with an empty name",
                entity
            )));
        }
        if !seen.insert(name) {
            return Err(RouteError::Schema(format!(
                "`{}` declares `{}` more than once",
                entity, name
            )));
        }
    }
    Ok(())
}

/// Falsy values: null, false, zero, and empty strings, lists or maps
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weather_model() -> SchemaSource {
        SchemaSource::model(
            "WeatherQuery",
            Some("Look up the weather for a location".to_string()),
            vec![
                FieldSpec::new("city", "str"),
                FieldSpec::new("units", "str").with_default("metric"),
                FieldSpec::new("days", "int").with_default(0),
                FieldSpec::new("detailed", "bool").with_default(false),
            ],
        )
    }

    #[test]
    fn test_model_signature_skips_falsy_defaults() {
        let schema = weather_model().extract().unwrap();

        assert_eq!(schema.name, "WeatherQuery");
        assert_eq!(schema.description, "Look up the weather for a location");
        assert_eq!(
            schema.signature,
            r#"(city: str, units: str = "metric", days: int, detailed: bool) -> str"#
        );
        assert!(schema.output.is_none());
    }

    #[test]
    fn test_model_without_doc() {
        let schema = SchemaSource::model("Empty", None, vec![]).extract().unwrap();
        assert_eq!(schema.description, "None");
        assert_eq!(schema.signature, "() -> str");
    }

    #[test]
    fn test_model_truthy_defaults() {
        let schema = SchemaSource::model(
            "Settings",
            None,
            vec![
                FieldSpec::new("retries", "int").with_default(3),
                FieldSpec::new("tags", "list").with_default(json!(["a"])),
                FieldSpec::new("verbose", "bool").with_default(true),
                FieldSpec::new("extra", "dict").with_default(json!({})),
            ],
        )
        .extract()
        .unwrap();

        assert_eq!(
            schema.signature,
            r#"(retries: int = 3, tags: list = ["a"], verbose: bool = true, extra: dict) -> str"#
        );
    }

    #[test]
    fn test_function_schema() {
        let schema = SchemaSource::function(
            "get_time",
            Some("Finds the current time in a timezone".to_string()),
            vec![
                ParamSpec::new("timezone").with_type("str"),
                ParamSpec::new("fmt").with_type("str").with_default("'%H:%M'"),
                ParamSpec::new("verbose").with_default("False"),
                ParamSpec::new("args"),
            ],
            Some("str".to_string()),
        )
        .extract()
        .unwrap();

        assert_eq!(schema.name, "get_time");
        assert_eq!(
            schema.signature,
            "(timezone: str, fmt: str = '%H:%M', verbose=False, args) -> str"
        );
        assert_eq!(schema.output.as_deref(), Some("str"));
    }

    #[test]
    fn test_function_without_doc_or_return_type() {
        let schema = SchemaSource::function("ping", None, vec![], None)
            .extract()
            .unwrap();

        assert_eq!(schema.description, "None");
        assert_eq!(schema.signature, "()");
        assert_eq!(schema.output.as_deref(), Some("None"));
    }

    #[test]
    fn test_signature_lists_each_name_once_in_order() {
        let names = ["alpha", "beta", "gamma", "delta"];
        let source = SchemaSource::function(
            "f",
            None,
            names.iter().map(|n| ParamSpec::new(*n).with_type("int")).collect(),
            None,
        );
        let signature = source.extract().unwrap().signature;

        let mut last = 0;
        for name in names {
            assert_eq!(signature.matches(name).count(), 1, "{} in {}", name, signature);
            let pos = signature.find(name).unwrap();
            assert!(pos >= last);
            last = pos;
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let source = SchemaSource::model(
            "Dup",
            None,
            vec![FieldSpec::new("a", "int"), FieldSpec::new("a", "str")],
        );
        let err = source.extract().unwrap_err();
        assert!(matches!(err, RouteError::Schema(_)));
        assert!(err.to_string().contains("`a`"));
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(SchemaSource::function("  ", None, vec![], None).extract().is_err());
        assert!(SchemaSource::function("f", None, vec![ParamSpec::new("")], None)
            .extract()
            .is_err());
    }

    #[test]
    fn test_prompt_context_omits_missing_output() {
        let model = weather_model().extract().unwrap().to_prompt_context();
        assert!(model.contains("\"name\": \"WeatherQuery\""));
        assert!(!model.contains("output"));

        let function = SchemaSource::function("ping", None, vec![], None)
            .extract()
            .unwrap()
            .to_prompt_context();
        assert!(function.contains("\"output\": \"None\""));
    }

    #[test]
    fn test_source_name_and_serde_tag() {
        let source = weather_model();
        assert_eq!(source.name(), "WeatherQuery");

        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["kind"], "model");
    }
}
