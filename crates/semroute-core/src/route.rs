//! Route entity and construction from validated payloads

use crate::error::{Result, RouteError};
use crate::validator::{validate_value, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named intent with the example utterances that should trigger it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Route name, unique within a config by convention
    pub name: String,

    /// Example phrases; order is kept for display only
    pub utterances: Vec<String>,

    /// Optional human readable description
    #[serde(default)]
    pub description: Option<String>,
}

impl Route {
    /// Create a route without a description
    pub fn new<S: Into<String>>(name: impl Into<String>, utterances: Vec<S>) -> Self {
        Self {
            name: name.into(),
            utterances: utterances.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build a route from a single JSON object
    ///
    /// The object must carry `name` and `utterances`; anything else besides
    /// `description` is ignored.
    pub fn from_dict(data: &Value) -> Result<Self> {
        if data.is_array() {
            return Err(ValidationError::NotAnObject { index: None }.into());
        }
        validate_value(data)?;
        deserialize_route(data.clone(), None)
    }

    /// JSON object form of the route
    pub fn to_dict(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "utterances": self.utterances,
            "description": self.description,
        })
    }

    /// YAML form of the route
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Turn a validated payload into routes
///
/// Accepts a single object or a list of objects. The payload is checked with
/// [`validate_value`] first so nothing is constructed from a rejected
/// payload. No semantic checks beyond that: empty utterance lists and
/// duplicate names pass through.
pub fn routes_from_value(value: Value) -> Result<Vec<Route>> {
    validate_value(&value)?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| deserialize_route(item, Some(index)))
            .collect(),
        single => Ok(vec![deserialize_route(single, None)?]),
    }
}

fn deserialize_route(value: Value, index: Option<usize>) -> Result<Route> {
    serde_json::from_value(value).map_err(|e| {
        let location = index.map(|i| format!(" at index {}", i)).unwrap_or_default();
        tracing::warn!("Route config{} has malformed fields: {}", location, e);
        RouteError::InvalidConfig(ValidationError::Parse {
            message: format!("route{}: {}", location, e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_builder() {
        let route = Route::new("greet", vec!["hi", "hello"]).with_description("Greetings");

        assert_eq!(route.name, "greet");
        assert_eq!(route.utterances, vec!["hi".to_string(), "hello".to_string()]);
        assert_eq!(route.description.as_deref(), Some("Greetings"));
    }

    #[test]
    fn test_from_dict_without_description() {
        let route = Route::from_dict(&json!({
            "name": "get_weather",
            "utterances": ["a", "b", "c", "d", "e"]
        }))
        .unwrap();

        assert_eq!(route, Route::new("get_weather", vec!["a", "b", "c", "d", "e"]));
        assert!(route.description.is_none());
    }

    #[test]
    fn test_from_dict_ignores_unknown_keys() {
        let route = Route::from_dict(&json!({
            "name": "x",
            "utterances": [],
            "description": "d",
            "function_schema": {"name": "x"}
        }))
        .unwrap();
        assert_eq!(route.description.as_deref(), Some("d"));
    }

    #[test]
    fn test_from_dict_rejects_missing_keys() {
        let err = Route::from_dict(&json!({"name": "x"})).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidConfig(ValidationError::MissingKeys { .. })
        ));
    }

    #[test]
    fn test_from_dict_rejects_list() {
        let err = Route::from_dict(&json!([{"name": "x", "utterances": []}])).unwrap_err();
        assert!(matches!(err, RouteError::InvalidConfig(_)));
    }

    #[test]
    fn test_wrong_field_type_is_invalid_config() {
        let err = routes_from_value(json!({"name": "x", "utterances": 3})).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidConfig(ValidationError::Parse { .. })
        ));
    }

    #[test]
    fn test_routes_from_list_keeps_order_and_duplicates() {
        let routes = routes_from_value(json!([
            {"name": "a", "utterances": ["1"]},
            {"name": "b", "utterances": [], "description": null},
            {"name": "a", "utterances": ["2"]}
        ]))
        .unwrap();

        let names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
        assert!(routes[1].utterances.is_empty());
    }

    #[test]
    fn test_routes_from_single_object() {
        let routes = routes_from_value(json!({"name": "solo", "utterances": ["x"]})).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].name, "solo");
    }

    #[test]
    fn test_to_dict_and_yaml() {
        let route = Route::new("greet", vec!["hi"]);

        assert_eq!(
            route.to_dict(),
            json!({"name": "greet", "utterances": ["hi"], "description": null})
        );

        let yaml = route.to_yaml().unwrap();
        assert!(yaml.contains("name: greet"));
        assert!(yaml.contains("- hi"));

        let back: Route = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, route);
    }
}
