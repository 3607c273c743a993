//! semroute core
//!
//! Route definitions and the pure (non-network) half of dynamic route
//! synthesis:
//! - [`Route`] and [`RouteConfig`]: named intents with example utterances,
//!   loaded from and saved to JSON or YAML files
//! - [`schema`]: structural descriptions of models and functions used as
//!   LLM prompt context
//! - [`validator`]: the structural contract every route payload must meet
//!
//! Routing incoming text to routes is out of scope; this crate only builds
//! and manages route definitions.

pub mod error;
pub mod route;
pub mod route_config;
pub mod schema;
pub mod validator;

pub use error::{Result, RouteError};
pub use route::{routes_from_value, Route};
pub use route_config::{FileFormat, RouteConfig};
pub use schema::{FieldSpec, ParamSpec, Schema, SchemaSource};
pub use validator::{is_valid, validate_route_config, validate_value, ValidationError};
