//! Route collections and their JSON/YAML persistence

use crate::error::{Result, RouteError};
use crate::route::{routes_from_value, Route};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Serialization format of a route config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from a path's extension
    ///
    /// Only `.json`, `.yaml` and `.yml` are recognised.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            _ => Err(RouteError::UnsupportedFileType {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// An owned, ordered collection of routes
///
/// Behaves like a set keyed by name but is stored as a list: `add` does not
/// reject duplicates, `get` returns the first match and `remove` drops all of
/// them. There is no internal locking; mutation takes `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteConfig {
    routes: Vec<Route>,
}

impl RouteConfig {
    /// Create a config owning `routes`
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Load routes from a `.json`, `.yaml` or `.yml` file
    ///
    /// The extension is checked before the file is read. The payload must be
    /// a list of route objects (a single object is accepted too) and is
    /// validated before any route is built.
    ///
    /// # Example
    /// ```no_run
    /// use semroute_core::RouteConfig;
    ///
    /// # async fn example() -> semroute_core::Result<()> {
    /// let config = RouteConfig::from_file("routes.yaml").await?;
    /// println!("Loaded {} routes", config.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading route config from {}", path.display());

        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path).await?;
        Self::parse(&content, format)
    }

    /// Parse routes from in-memory content
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let value: Value = match format {
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        };

        let routes = routes_from_value(value).map_err(|e| {
            tracing::error!("Invalid route config: {}", e);
            e
        })?;
        Ok(Self::new(routes))
    }

    /// Save routes to a `.json`, `.yaml` or `.yml` file
    ///
    /// Nothing is written when the extension is unsupported.
    pub async fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::info!("Saving route config to {}", path.display());

        let format = FileFormat::from_path(path)?;
        let content = self.serialize(format)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Render routes in the given format
    pub fn serialize(&self, format: FileFormat) -> Result<String> {
        Ok(match format {
            FileFormat::Json => serde_json::to_string_pretty(&self.routes)?,
            FileFormat::Yaml => serde_yaml::to_string(&self.routes)?,
        })
    }

    /// List-of-objects form of the config
    pub fn to_dict(&self) -> Vec<Value> {
        self.routes.iter().map(Route::to_dict).collect()
    }

    /// Append a route, even if one with the same name exists
    pub fn add(&mut self, route: Route) {
        if self.routes.iter().any(|r| r.name == route.name) {
            tracing::warn!("Route `{}` already exists, adding a duplicate", route.name);
        }
        tracing::info!("Added route `{}`", route.name);
        self.routes.push(route);
    }

    /// First route called `name`
    pub fn get(&self, name: &str) -> Result<&Route> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RouteError::RouteNotFound {
                name: name.to_string(),
            })
    }

    /// Remove every route called `name`
    ///
    /// Logs an error and leaves the config untouched when there is none.
    pub fn remove(&mut self, name: &str) {
        if !self.routes.iter().any(|r| r.name == name) {
            tracing::error!("Route `{}` not found", name);
            return;
        }
        self.routes.retain(|r| r.name != name);
        tracing::info!("Removed route `{}`", name);
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Route names in order, duplicates included
    pub fn names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Consume the config and return its routes
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

impl From<Vec<Route>> for RouteConfig {
    fn from(routes: Vec<Route>) -> Self {
        Self::new(routes)
    }
}

impl<'a> IntoIterator for &'a RouteConfig {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
