#![deny(missing_docs)]

//! # Route Registry
//!
//! An owned, append-only store of route descriptions. Registration is the
//! single validation point; the stored sequence keeps insertion order and is
//! never deduplicated.

use crate::error::AppResult;
use crate::route::RouteDefinition;

/// Ordered collection of registered routes.
///
/// Instantiate one registry per document to generate. The registry is a plain
/// owned value; callers that share it across threads bring their own
/// synchronization.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteDefinition>,
}

impl RouteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `route` and appends it.
    ///
    /// On failure the registry is left untouched. Registering the same
    /// (path, method) pair twice is accepted; the later registration wins
    /// when the document is assembled.
    pub fn register(&mut self, route: RouteDefinition) -> AppResult<()> {
        route.validate()?;
        self.routes.push(route);
        Ok(())
    }

    /// The registered routes, in insertion order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Iterates the registered routes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition> {
        self.routes.iter()
    }

    /// Removes every registered route.
    ///
    /// Intended for reusing one registry across independent generation runs,
    /// e.g. between tests.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = &'a RouteDefinition;
    type IntoIter = std::slice::Iter<'a, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
