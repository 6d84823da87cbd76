//! Fixed routing table and the process-wide adapter context.
//!
//! Registration is explicit and static: the table is built exactly once from
//! [`crate::routes::registrations`] and never mutated afterward. Nothing here
//! scans the program's structure, so the cold-start cost of building the
//! table is constant in the size of the binary.

use lambda_runtime::tracing::debug;
use serde_json::json;
use std::collections::HashSet;

use crate::http::{InternalRequest, InternalResponse, Method};
use crate::models::error::AdapterError;
use crate::routes;

/// A route's logic. Plain function pointers keep the registration list
/// resolvable at build time.
pub type Handler = fn(&InternalRequest) -> Result<InternalResponse, AdapterError>;

/// One explicitly registered handler.
pub struct RouteRegistration {
    pub method: Method,
    pub path: &'static str,
    pub handler: Handler,
}

/// Immutable routing table.
pub struct Router {
    routes: Vec<RouteRegistration>,
}

impl Router {
    #[must_use]
    pub const fn new(routes: Vec<RouteRegistration>) -> Self {
        Self { routes }
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteRegistration] {
        &self.routes
    }

    /// Routes a request to its registered handler.
    ///
    /// A path with no registration yields a 404 response; a registered path
    /// invoked with the wrong method yields a 405 carrying an `allow` header.
    /// Trailing slashes are ignored when matching.
    ///
    /// # Errors
    ///
    /// Propagates the handler's own [`AdapterError`]; the entry point maps it
    /// to a 500-class response.
    pub fn dispatch(&self, request: &InternalRequest) -> Result<InternalResponse, AdapterError> {
        let path = normalize(&request.path);

        let mut allowed: Vec<&'static str> = Vec::new();
        for route in &self.routes {
            if normalize(route.path) == path {
                if route.method == request.method {
                    debug!(method = %route.method, path = %route.path, "route matched");
                    return (route.handler)(request);
                }
                allowed.push(route.method.as_str());
            }
        }

        if allowed.is_empty() {
            debug!(path = %request.path, "no route matched");
            return Ok(InternalResponse::json(
                404,
                &json!({ "message": format!("no route matches path {path}") }),
            ));
        }

        let mut response = InternalResponse::json(
            405,
            &json!({
                "message": format!("method {} not allowed for {path}", request.method)
            }),
        );
        response.append_header("allow", allowed.join(", "));
        Ok(response)
    }
}

/// Process-wide singleton built on the first invocation and reused, unchanged,
/// by every warm invocation until the platform discards the process.
pub struct AdapterContext {
    router: Router,
}

impl AdapterContext {
    /// Builds the routing table from the fixed registration list. This is the
    /// whole cold-start path; it performs no I/O and no discovery.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Initialization`] when the registration list
    /// contains two routes for the same method and path, which would make
    /// dispatch order-dependent.
    pub fn initialize() -> Result<Self, AdapterError> {
        let registrations = routes::registrations();
        reject_duplicates(&registrations)?;
        debug!(route_count = registrations.len(), "building routing table");
        Ok(Self {
            router: Router::new(registrations),
        })
    }

    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }
}

fn reject_duplicates(registrations: &[RouteRegistration]) -> Result<(), AdapterError> {
    let mut seen = HashSet::new();
    for route in registrations {
        if !seen.insert((route.method.as_str(), normalize(route.path))) {
            return Err(AdapterError::Initialization(format!(
                "duplicate route registration: {} {}",
                route.method, route.path
            )));
        }
    }
    Ok(())
}

/// Trailing-slash-insensitive comparison key; the root path stays `/`.
fn normalize(path: &str) -> &str {
    path.strip_suffix('/')
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(path)
}
