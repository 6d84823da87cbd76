//! The application's route set.
//!
//! Routes are enumerated here explicitly rather than discovered by scanning;
//! adding one is a source change. Keeping registration static keeps the
//! cold-start path constant-time and deterministic.

pub mod echo;
pub mod greet;
pub mod ping;

use crate::http::Method;
use crate::router::RouteRegistration;

/// The fixed registration list consumed once at context initialization.
#[must_use]
pub fn registrations() -> Vec<RouteRegistration> {
    vec![
        RouteRegistration {
            method: Method::Get,
            path: "/ping",
            handler: ping::handle,
        },
        RouteRegistration {
            method: Method::Get,
            path: "/greet",
            handler: greet::handle,
        },
        RouteRegistration {
            method: Method::Post,
            path: "/echo",
            handler: echo::handle,
        },
    ]
}
