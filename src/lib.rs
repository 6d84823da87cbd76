//! Cold-start-optimized HTTP adapter bridging API Gateway proxy events to a
//! fixed in-process routing table.
//!
//! The platform runtime invokes [`handler::function_handler`] once per event.
//! On the first call the process builds its [`router::AdapterContext`] from an
//! explicit registration list (no scanning), then serves every warm
//! invocation from the same immutable context.

pub mod handler;
pub mod http;
pub mod models;
pub mod router;
pub mod routes;
pub mod translate;
