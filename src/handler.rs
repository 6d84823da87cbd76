use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::OnceCell;

use crate::models::error::AdapterError;
use crate::models::event::{InvocationEvent, InvocationResponse};
use crate::router::AdapterContext;
use crate::translate;

/// Process-wide entry point. Owns the lazily-initialized [`AdapterContext`]:
/// the first call builds it, every later call reads it. The context is
/// immutable after initialization, so warm invocations share it freely.
pub struct Adapter {
    context: OnceCell<AdapterContext>,
    cold_starts: AtomicUsize,
}

impl Adapter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            context: OnceCell::const_new(),
            cold_starts: AtomicUsize::new(0),
        }
    }

    /// Number of times the expensive init path actually ran. Stays at 1 for
    /// the lifetime of the process no matter how many invocations race the
    /// first call.
    #[must_use]
    pub fn init_count(&self) -> usize {
        self.cold_starts.load(Ordering::SeqCst)
    }

    /// Handles one proxy invocation.
    ///
    /// Malformed events become 400 responses and handler failures become 500
    /// responses; every caught error produces a well-formed response, never a
    /// hang.
    ///
    /// # Errors
    ///
    /// Only first-call initialization failures escape, as a `Diagnostic` with
    /// `error_type = "InitializationError"`. No valid response can be built
    /// before the routing table exists, so the platform is expected to
    /// discard and replace the process.
    pub async fn handle(&self, event: InvocationEvent) -> Result<InvocationResponse, Diagnostic> {
        let context = self.context().await.map_err(|e| {
            error!(error = %e, "adapter initialization failed");
            Diagnostic {
                error_type: e.error_type().to_string(),
                error_message: e.to_string(),
            }
        })?;

        let request = match translate::to_internal_request(&event) {
            Ok(request) => request,
            Err(e) => {
                info!(error = %e, "rejecting malformed event");
                return Ok(error_response(&e));
            }
        };

        debug!(method = %request.method, path = %request.path, "dispatching request");
        let response = match context.router().dispatch(&request) {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, method = %request.method, path = %request.path, "request failed");
                return Ok(error_response(&e));
            }
        };

        Ok(translate::to_invocation_response(response))
    }

    // Concurrent first calls are serialized by the cell; exactly one runs the
    // init closure, the rest await its result.
    async fn context(&self) -> Result<&AdapterContext, AdapterError> {
        self.context
            .get_or_try_init(|| async {
                self.cold_starts.fetch_add(1, Ordering::SeqCst);
                let context = AdapterContext::initialize()?;
                info!(
                    routes = context.router().routes().len(),
                    "adapter context initialized"
                );
                Ok(context)
            })
            .await
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new()
    }
}

fn error_response(error: &AdapterError) -> InvocationResponse {
    translate::to_invocation_response(crate::http::InternalResponse::json(
        error.status_code(),
        &json!({
            "errorType": error.error_type(),
            "message": error.to_string(),
        }),
    ))
}

static ADAPTER: Adapter = Adapter::new();

/// Lambda event handler wired in `main` via `service_fn`. Delegates to the
/// process-wide [`Adapter`].
///
/// # Errors
///
/// Returns a `Diagnostic` only when first-call initialization fails; every
/// per-request error is mapped to an [`InvocationResponse`].
pub async fn function_handler(
    event: LambdaEvent<InvocationEvent>,
) -> Result<InvocationResponse, Diagnostic> {
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, "received invocation");
    ADAPTER.handle(payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_response_is_well_formed() {
        let error = AdapterError::MalformedEvent("missing httpMethod".to_string());
        let response = error_response(&error);
        assert_eq!(response.status_code, 400);
        assert!(!response.is_base64_encoded);
        assert!(response.body.is_some());
    }

    #[test]
    fn test_handle_maps_malformed_event_to_response() {
        let adapter = Adapter::new();
        let event: InvocationEvent = serde_json::from_value(json!({})).unwrap();
        let response = tokio_test::block_on(adapter.handle(event)).unwrap();
        assert_eq!(response.status_code, 400);
    }
}
