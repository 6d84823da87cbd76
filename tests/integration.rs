// Full-adapter integration tests: event deserialization, lifecycle, and the
// concurrent cold-start guarantee.
#![allow(clippy::unwrap_used)]

use futures::future::join_all;
use lambda_http_adapter::handler::Adapter;
use lambda_http_adapter::models::event::InvocationEvent;
use serde_json::json;
use std::sync::Arc;

fn ping_event() -> InvocationEvent {
    serde_json::from_value(json!({ "httpMethod": "GET", "path": "/ping" })).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_invocations_initialize_once() {
    let adapter = Arc::new(Adapter::new());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let adapter = Arc::clone(&adapter);
            tokio::spawn(async move { adapter.handle(ping_event()).await })
        })
        .collect();

    for result in join_all(tasks).await {
        let response = result.unwrap().unwrap();
        assert_eq!(response.status_code, 200);
        assert!((100..=599).contains(&response.status_code));
    }

    assert_eq!(adapter.init_count(), 1);
}

#[tokio::test]
async fn test_init_is_lazy_until_first_invocation() {
    let adapter = Adapter::new();
    assert_eq!(adapter.init_count(), 0);

    adapter.handle(ping_event()).await.unwrap();
    assert_eq!(adapter.init_count(), 1);
}

#[tokio::test]
async fn test_event_wire_shape_deserializes() {
    // The full proxy event shape, including fields the adapter ignores
    let event: InvocationEvent = serde_json::from_value(json!({
        "resource": "/{proxy+}",
        "httpMethod": "GET",
        "path": "/ping",
        "queryStringParameters": null,
        "multiValueQueryStringParameters": null,
        "headers": { "Host": "example.com" },
        "multiValueHeaders": { "Host": ["example.com"] },
        "requestContext": { "stage": "prod" },
        "body": null,
        "isBase64Encoded": false
    }))
    .unwrap();

    assert_eq!(event.http_method.as_deref(), Some("GET"));
    assert_eq!(event.path.as_deref(), Some("/ping"));
    assert!(event.body.is_none());
}

#[tokio::test]
async fn test_response_wire_shape_serializes() {
    let adapter = Adapter::new();
    let response = adapter.handle(ping_event()).await.unwrap();

    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["statusCode"], 200);
    assert_eq!(wire["isBase64Encoded"], false);
    assert!(wire["multiValueHeaders"]["content-type"].is_array());
    assert!(wire.get("body").is_some());
}
