//! Shared helpers for the GraphQL integration tests.

use review_server::{create_schema, AppSchema};
use reviewdb::Store;
use serde_json::Value;

/// A schema over a freshly seeded store.
pub fn seeded_schema() -> AppSchema {
    create_schema(Store::seeded())
}

/// Execute `query` and return its data, failing on any GraphQL error.
pub async fn execute_ok(schema: &AppSchema, query: &str) -> Value {
    let res = schema.execute(query).await;
    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    res.data.into_json().expect("response data should be JSON")
}

/// Collect the `id` field of every element in a JSON array.
pub fn ids(list: &Value) -> Vec<&str> {
    list.as_array()
        .expect("expected a list")
        .iter()
        .map(|item| item["id"].as_str().expect("id should be a string"))
        .collect()
}
