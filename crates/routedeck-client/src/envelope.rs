//! Response-shape tolerance for the collection endpoint.
//!
//! The exact list envelope is not guaranteed: some deployments return a bare
//! array, others a Spring-style page object with a `content` field, others
//! an ad-hoc wrapper. The policy here accepts all three rather than pinning
//! one and breaking on the rest.

use routedeck_types::Route;
use serde_json::Value;

/// Flatten a decoded list body into its record sequence.
///
/// Resolution order: a bare array is used directly; an object with an
/// array-valued `content` field uses that; otherwise the first field in
/// document order whose value is an array. Anything else is treated as an
/// empty page.
pub fn extract_records(body: Value) -> Vec<Value> {
    match body {
        Value::Array(list) => list,
        Value::Object(map) => {
            // One pass in document order. An array-valued `content` wins even
            // when another array field precedes it; a non-array `content` is
            // skipped without disturbing the order the fallback scan sees.
            let mut fallback = None;
            for (key, value) in map {
                if let Value::Array(list) = value {
                    if key == "content" {
                        return list;
                    }
                    if fallback.is_none() {
                        fallback = Some(list);
                    }
                }
            }
            fallback.unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Re-apply the name filter on the client side.
///
/// The server's `name` query parameter may be silently ignored, so a
/// non-empty filter is always applied again after fetching: case-insensitive
/// substring match on the record name. The result is equal to or smaller
/// than what a server-side filter would return, never larger.
pub fn apply_name_filter(routes: Vec<Route>, filter: &str) -> Vec<Route> {
    if filter.is_empty() {
        return routes;
    }
    let lowered = filter.to_lowercase();
    routes
        .into_iter()
        .filter(|route| route.name.to_lowercase().contains(&lowered))
        .collect()
}
