//! Response-shape normalization.
//!
//! The backend returns collections in at least three envelope shapes
//! depending on the endpoint and version: a bare array, `{"data": [...]}`,
//! and the doubly-nested paginator `{"data": {"data": [...], "current_page":
//! N, ...}}`. Single entities arrive either bare or wrapped in `"data"`.
//! Centralizing the unwrap here is what keeps every consumer from
//! re-implementing shape guessing (and from the `.filter is not a function`
//! class of bug that guessing wrong produces).
//!
//! Normalization never fails: a shape that matches nothing yields an empty
//! collection, because an empty or error payload is the observed real-world
//! failure mode and list consumers must always be able to iterate.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Pagination metadata extracted from a response, with sentinels filled in
/// for whatever the backend omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Current page (1-based). Sentinel: 1.
    pub page: u64,
    /// Items per page. Sentinel: the item count of this response.
    pub per_page: u64,
    /// Total number of pages. Sentinel: 1.
    pub total_pages: u64,
    /// Total number of items across all pages. Sentinel: the item count of
    /// this response.
    pub total: u64,
}

/// The canonical collection shape guaranteed to downstream consumers,
/// regardless of the wire envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct Paginated<T> {
    /// The items of the current page. Never absent; an empty or
    /// unrecognizable payload normalizes to an empty vector.
    pub items: Vec<T>,
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> Paginated<T> {
    fn from_parts(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            page: meta.page,
            per_page: meta.per_page,
            total_pages: meta.total_pages,
            total: meta.total,
        }
    }

    /// An empty single-page collection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            per_page: 0,
            total_pages: 1,
            total: 0,
        }
    }

    /// `true` when there are pages after the current one.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Paginated<Value> {
    /// Deserialize every item into `T`, keeping the page metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] when an item does not match the expected
    /// shape; a well-formed envelope around malformed records is still an
    /// unexpected payload.
    pub fn try_map<T: DeserializeOwned>(self) -> Result<Paginated<T>> {
        let meta = PageMeta {
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
            total: self.total,
        };
        let items = self
            .items
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<T>>>()?;
        Ok(Paginated::from_parts(items, meta))
    }
}

/// Normalize a raw collection response.
///
/// Shape detection, in priority order:
/// 1. the payload is itself an array;
/// 2. `payload.data` is an array (page metadata beside it when present);
/// 3. `payload.data.data` is an array (page metadata one level down);
/// 4. nothing matches: empty collection, never an error.
#[must_use]
pub fn normalize_list(raw: &Value) -> Paginated<Value> {
    if let Some(items) = raw.as_array() {
        return Paginated::from_parts(items.clone(), normalize_page(raw, items.len()));
    }
    if let Some(data) = raw.get("data") {
        if let Some(items) = data.as_array() {
            return Paginated::from_parts(items.clone(), normalize_page(raw, items.len()));
        }
        if let Some(items) = data.get("data").and_then(Value::as_array) {
            return Paginated::from_parts(items.clone(), normalize_page(data, items.len()));
        }
    }
    Paginated::empty()
}

/// Normalize a raw single-entity response.
///
/// Unwraps one `"data"` level when present and not an array; otherwise the
/// payload is returned as-is, which makes the unwrap idempotent.
#[must_use]
pub fn normalize_item(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) if !inner.is_array() => inner,
            Some(inner) => {
                map.insert("data".to_owned(), inner);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Extract pagination metadata from the object that held the item array.
///
/// Every missing field falls back to its sentinel: `page = 1`,
/// `per_page = items_len`, `total_pages = 1`, `total = items_len`.
#[must_use]
pub fn normalize_page(container: &Value, items_len: usize) -> PageMeta {
    let len = u64::try_from(items_len).unwrap_or(u64::MAX);
    PageMeta {
        page: field(container, "current_page").unwrap_or(1),
        per_page: field(container, "per_page").unwrap_or(len),
        total_pages: field(container, "last_page").unwrap_or(1),
        total: field(container, "total").unwrap_or(len),
    }
}

/// Deserialize a normalized value into a typed DTO.
///
/// # Errors
///
/// Returns [`ApiError::Server`] when the payload does not match the expected
/// shape. The status is reported as 200 since the response itself succeeded.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Server {
        status: 200,
        message: format!("unexpected response shape: {e}"),
    })
}

// Backends have been seen sending numbers as strings; accept both.
fn field(container: &Value, name: &str) -> Option<u64> {
    match container.get(name)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_single_page() {
        let page = normalize_list(&json!([{"id": "a"}, {"id": "b"}]));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn single_wrapped_collection() {
        let page = normalize_list(&json!({
            "data": [1, 2],
            "current_page": 3,
            "last_page": 7,
            "per_page": 2,
            "total": 13
        }));
        assert_eq!(page.items, vec![json!(1), json!(2)]);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.total, 13);
    }

    #[test]
    fn double_wrapped_paginator() {
        let page = normalize_list(&json!({
            "data": {
                "data": [1, 2, 3],
                "current_page": 2,
                "last_page": 5
            }
        }));
        assert_eq!(page.items, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 5);
        // Sentinels for the omitted fields.
        assert_eq!(page.per_page, 3);
        assert_eq!(page.total, 3);
        assert!(page.has_more());
    }

    #[test]
    fn unrecognized_shape_is_empty_not_an_error() {
        for raw in [
            json!({}),
            json!({"data": {"id": "c1"}}),
            json!(null),
            json!("nonsense"),
            json!({"data": 42}),
        ] {
            let page = normalize_list(&raw);
            assert!(page.items.is_empty(), "raw: {raw}");
            assert_eq!(page.page, 1);
            assert_eq!(page.total_pages, 1);
        }
    }

    #[test]
    fn stringly_typed_page_numbers_are_accepted() {
        let page = normalize_list(&json!({
            "data": [1],
            "current_page": "4",
            "last_page": "9"
        }));
        assert_eq!(page.page, 4);
        assert_eq!(page.total_pages, 9);
    }

    #[test]
    fn item_unwrap_is_idempotent() {
        let wrapped = normalize_item(json!({"data": {"id": "c1"}}));
        assert_eq!(wrapped, json!({"id": "c1"}));
        let bare = normalize_item(json!({"id": "c1"}));
        assert_eq!(bare, json!({"id": "c1"}));
    }

    #[test]
    fn item_unwrap_leaves_collection_envelopes_alone() {
        let raw = json!({"data": [1, 2]});
        assert_eq!(normalize_item(raw.clone()), raw);
    }

    #[test]
    fn try_map_decodes_items() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: String,
        }
        let typed = normalize_list(&json!({"data": [{"id": "a"}, {"id": "b"}]}))
            .try_map::<Row>()
            .ok();
        let typed = typed.map(|p| p.items);
        assert_eq!(
            typed,
            Some(vec![Row { id: "a".to_owned() }, Row { id: "b".to_owned() }])
        );
    }

    #[test]
    fn try_map_reports_malformed_records_as_server_error() {
        #[derive(serde::Deserialize, Debug)]
        struct Row {
            #[allow(dead_code)]
            id: String,
        }
        let result = normalize_list(&json!({"data": [{"id": 42}]})).try_map::<Row>();
        assert!(matches!(result, Err(ApiError::Server { status: 200, .. })));
    }
}
