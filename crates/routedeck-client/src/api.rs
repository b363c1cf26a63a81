use crate::error::Result;
use routedeck_types::{Route, RoutePayload};

/// Page request derived from the current view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index.
    pub page: usize,
    /// Records per page.
    pub size: usize,
    /// Active name filter, empty when cleared.
    pub name: String,
}

impl ListQuery {
    pub fn new(page: usize, size: usize, name: impl Into<String>) -> Self {
        Self {
            page,
            size,
            name: name.into(),
        }
    }

    /// Query pairs for the list request. The `name` parameter is omitted
    /// entirely when the filter is empty.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if !self.name.is_empty() {
            params.push(("name", self.name.clone()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("size", self.size.to_string()));
        params
    }
}

/// Seam over the remote collection endpoint.
///
/// The app layer is generic over this trait so controller and edit-session
/// logic can be exercised against an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait RouteApi {
    /// Fetch one collection page, envelope-normalized and re-filtered.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Route>>;

    /// Fetch a single record by identifier.
    async fn get(&self, id: i64) -> Result<Route>;

    /// Create a new record.
    async fn create(&self, payload: &RoutePayload) -> Result<Route>;

    /// Replace an existing record.
    async fn update(&self, id: i64, payload: &RoutePayload) -> Result<Route>;

    /// Delete a record. Success carries no body.
    async fn delete(&self, id: i64) -> Result<()>;
}
