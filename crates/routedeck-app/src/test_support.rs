use crate::presenter::ListPresenter;
use crate::view::ViewState;
use routedeck_client::{ApiError, ListQuery, Result, RouteApi};
use routedeck_types::{Route, RoutePayload};
use std::cell::RefCell;

pub fn named_route(id: i64, name: &str) -> Route {
    Route {
        id: Some(id),
        name: name.to_string(),
        ..Default::default()
    }
}

/// In-memory stand-in for the collection endpoint.
///
/// Records every call so tests can assert which remote operations were (or
/// were not) issued. `fail_next` makes the next call fail with the given
/// status, after which the fake recovers.
#[derive(Default)]
pub struct MockApi {
    routes: RefCell<Vec<Route>>,
    list_calls: RefCell<usize>,
    deleted: RefCell<Vec<i64>>,
    created: RefCell<Vec<RoutePayload>>,
    updated: RefCell<Vec<(i64, RoutePayload)>>,
    fail_status: RefCell<Option<u16>>,
}

impl MockApi {
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            routes: RefCell::new(routes),
            ..Default::default()
        }
    }

    pub fn fail_next(&self, status: u16) {
        *self.fail_status.borrow_mut() = Some(status);
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.borrow()
    }

    pub fn deleted(&self) -> Vec<i64> {
        self.deleted.borrow().clone()
    }

    pub fn created(&self) -> Vec<RoutePayload> {
        self.created.borrow().clone()
    }

    pub fn updated(&self) -> Vec<(i64, RoutePayload)> {
        self.updated.borrow().clone()
    }

    fn take_failure(&self) -> Result<()> {
        match self.fail_status.borrow_mut().take() {
            Some(status) => Err(ApiError::Status {
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }

    fn payload_to_route(id: i64, payload: &RoutePayload) -> Route {
        Route {
            id: Some(id),
            name: payload.name.clone(),
            coordinates: Some(payload.coordinates),
            from: Some(payload.from.clone()),
            to: payload.to.clone(),
            distance: Some(payload.distance),
            rating: Some(payload.rating),
            creation_date: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }
}

impl RouteApi for MockApi {
    async fn list(&self, _query: &ListQuery) -> Result<Vec<Route>> {
        *self.list_calls.borrow_mut() += 1;
        self.take_failure()?;
        Ok(self.routes.borrow().clone())
    }

    async fn get(&self, id: i64) -> Result<Route> {
        self.take_failure()?;
        self.routes
            .borrow()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    async fn create(&self, payload: &RoutePayload) -> Result<Route> {
        self.take_failure()?;
        self.created.borrow_mut().push(payload.clone());
        let id = self.routes.borrow().len() as i64 + 1;
        let route = Self::payload_to_route(id, payload);
        self.routes.borrow_mut().push(route.clone());
        Ok(route)
    }

    async fn update(&self, id: i64, payload: &RoutePayload) -> Result<Route> {
        self.take_failure()?;
        self.updated.borrow_mut().push((id, payload.clone()));
        let route = Self::payload_to_route(id, payload);
        let mut routes = self.routes.borrow_mut();
        match routes.iter_mut().find(|r| r.id == Some(id)) {
            Some(existing) => {
                *existing = route.clone();
                Ok(route)
            }
            None => Err(ApiError::NotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.take_failure()?;
        self.deleted.borrow_mut().push(id);
        self.routes.borrow_mut().retain(|r| r.id != Some(id));
        Ok(())
    }
}

/// Presenter that records every render for assertions.
#[derive(Default)]
pub struct RecordingPresenter {
    pub pages: Vec<(Vec<Route>, ViewState)>,
    pub errors: Vec<String>,
}

impl ListPresenter for RecordingPresenter {
    fn render_page(&mut self, routes: &[Route], state: &ViewState) {
        self.pages.push((routes.to_vec(), state.clone()));
    }

    fn render_error(&mut self, message: &str, state: &ViewState) {
        let _ = state;
        self.errors.push(message.to_string());
    }
}
