use crate::error::Result;
use crate::presenter::ListPresenter;
use crate::view::{PageMove, ViewState};
use routedeck_client::RouteApi;

/// Confirmation seam for destructive actions. Deletes are never issued
/// without an explicit yes; declining is a complete no-op.
pub trait ConfirmDelete {
    fn confirm(&self, id: i64) -> bool;
}

/// Translates user gestures into view-state transitions and remote writes,
/// each followed by a full re-synchronization (fetch with the current view
/// state, then render).
///
/// Write actions never mutate the view state: page, size, and filter are
/// preserved across edits so the user's place in the list is not lost.
pub struct ListController<A: RouteApi, P: ListPresenter> {
    api: A,
    presenter: P,
    state: ViewState,
}

impl<A: RouteApi, P: ListPresenter> ListController<A, P> {
    pub fn new(api: A, presenter: P) -> Self {
        Self::with_state(api, presenter, ViewState::default())
    }

    pub fn with_state(api: A, presenter: P, state: ViewState) -> Self {
        Self {
            api,
            presenter,
            state,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Fetch with the current view state and render the result.
    ///
    /// A failed fetch renders the inline error placeholder and reports the
    /// failure to the caller: interactive views keep going and retry on the
    /// next poll or gesture, one-shot commands propagate it as their exit
    /// status.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.list(&self.state.to_query()).await {
            Ok(routes) => {
                self.presenter.render_page(&routes, &self.state);
                Ok(())
            }
            Err(err) => {
                self.presenter
                    .render_error(&format!("Failed to load routes: {}", err), &self.state);
                Err(err.into())
            }
        }
    }

    pub async fn search(&mut self, text: impl Into<String>) -> Result<()> {
        self.state.search(text);
        self.refresh().await
    }

    pub async fn clear_search(&mut self) -> Result<()> {
        self.state.clear_search();
        self.refresh().await
    }

    pub async fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.state.set_page_size(size);
        self.refresh().await
    }

    /// Page in the given direction. A refused move (Prev at page 0) issues
    /// no fetch at all.
    pub async fn paginate(&mut self, direction: PageMove) -> Result<()> {
        if self.state.paginate(direction) {
            self.refresh().await
        } else {
            Ok(())
        }
    }

    /// Delete a record after explicit confirmation.
    ///
    /// Returns `Ok(false)` when the user declined (no remote call, table
    /// unchanged). A remote failure propagates to the caller as a blocking
    /// error; on success the list is re-synchronized in place.
    pub async fn delete(&mut self, id: i64, confirm: &dyn ConfirmDelete) -> Result<bool> {
        if !confirm.confirm(id) {
            return Ok(false);
        }
        self.api.delete(id).await?;
        // the delete itself succeeded; a failed re-sync degrades to the
        // placeholder like any other fetch
        let _ = self.refresh().await;
        Ok(true)
    }
}
