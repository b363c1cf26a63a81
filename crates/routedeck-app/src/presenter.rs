use crate::view::ViewState;
use routedeck_types::Route;

/// Render target for the list view.
///
/// Rendering is always a full replace, never an incremental merge, so the
/// displayed table is internally consistent for whichever response was
/// rendered last. An empty page is a normal render (the implementation shows
/// its own placeholder), a failed fetch goes through `render_error` and
/// leaves the view interactive.
pub trait ListPresenter {
    fn render_page(&mut self, routes: &[Route], state: &ViewState);

    fn render_error(&mut self, message: &str, state: &ViewState);
}
