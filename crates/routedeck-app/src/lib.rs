pub mod config;
pub mod controller;
pub mod edit;
pub mod error;
pub mod poller;
pub mod presenter;
pub mod view;

pub use config::Config;
pub use controller::{ConfirmDelete, ListController};
pub use edit::{EditSession, RouteDraft};
pub use error::{AppError, Result, ValidationError};
pub use poller::{AppEvent, Poller};
pub use presenter::ListPresenter;
pub use view::{PageMove, ViewState};

#[cfg(test)]
pub(crate) mod test_support;
