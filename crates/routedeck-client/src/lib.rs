pub mod api;
pub mod client;
pub mod envelope;
pub mod error;

pub use api::{ListQuery, RouteApi};
pub use client::RoutesClient;
pub use envelope::{apply_name_filter, extract_records};
pub use error::{ApiError, Result};
