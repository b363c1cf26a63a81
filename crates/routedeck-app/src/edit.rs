use crate::error::{AppError, Result, ValidationError};
use routedeck_client::RouteApi;
use routedeck_types::{Coordinates, Location, LocationPatch, Route, RoutePayload};

/// Form contents of the open create-or-edit session.
///
/// Fields stay strings (form-input semantics) until submission: a value the
/// user typed that does not parse as a number is representable, validated,
/// and preserved on failure instead of being lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDraft {
    pub name: String,
    pub coord_x: String,
    pub coord_y: String,
    pub from_name: String,
    pub from_x: String,
    pub from_y: String,
    pub to_name: String,
    pub to_x: String,
    pub to_y: String,
    pub distance: String,
    pub rating: String,
}

fn parse_f64(value: &str, field: &'static str) -> std::result::Result<f64, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })
}

fn parse_i64(value: &str, field: &'static str) -> std::result::Result<i64, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })
}

impl RouteDraft {
    /// Populate every form field from an existing record, including the
    /// nested coordinate and location sub-fields where present.
    pub fn from_route(route: &Route) -> Self {
        let opt_num = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            name: route.name.clone(),
            coord_x: route
                .coordinates
                .map(|c| c.x.to_string())
                .unwrap_or_default(),
            coord_y: route
                .coordinates
                .map(|c| c.y.to_string())
                .unwrap_or_default(),
            from_name: route
                .from
                .as_ref()
                .map(|l| l.name.clone())
                .unwrap_or_default(),
            from_x: opt_num(route.from.as_ref().map(|l| l.x)),
            from_y: opt_num(route.from.as_ref().map(|l| l.y)),
            to_name: route
                .to
                .as_ref()
                .and_then(|l| l.name.clone())
                .unwrap_or_default(),
            to_x: opt_num(route.to.as_ref().and_then(|l| l.x)),
            to_y: opt_num(route.to.as_ref().and_then(|l| l.y)),
            distance: opt_num(route.distance),
            rating: opt_num(route.rating),
        }
    }

    /// Validate the form and build the write payload.
    ///
    /// Checks run client-side before any remote call: name non-empty, every
    /// numeric field parseable, distance >= 2, rating >= 1. The destination
    /// is omitted from the payload entirely unless at least one of its
    /// sub-fields was supplied.
    pub fn validate(&self) -> std::result::Result<RoutePayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let coordinates = Coordinates {
            x: parse_f64(&self.coord_x, "coordinates.x")?,
            y: parse_f64(&self.coord_y, "coordinates.y")?,
        };

        let from = Location {
            name: self.from_name.trim().to_string(),
            x: parse_i64(&self.from_x, "from.x")?,
            y: parse_i64(&self.from_y, "from.y")?,
        };

        let distance = parse_i64(&self.distance, "distance")?;
        if distance < 2 {
            return Err(ValidationError::DistanceTooSmall);
        }

        let rating = parse_i64(&self.rating, "rating")?;
        if rating < 1 {
            return Err(ValidationError::RatingTooSmall);
        }

        let to_name = self.to_name.trim();
        let to_x = self.to_x.trim();
        let to_y = self.to_y.trim();
        let to = if to_name.is_empty() && to_x.is_empty() && to_y.is_empty() {
            None
        } else {
            Some(LocationPatch {
                name: (!to_name.is_empty()).then(|| to_name.to_string()),
                x: if to_x.is_empty() {
                    None
                } else {
                    Some(parse_i64(to_x, "to.x")?)
                },
                y: if to_y.is_empty() {
                    None
                } else {
                    Some(parse_i64(to_y, "to.y")?)
                },
            })
        };

        Ok(RoutePayload {
            name: name.to_string(),
            coordinates,
            from,
            to,
            distance,
            rating,
        })
    }
}

/// Lifecycle of the single create-or-edit form.
///
/// At most one session is open at a time, bound to at most one record.
/// A session without an identifier is create-mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        id: Option<i64>,
        draft: RouteDraft,
    },
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn draft(&self) -> Option<&RouteDraft> {
        match self {
            EditSession::Open { draft, .. } => Some(draft),
            EditSession::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut RouteDraft> {
        match self {
            EditSession::Open { draft, .. } => Some(draft),
            EditSession::Closed => None,
        }
    }

    /// Open the form in create-mode with blank fields and no identifier.
    pub fn open_create(&mut self) {
        *self = EditSession::Open {
            id: None,
            draft: RouteDraft::default(),
        };
    }

    /// Open the form for an existing record, populating every field from the
    /// fetched state. A missing record propagates as NotFound and leaves the
    /// session closed.
    pub async fn open_edit<A: RouteApi>(&mut self, api: &A, id: i64) -> Result<()> {
        let route = api.get(id).await?;
        *self = EditSession::Open {
            id: Some(id),
            draft: RouteDraft::from_route(&route),
        };
        Ok(())
    }

    /// Close without writing, discarding entered values.
    pub fn cancel(&mut self) {
        *self = EditSession::Closed;
    }

    /// Validate and write.
    ///
    /// Validation failures return before any remote call. Remote success
    /// closes the session and hands the written record back so the caller
    /// can re-synchronize; on any failure the session stays open with the
    /// entered values intact.
    pub async fn submit<A: RouteApi>(&mut self, api: &A) -> Result<Route> {
        let (id, payload) = match self {
            EditSession::Open { id, draft } => (*id, draft.validate()?),
            EditSession::Closed => {
                return Err(AppError::InvalidOperation(
                    "submit on a closed edit session".to_string(),
                ));
            }
        };

        let written = match id {
            Some(id) => api.update(id, &payload).await?,
            None => api.create(&payload).await?,
        };

        *self = EditSession::Closed;
        Ok(written)
    }
}
