use serde::{Deserialize, Serialize};

/// Position of a route on the map plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Named location with integer grid coordinates (origin shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub x: i64,
    pub y: i64,
}

/// Partially-specified location (destination shape).
///
/// The destination differs from the origin on the wire: `name` is always
/// serialized (possibly as null), while `x` and `y` only appear when the
/// user actually supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPatch {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl LocationPatch {
    /// True when no destination sub-field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.x.is_none() && self.y.is_none()
    }
}

/// Route record as read back from the collection endpoint.
///
/// Every field is individually absent-tolerant: the server's envelope is not
/// guaranteed, and one malformed record must never abort rendering of the
/// rest of the page. `creation_date` stays an opaque string here; it is only
/// interpreted by [`crate::timefmt::normalize`] at display time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub from: Option<Location>,
    #[serde(default)]
    pub to: Option<LocationPatch>,
    #[serde(default)]
    pub distance: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

/// Write payload for create and update requests.
///
/// No id and no creation date: both are generated server-side. `to` is
/// omitted from the payload entirely unless at least one destination
/// sub-field was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    pub name: String,
    pub coordinates: Coordinates,
    pub from: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<LocationPatch>,
    pub distance: i64,
    pub rating: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn route_tolerates_missing_fields() {
        let route: Route = serde_json::from_value(json!({"name": "R1"})).unwrap();
        assert_eq!(route.name, "R1");
        assert!(route.id.is_none());
        assert!(route.coordinates.is_none());
        assert!(route.creation_date.is_none());
    }

    #[test]
    fn route_deserializes_camel_case_wire_format() {
        let route: Route = serde_json::from_value(json!({
            "id": 7,
            "name": "North loop",
            "coordinates": {"x": 1.5, "y": -2.0},
            "from": {"name": "Depot", "x": 0, "y": 0},
            "to": {"name": "Summit", "x": 10, "y": 20},
            "distance": 42,
            "rating": 5,
            "creationDate": "2024-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(route.id, Some(7));
        assert_eq!(route.from.unwrap().name, "Depot");
        assert_eq!(route.creation_date.as_deref(), Some("2024-03-01T10:00:00Z"));
    }

    #[test]
    fn payload_omits_absent_destination() {
        let payload = RoutePayload {
            name: "R1".to_string(),
            coordinates: Coordinates { x: 0.0, y: 0.0 },
            from: Location {
                name: "A".to_string(),
                x: 1,
                y: 2,
            },
            to: None,
            distance: 2,
            rating: 1,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("to").is_none());
        assert_eq!(value["creationDate"], serde_json::Value::Null);
    }

    #[test]
    fn payload_serializes_partial_destination() {
        let payload = RoutePayload {
            name: "R1".to_string(),
            coordinates: Coordinates { x: 0.0, y: 0.0 },
            from: Location {
                name: "A".to_string(),
                x: 1,
                y: 2,
            },
            to: Some(LocationPatch {
                name: None,
                x: Some(3),
                y: None,
            }),
            distance: 2,
            rating: 1,
        };
        let value = serde_json::to_value(&payload).unwrap();
        // name is always present on the destination, null when not supplied
        assert_eq!(value["to"]["name"], serde_json::Value::Null);
        assert_eq!(value["to"]["x"], 3);
        assert!(value["to"].get("y").is_none());
    }
}
