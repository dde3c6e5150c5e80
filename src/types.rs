//! Core types for synthetic seismic catalogues
//!
//! Models a catalogue of earthquake events whose fields may be deliberately
//! absent or wrongly typed. Corruptible scalar fields are stored as
//! `Option<FieldValue>` rather than plain numbers so that injected defects
//! (missing fields, string placeholders, nested garbage) stay representable
//! without breaking the serialized shape expected by downstream validators.

use serde::{Deserialize, Serialize};

/// A loosely-typed field value on an event.
///
/// Well-formed events only ever hold `Number` (coordinates, depth, magnitude)
/// or `Text` (timestamps). Fault injection may swap in a `Text` placeholder
/// where a number belongs, or a `Nested` structure where nothing belongs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Nested(serde_json::Value),
}

impl FieldValue {
    /// Numeric view of the value, `None` for text or nested garbage.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the value, `None` for numbers or nested garbage.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// One nodal plane of a focal mechanism solution (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodalPlane {
    pub strike: i32,
    pub dip: i32,
    pub rake: i32,
}

/// A conjugate pair of nodal planes.
///
/// Plane 2 is always derived from plane 1 as `(strike+180) % 360, dip, -rake`,
/// encoding the ambiguity between the two mathematically equivalent
/// fault-plane solutions of a moment tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalMechanism {
    #[serde(rename = "nodalPlane1")]
    pub nodal_plane1: NodalPlane,
    #[serde(rename = "nodalPlane2")]
    pub nodal_plane2: NodalPlane,
}

impl FocalMechanism {
    /// Build the conjugate pair from plane 1 angles.
    pub fn from_plane1(strike: i32, dip: i32, rake: i32) -> Self {
        Self {
            nodal_plane1: NodalPlane { strike, dip, rake },
            nodal_plane2: NodalPlane {
                strike: (strike + 180) % 360,
                dip,
                rake: -rake,
            },
        }
    }
}

/// A single seismic observation.
///
/// Every field except `public_id` may be removed or retyped by fault
/// injection; absent fields are omitted from the serialized record entirely
/// rather than emitted as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "publicID")]
    pub public_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<FieldValue>,
    /// Present iff magnitude >= 5.0 at synthesis time; always a list of one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_mechanisms: Option<Vec<FocalMechanism>>,
    /// Defect tag (`invalid:<case>` or `anomaly:<case>`), only on corrupted events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_note: Option<String>,
}

impl Event {
    /// Magnitude as a number, `None` when the field is absent or non-numeric.
    pub fn numeric_magnitude(&self) -> Option<f64> {
        self.magnitude.as_ref().and_then(FieldValue::as_number)
    }

    /// Sort key for time ordering.
    ///
    /// Missing and non-string time values both collapse to the empty string,
    /// so corrupted events sort first without failing the comparison.
    pub fn time_sort_key(&self) -> &str {
        self.time
            .as_ref()
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    /// Whether the event was tagged by invalid-case injection.
    pub fn is_invalid(&self) -> bool {
        self.validation_note
            .as_deref()
            .is_some_and(|n| n.starts_with("invalid:"))
    }

    /// Whether the event was tagged by cross-field anomaly injection.
    pub fn is_anomaly(&self) -> bool {
        self.validation_note
            .as_deref()
            .is_some_and(|n| n.starts_with("anomaly:"))
    }
}

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicBounds {
    #[serde(rename = "minLatitude")]
    pub min_latitude: f64,
    #[serde(rename = "maxLatitude")]
    pub max_latitude: f64,
    #[serde(rename = "minLongitude")]
    pub min_longitude: f64,
    #[serde(rename = "maxLongitude")]
    pub max_longitude: f64,
}

/// Catalogue time window, serialized as second-precision UTC strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Fault-motion style used to bias sampled focal mechanism angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TectonicRegime {
    /// Thrust/reverse faulting common in subduction zones
    Subduction,
    /// Near-vertical planes, lateral motion
    StrikeSlip,
    /// Extensional normal faulting
    Normal,
}

/// Depth band a catalogue's events are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DepthRegime {
    Shallow,
    Intermediate,
    Deep,
}

/// Min/max over the numeric magnitudes in a catalogue.
///
/// Both bounds are null when injection left no numeric magnitude behind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summary statistics computed over the assembled event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_events: usize,
    pub invalid_events: usize,
    pub invalid_ratio: f64,
    pub events_with_focal_mechanisms: usize,
    pub magnitude_range: MagnitudeRange,
}

/// The top-level emitted structure: metadata, statistics, and the ordered
/// event list. Field names match the persisted JSON shape consumed by
/// downstream validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    pub catalogue_name: String,
    pub region: String,
    pub description: String,
    pub geographic_bounds: GeographicBounds,
    pub time_range: TimeRange,
    pub statistics: Statistics,
    pub events: Vec<Event>,
}
