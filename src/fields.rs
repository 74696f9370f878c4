//! Typed attribute values and detection of the well-known attribute fields.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::surface::MapSurface;

/// A non-null scalar attribute of a map feature.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl AttrValue {
    /// Convert a raw JSON property. Null has no value; arrays and objects are kept as JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(AttrValue::Bool(*b)),
            Value::Number(n) => n.as_f64().map(AttrValue::Number),
            Value::String(s) => Some(AttrValue::Text(s.clone())),
            other => Some(AttrValue::Text(other.to_string())),
        }
    }

    /// Numeric reading of the value; text is parsed after trimming, anything else is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(v) => Some(*v).filter(|v| v.is_finite()),
            AttrValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            AttrValue::Bool(_) => None,
        }
    }

    /// True for `false`, zero, NaN and empty text, which never name a client.
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Text(s) => s.is_empty(),
            AttrValue::Number(v) => *v == 0.0 || v.is_nan(),
            AttrValue::Bool(b) => !b,
        }
    }
}

impl fmt::Display for AttrValue {
    /// Integral numbers print without a fractional part ("12", not "12.0").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            AttrValue::Number(v) => write!(f, "{}", v),
        }
    }
}

/// Candidate names for each well-known field, in lookup priority.
pub const CROP_FIELDS: &[&str] = &["CULTIVO", "cultivo", "Cultivo", "CROP", "crop"];
pub const HECTARES_FIELDS: &[&str] = &[
    "HECTAREAS_ASEGURADAS", "HECTAREAS_DECLARADAS", "hectareas", "HECTAREAS", "HAS", "has",
];
pub const CLIENT_FIELDS: &[&str] = &["CLIENTE", "cliente", "Cliente", "NOMBRE_CLIENTE"];
pub const ZONE_FIELDS: &[&str] = &["ZONA_CZ4", "ZONA", "Zona", "zona", "CZ4"];

/// Attribute names carrying crop, hectares, client and zone, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    pub crop: Option<String>,
    pub hectares: Option<String>,
    pub client: Option<String>,
    pub zone: Option<String>,
}

impl FieldSet {
    /// Pick, for each field, the first candidate that some feature carries.
    pub fn detect<S: MapSurface + ?Sized>(surface: &S) -> Self {
        let find = |candidates: &[&str]| {
            candidates.iter()
                .find(|name| (0..surface.len()).any(|i| surface.attribute(i, name).is_some()))
                .map(|name| name.to_string())
        };

        Self {
            crop: find(CROP_FIELDS),
            hectares: find(HECTARES_FIELDS),
            client: find(CLIENT_FIELDS),
            zone: find(ZONE_FIELDS),
        }
    }

    /// Replace detected names with explicit ones where given.
    pub fn with_overrides(
        mut self,
        crop: Option<&str>,
        hectares: Option<&str>,
        client: Option<&str>,
        zone: Option<&str>,
    ) -> Self {
        if let Some(name) = crop { self.crop = Some(name.to_string()) }
        if let Some(name) = hectares { self.hectares = Some(name.to_string()) }
        if let Some(name) = client { self.client = Some(name.to_string()) }
        if let Some(name) = zone { self.zone = Some(name.to_string()) }
        self
    }
}

/// Sorted, de-duplicated client names for the search box suggestions.
pub fn client_names<S: MapSurface + ?Sized>(surface: &S, client_field: &str) -> Vec<String> {
    let mut names: Vec<String> = (0..surface.len())
        .filter_map(|i| surface.attribute(i, client_field))
        .map(|value| value.to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}
