use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Decides which coordinate values count as "present" when placing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatePolicy {
    /// Both coordinates must be finite and non-zero, so a spot sitting exactly
    /// on the equator or the prime meridian is dropped.
    #[default]
    Truthy,
    /// Both coordinates must be finite. Zero is a valid coordinate.
    Present,
}

impl CoordinatePolicy {
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Self::Truthy => value.is_finite() && value != 0.0,
            Self::Present => value.is_finite(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Truthy => "non-zero coordinates",
            Self::Present => "any finite coordinates",
        }
    }
}

/// A hot chocolate spot as served by `/spots` and `/my_spots`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Spot {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub date_traveled: Option<String>,
}

impl Spot {
    /// Marker position, if both coordinates pass `policy`.
    pub fn position(&self, policy: CoordinatePolicy) -> Option<LatLon> {
        let lat = self.lat.filter(|value| policy.accepts(*value))?;
        let lon = self.lon.filter(|value| policy.accepts(*value))?;
        Some(LatLon::new(lat, lon))
    }

    pub fn rating_value(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Image path relative to `/static`, ignoring blank values.
    pub fn image(&self) -> Option<&str> {
        self.image_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }

    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// Decodes a JSON array of spots, keeping backend order.
pub fn parse_spots(body: &str) -> Result<Vec<Spot>> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

// SQLite hands back REAL columns as numbers, but rows written before the
// column affinity kicked in can still carry numeric text.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => Some(value),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
