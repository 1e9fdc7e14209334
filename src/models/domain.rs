use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geographic position used by the location picker and radius search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Unit for the free-form duration field on a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Hours,
    Days,
}

/// Who can see a published activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    All,
    Followers,
    #[serde(rename = "Club members")]
    ClubMembers,
}

/// A published activity listing.
///
/// This is the flat record an accepted draft produces: the generic fields all
/// activity kinds share, plus whatever sport-specific fields the creation form
/// collected, carried through unchanged in `details`.
///
/// Dates and times stay the strings the form collected; no identifier or
/// timestamp is assigned here (that belongs to a real backend store).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub meetup_location: String,
    pub organizer: String,
    pub duration: String,
    pub duration_unit: DurationUnit,
    pub max_participants: String,
    pub special_comments: String,
    pub subtype: String,
    /// Demographic label from the gender catalog, e.g. "All genders"
    pub gender: String,
    pub age_min: String,
    pub age_max: String,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Set when the activity is hosted by a club the user belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    /// Sport-specific fields, flattened into the record on the wire
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_serializes_details_flat() {
        let mut details = Map::new();
        details.insert("courtType".to_string(), Value::from("Hard court"));

        let activity = Activity {
            kind: "tennis".to_string(),
            title: "Singles tennis".to_string(),
            details,
            ..Default::default()
        };

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "tennis");
        // Sport-specific fields sit at the top level, not nested
        assert_eq!(json["courtType"], "Hard court");
    }

    #[test]
    fn test_visibility_wire_names() {
        let json = serde_json::to_string(&Visibility::ClubMembers).unwrap();
        assert_eq!(json, "\"Club members\"");
        let json = serde_json::to_string(&Visibility::All).unwrap();
        assert_eq!(json, "\"All\"");
    }

    #[test]
    fn test_duration_unit_wire_names() {
        assert_eq!(serde_json::to_string(&DurationUnit::Hours).unwrap(), "\"hours\"");
        assert_eq!(serde_json::to_string(&DurationUnit::Days).unwrap(), "\"days\"");
    }
}
