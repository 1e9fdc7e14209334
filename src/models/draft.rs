use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{Activity, Coordinates, DurationUnit, Visibility};

/// Why a draft could not be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Required fields are empty. The draft is kept as-is so the user can
    /// correct it; nothing reaches the store.
    #[error("please fill in all required fields: {0}")]
    MissingFields(String),
}

/// An in-progress, uncommitted activity listing.
///
/// Accumulates free-form field edits from the creation form. Everything stays
/// the text the user typed - age bounds and fees are not range-checked or
/// format-checked, only the four required fields are enforced on submit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    /// Activity kind, e.g. "tennis"
    #[serde(rename = "type")]
    pub kind: String,
    /// Selected variant within the kind, e.g. "Singles" or "Mixed Doubles"
    pub subtype: String,
    #[validate(length(min = 1))]
    pub max_participants: String,
    pub duration: String,
    pub duration_unit: DurationUnit,
    #[validate(length(min = 1))]
    pub meetup_location: String,
    pub coordinates: Option<Coordinates>,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    pub female_only: bool,
    pub age_min: String,
    pub age_max: String,
    pub visibility: Visibility,
    pub special_comments: String,
    pub organizer: String,
    /// Venue used when composing the display title, e.g. the tennis club
    pub venue: String,
    pub image_src: Option<String>,
    /// Sport-specific fields merged into the published record unchanged
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl ActivityDraft {
    /// Fresh draft for an activity kind, with the form's starting values
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            subtype: String::new(),
            max_participants: String::new(),
            duration: String::new(),
            duration_unit: DurationUnit::Hours,
            meetup_location: String::new(),
            coordinates: None,
            date: String::new(),
            time: String::new(),
            female_only: false,
            age_min: String::new(),
            age_max: String::new(),
            visibility: Visibility::All,
            special_comments: String::new(),
            organizer: "You".to_string(),
            venue: String::new(),
            image_src: None,
            extras: Map::new(),
        }
    }

    /// Fresh tennis draft, pre-filled the way the tennis form opens
    pub fn tennis() -> Self {
        let details = TennisDetails::default();
        let mut draft = Self::new("tennis");
        draft.subtype = "Singles".to_string();
        draft.max_participants = "4".to_string();
        draft.extras = details.into_extras();
        draft
    }

    /// Replace the sport-specific payload
    pub fn set_tennis_details(&mut self, details: TennisDetails) {
        self.venue = details.tennis_club.clone();
        self.extras = details.into_extras();
    }

    /// Names of required fields that are still empty, in form order.
    ///
    /// Mirrors the form's falsy check: only a truly empty string counts as
    /// unset, whitespace passes.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.max_participants.is_empty() {
            missing.push("maxParticipants");
        }
        if self.meetup_location.is_empty() {
            missing.push("meetupLocation");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        if self.time.is_empty() {
            missing.push("time");
        }
        missing
    }

    /// Required-field check gating submission
    pub fn check_required(&self) -> Result<(), DraftError> {
        if self.validate().is_ok() {
            return Ok(());
        }
        Err(DraftError::MissingFields(self.missing_required().join(", ")))
    }

    /// Display title composed from the selected variant, the kind, and the
    /// venue when one is set: "Singles tennis at Wimbledon Club"
    pub fn composed_title(&self) -> String {
        let mut title = if self.subtype.is_empty() {
            self.kind.clone()
        } else {
            format!("{} {}", self.subtype, self.kind)
        };
        if !self.venue.is_empty() {
            title.push_str(" at ");
            title.push_str(&self.venue);
        }
        title
    }

    /// Demographic label the published record carries
    pub fn gender_label(&self) -> &'static str {
        if self.female_only {
            "Female only"
        } else {
            "All genders"
        }
    }

    /// Validate and turn the draft into a publishable record.
    ///
    /// Fails if any required field is empty; the caller keeps the draft. On
    /// success the generic fields and the sport-specific payload merge into
    /// one flat record.
    pub fn into_activity(self) -> Result<Activity, DraftError> {
        self.check_required()?;

        let gender = self.gender_label().to_string();
        Ok(Activity {
            kind: self.kind.clone(),
            title: self.composed_title(),
            date: self.date,
            time: self.time,
            location: self.meetup_location.clone(),
            meetup_location: self.meetup_location,
            organizer: self.organizer,
            duration: self.duration,
            duration_unit: self.duration_unit,
            max_participants: self.max_participants,
            special_comments: self.special_comments,
            subtype: self.subtype,
            gender,
            age_min: self.age_min,
            age_max: self.age_max,
            visibility: self.visibility,
            coordinates: self.coordinates,
            club: None,
            gear: None,
            pace: None,
            distance_km: None,
            elevation_m: None,
            image_src: self.image_src,
            details: self.extras,
        })
    }
}

/// Tennis-specific fields from the tennis creation form.
///
/// All free text except the toggles; defaults mirror how the form opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisDetails {
    pub difficulty: String,
    pub skill_level: String,
    pub tennis_club: String,
    pub court_type: String,
    pub court_booking: String,
    pub racket_rental: String,
    pub balls_provided: bool,
    pub coaching: bool,
    pub coach: String,
    pub tournament: bool,
    pub match_format: String,
    pub warmup_time: String,
    pub equipment: String,
    pub dresscode: String,
    pub club_membership: String,
    pub guest_fee: String,
    pub booking_ref: String,
    pub court_number: String,
    pub indoor: bool,
    pub weather_backup: bool,
    pub refreshments: String,
    pub after_match: String,
    pub parking_info: String,
}

impl Default for TennisDetails {
    fn default() -> Self {
        Self {
            difficulty: "Intermediate".to_string(),
            skill_level: "Intermediate".to_string(),
            tennis_club: String::new(),
            court_type: "Hard court".to_string(),
            court_booking: "Required".to_string(),
            racket_rental: "Available".to_string(),
            balls_provided: true,
            coaching: false,
            coach: String::new(),
            tournament: false,
            match_format: "Best of 3 sets".to_string(),
            warmup_time: "15 mins".to_string(),
            equipment: "Bring own".to_string(),
            dresscode: "Tennis whites".to_string(),
            club_membership: "Not required".to_string(),
            guest_fee: String::new(),
            booking_ref: String::new(),
            court_number: String::new(),
            indoor: false,
            weather_backup: true,
            refreshments: String::new(),
            after_match: String::new(),
            parking_info: String::new(),
        }
    }
}

impl TennisDetails {
    /// Flatten into the key/value payload a draft carries
    pub fn into_extras(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A plain struct of strings and bools always maps to an object
            _ => Map::new(),
        }
    }
}
