use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Starter activity types a cleared filter keeps selected
pub const DEFAULT_ACTIVITY_TYPES: [&str; 2] = ["Cycling", "Climbing"];

/// Inclusive participant-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PeopleRange {
    fn default() -> Self {
        Self { min: 1, max: 50 }
    }
}

/// Inclusive age bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 16, max: 80 }
    }
}

/// Inclusive bounds for a performance metric (pace, distance, elevation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Requested date window; either bound may be left open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// True when at least one bound is set
    pub fn is_set(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

/// Search radius around the selected location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LocationRange {
    #[default]
    Km10,
    Km20,
    Km50,
    Km100,
}

impl LocationRange {
    /// All options offered by the range picker, in display order
    pub const ALL: [LocationRange; 4] = [
        LocationRange::Km10,
        LocationRange::Km20,
        LocationRange::Km50,
        LocationRange::Km100,
    ];

    pub fn km(self) -> u32 {
        match self {
            LocationRange::Km10 => 10,
            LocationRange::Km20 => 20,
            LocationRange::Km50 => 50,
            LocationRange::Km100 => 100,
        }
    }
}

impl From<LocationRange> for u32 {
    fn from(range: LocationRange) -> Self {
        range.km()
    }
}

impl TryFrom<u32> for LocationRange {
    type Error = String;

    fn try_from(km: u32) -> Result<Self, Self::Error> {
        match km {
            10 => Ok(LocationRange::Km10),
            20 => Ok(LocationRange::Km20),
            50 => Ok(LocationRange::Km50),
            100 => Ok(LocationRange::Km100),
            other => Err(format!("unsupported search range: {}km", other)),
        }
    }
}

/// A structured query describing the activities the user wants to see.
///
/// The filter UI holds one of these as an in-progress draft, mutates it
/// field-by-field, and commits it to the consumer only on an explicit apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub activity_type: BTreeSet<String>,
    pub number_of_people: PeopleRange,
    /// Free text; empty means "unset"
    pub location: String,
    pub location_range: LocationRange,
    pub date: DateRange,
    pub gender: BTreeSet<String>,
    pub age: AgeRange,
    pub gear: BTreeSet<String>,
    pub pace: MetricRange,
    pub distance: MetricRange,
    pub elevation: MetricRange,
    pub club_only: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            activity_type: default_activity_types(),
            number_of_people: PeopleRange::default(),
            location: String::new(),
            location_range: LocationRange::Km10,
            date: DateRange::default(),
            gender: BTreeSet::new(),
            age: AgeRange::default(),
            gear: BTreeSet::new(),
            pace: MetricRange::new(0.0, 100.0),
            distance: MetricRange::new(0.0, 200.0),
            elevation: MetricRange::new(0.0, 5000.0),
            club_only: false,
        }
    }
}

fn default_activity_types() -> BTreeSet<String> {
    DEFAULT_ACTIVITY_TYPES.iter().map(|s| s.to_string()).collect()
}

/// Replacement value for exactly one filter field.
///
/// The original UI funnelled every edit through a single loosely typed
/// `(key, value)` setter; a discriminated update keeps the same one-field
/// replacement semantics without giving up type safety.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    ActivityType(BTreeSet<String>),
    NumberOfPeople(PeopleRange),
    Location(String),
    LocationRange(LocationRange),
    Date(DateRange),
    Gender(BTreeSet<String>),
    Age(AgeRange),
    Gear(BTreeSet<String>),
    Pace(MetricRange),
    Distance(MetricRange),
    Elevation(MetricRange),
    ClubOnly(bool),
}

impl FilterOptions {
    /// Replace one field with a new value.
    ///
    /// No cross-field validation or clamping happens here; in-progress edits
    /// are allowed to be inconsistent until the user applies them.
    pub fn apply_update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::ActivityType(value) => self.activity_type = value,
            FilterUpdate::NumberOfPeople(value) => self.number_of_people = value,
            FilterUpdate::Location(value) => self.location = value,
            FilterUpdate::LocationRange(value) => self.location_range = value,
            FilterUpdate::Date(value) => self.date = value,
            FilterUpdate::Gender(value) => self.gender = value,
            FilterUpdate::Age(value) => self.age = value,
            FilterUpdate::Gear(value) => self.gear = value,
            FilterUpdate::Pace(value) => self.pace = value,
            FilterUpdate::Distance(value) => self.distance = value,
            FilterUpdate::Elevation(value) => self.elevation = value,
            FilterUpdate::ClubOnly(value) => self.club_only = value,
        }
    }

    /// Number of filter dimensions the badge reports as "in use".
    ///
    /// Only activity type, location, date, gender, gear and the club-only
    /// flag contribute. The numeric ranges (people, age, pace, distance,
    /// elevation) are editable but never counted; that quirk ships in the
    /// production UI and is kept here. Activity type counts once it differs
    /// from the starter selection, so a freshly cleared filter reports zero.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.activity_type.is_empty() && self.activity_type != default_activity_types() {
            count += 1;
        }
        if !self.location.is_empty() {
            count += 1;
        }
        if self.date.is_set() {
            count += 1;
        }
        if !self.gender.is_empty() {
            count += 1;
        }
        if !self.gear.is_empty() {
            count += 1;
        }
        if self.club_only {
            count += 1;
        }
        count
    }

    /// Reset every field to the documented clear state.
    ///
    /// Not all-empty: the starter activity types stay selected.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Select or deselect one activity type chip
    pub fn toggle_activity_type(&mut self, name: &str, selected: bool) {
        if selected {
            self.activity_type.insert(name.to_string());
        } else {
            self.activity_type.remove(name);
        }
    }

    /// Remove one activity type chip, leaving the rest selected
    pub fn remove_activity_type(&mut self, name: &str) {
        self.activity_type.remove(name);
    }

    /// Select or deselect one gender option
    pub fn toggle_gender(&mut self, option: &str, selected: bool) {
        if selected {
            self.gender.insert(option.to_string());
        } else {
            self.gender.remove(option);
        }
    }

    /// Select or deselect one gear requirement
    pub fn toggle_gear(&mut self, option: &str, selected: bool) {
        if selected {
            self.gear.insert(option.to_string());
        } else {
            self.gear.remove(option);
        }
    }

    /// Clear the location chip
    pub fn clear_location(&mut self) {
        self.location.clear();
    }
}

/// Coerce free-text numeric input, falling back to the field's default when
/// the text does not parse. Range edits never fail; bad input just snaps back.
pub fn coerce_count(input: &str, fallback: u32) -> u32 {
    input.trim().parse().unwrap_or(fallback)
}

/// Float flavour of [`coerce_count`] for the performance metrics
pub fn coerce_metric(input: &str, fallback: f64) -> f64 {
    input.trim().parse().unwrap_or(fallback)
}
