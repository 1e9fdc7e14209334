use tracing::debug;

use crate::models::{Activity, Coordinates};

/// Submission seam between a creation session and wherever activities land.
///
/// Append-only: no identifiers, no de-duplication, no ordering guarantees
/// beyond insertion order. A real backend store would sit behind this.
pub trait ActivitySink {
    fn add_activity(&mut self, activity: Activity);
}

/// In-memory activity collection backing the browse screen.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection seeded with the demo listings the client ships
    pub fn with_demo_data() -> Self {
        Self {
            activities: demo_activities(),
        }
    }

    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl ActivitySink for ActivityStore {
    fn add_activity(&mut self, activity: Activity) {
        debug!(kind = %activity.kind, title = %activity.title, "activity appended");
        self.activities.push(activity);
    }
}

fn demo_activities() -> Vec<Activity> {
    vec![
        Activity {
            kind: "cycling".to_string(),
            title: "Sunday social ride".to_string(),
            date: "2025-07-06".to_string(),
            time: "09:00".to_string(),
            location: "Richmond Park".to_string(),
            meetup_location: "Roehampton Gate".to_string(),
            organizer: "Sarah".to_string(),
            max_participants: "12".to_string(),
            gender: "All genders".to_string(),
            coordinates: Some(Coordinates::new(51.4513, -0.2719)),
            gear: Some("Own gear required".to_string()),
            pace: Some(22.0),
            distance_km: Some(35.0),
            elevation_m: Some(240.0),
            ..Default::default()
        },
        Activity {
            kind: "climbing".to_string(),
            title: "Westway evening session".to_string(),
            date: "2025-07-03".to_string(),
            time: "19:00".to_string(),
            location: "Westway Climbing Centre".to_string(),
            meetup_location: "Main entrance".to_string(),
            organizer: "Westway Climbing Centre".to_string(),
            max_participants: "8".to_string(),
            gender: "All genders".to_string(),
            club: Some("westway".to_string()),
            coordinates: Some(Coordinates::new(51.5205, -0.2190)),
            gear: Some("Rental available".to_string()),
            ..Default::default()
        },
        Activity {
            kind: "running".to_string(),
            title: "Oxford parkrun meetup".to_string(),
            date: "2025-07-05".to_string(),
            time: "08:30".to_string(),
            location: "Oxford".to_string(),
            meetup_location: "University Parks south gate".to_string(),
            organizer: "Tom".to_string(),
            max_participants: "20".to_string(),
            gender: "Mixed".to_string(),
            coordinates: Some(Coordinates::new(51.7612, -1.2556)),
            distance_km: Some(5.0),
            ..Default::default()
        },
    ]
}
