use tracing::{debug, trace};

use crate::models::{FilterOptions, FilterUpdate};
use crate::services::geolocation::{pinned_label, GeolocationError, LocationProvider};

/// Consumer side of the filter UI.
///
/// `filters_changed` fires only on an explicit apply or clear-all; in-progress
/// edits never reach it. `show_map` is a parameterless request to switch to
/// the map view.
pub trait FilterConsumer {
    fn filters_changed(&mut self, filters: &FilterOptions);

    fn show_map(&mut self) {}
}

/// One open filter panel: an in-progress draft plus its consumer.
///
/// Edits mutate the draft only; the consumer sees filters when the user
/// applies (or clears, which both resets and commits, as the panel's
/// "Clear All" does).
#[derive(Debug)]
pub struct FilterSession<C: FilterConsumer> {
    draft: FilterOptions,
    consumer: C,
}

impl<C: FilterConsumer> FilterSession<C> {
    /// Open a panel with the documented default filters
    pub fn new(consumer: C) -> Self {
        Self::with_filters(FilterOptions::default(), consumer)
    }

    /// Open a panel pre-loaded with the currently committed filters
    pub fn with_filters(current: FilterOptions, consumer: C) -> Self {
        Self {
            draft: current,
            consumer,
        }
    }

    pub fn draft(&self) -> &FilterOptions {
        &self.draft
    }

    /// Replace one field of the draft
    pub fn update(&mut self, update: FilterUpdate) {
        trace!(?update, "filter draft edited");
        self.draft.apply_update(update);
    }

    pub fn toggle_activity_type(&mut self, name: &str, selected: bool) {
        self.draft.toggle_activity_type(name, selected);
    }

    /// Dismiss one activity type chip
    pub fn remove_activity_type(&mut self, name: &str) {
        self.draft.remove_activity_type(name);
    }

    pub fn toggle_gender(&mut self, option: &str, selected: bool) {
        self.draft.toggle_gender(option, selected);
    }

    pub fn toggle_gear(&mut self, option: &str, selected: bool) {
        self.draft.toggle_gear(option, selected);
    }

    /// Dismiss the location chip
    pub fn clear_location(&mut self) {
        self.draft.clear_location();
    }

    /// Count shown on the filter badge
    pub fn active_count(&self) -> usize {
        self.draft.active_count()
    }

    /// Commit the draft. This is the only point at which edits become the
    /// live search filters.
    pub fn apply(&mut self) {
        debug!(active = self.draft.active_count(), "filters applied");
        self.consumer.filters_changed(&self.draft);
    }

    /// Reset the draft to the default state and commit it immediately
    pub fn clear_all(&mut self) {
        self.draft.clear();
        debug!("filters cleared");
        self.consumer.filters_changed(&self.draft);
    }

    /// Forward the map request
    pub fn show_map(&mut self) {
        self.consumer.show_map();
    }

    /// Resolve the device position and write it into the location field.
    ///
    /// On failure the draft is untouched and the error is surfaced for the
    /// UI to report; nothing is retried.
    pub async fn use_current_location<P: LocationProvider>(
        &mut self,
        provider: &P,
    ) -> Result<(), GeolocationError> {
        let position = provider.current_position().await?;
        self.draft.location = pinned_label(position);
        Ok(())
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }
}
