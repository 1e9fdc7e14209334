use tracing::{info, warn};

use crate::models::{ActivityDraft, DraftError};
use crate::services::store::ActivitySink;

/// One open creation form: a draft plus the sink it publishes into.
///
/// Editing goes straight at the draft; `submit` is the only state change
/// beyond that - it either appends exactly one record or blocks with a
/// validation error and keeps every entered value.
#[derive(Debug)]
pub struct CreateSession<S: ActivitySink> {
    draft: ActivityDraft,
    template: ActivityDraft,
    sink: S,
}

impl<S: ActivitySink> CreateSession<S> {
    /// Open the tennis creation form
    pub fn tennis(sink: S) -> Self {
        Self::with_draft(ActivityDraft::tennis(), sink)
    }

    /// Open a form starting from an arbitrary draft
    pub fn with_draft(draft: ActivityDraft, sink: S) -> Self {
        Self {
            template: draft.clone(),
            draft,
            sink,
        }
    }

    pub fn draft(&self) -> &ActivityDraft {
        &self.draft
    }

    /// Field edits bind directly to the draft
    pub fn draft_mut(&mut self) -> &mut ActivityDraft {
        &mut self.draft
    }

    /// Validate and publish the draft.
    ///
    /// On success the composed record is appended to the sink and the form
    /// resets to its opening state. On failure nothing reaches the sink and
    /// the draft is retained for correction.
    pub fn submit(&mut self) -> Result<(), DraftError> {
        let activity = match self.draft.clone().into_activity() {
            Ok(activity) => activity,
            Err(err) => {
                warn!(%err, "activity submission blocked");
                return Err(err);
            }
        };

        info!(kind = %activity.kind, title = %activity.title, "activity created");
        self.sink.add_activity(activity);
        self.draft = self.template.clone();
        Ok(())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
