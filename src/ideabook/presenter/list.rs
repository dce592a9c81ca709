use crate::model::Idea;
use crate::notifier::ErrorPrompt;
use crate::service::IdeaService;
use crate::store::IdeaStore;

/// Presents the ordered listing plus the new-idea input form.
///
/// The rendered rows are always the result of the last `refresh`; callers
/// re-render after every operation. Rows are a display snapshot only — the
/// store owns the records, and positions handed to [`delete_at`] must come
/// from the listing as currently rendered.
///
/// [`delete_at`]: ListPresenter::delete_at
#[derive(Default)]
pub struct ListPresenter {
    /// Draft input for a new idea. Cleared only on successful create.
    pub draft_title: String,
    pub draft_description: String,
    rows: Vec<Idea>,
    error_prompt: Option<ErrorPrompt>,
}

impl ListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-issues the listing query. Called on first display and after every
    /// successful mutation. On failure the previous rows stay rendered and
    /// the error is routed to the notifier.
    pub fn refresh<S: IdeaStore>(&mut self, service: &IdeaService<S>) {
        match service.list_all() {
            Ok(ideas) => self.rows = ideas,
            Err(err) => self.error_prompt = Some(ErrorPrompt::display_error(&err)),
        }
    }

    /// The listing as currently rendered, in store order.
    pub fn rows(&self) -> &[Idea] {
        &self.rows
    }

    /// Creates an idea from the current drafts. On success the drafts are
    /// cleared and the listing refreshed; on failure the drafts are
    /// preserved so no input is lost.
    pub fn submit_new_idea<S: IdeaStore>(&mut self, service: &mut IdeaService<S>) {
        match service.create(self.draft_title.clone(), self.draft_description.clone()) {
            Ok(_) => {
                self.draft_title.clear();
                self.draft_description.clear();
                self.refresh(service);
            }
            Err(err) => self.error_prompt = Some(ErrorPrompt::display_error(&err)),
        }
    }

    /// Deletes the idea at `position` in the rendered listing.
    ///
    /// A position outside the rendered rows is a caller contract violation
    /// (the caller mixed up snapshots), not a recoverable failure, and
    /// panics. A position whose record was removed behind the presenter's
    /// back is recoverable: the delete fails with not-found and is routed to
    /// the notifier.
    pub fn delete_at<S: IdeaStore>(&mut self, service: &mut IdeaService<S>, position: usize) {
        assert!(
            position < self.rows.len(),
            "delete position {} outside rendered listing of {} rows",
            position,
            self.rows.len()
        );
        let id = self.rows[position].id;
        match service.delete(id) {
            Ok(()) => self.refresh(service),
            Err(err) => self.error_prompt = Some(ErrorPrompt::display_error(&err)),
        }
    }

    /// The currently visible error, if any.
    pub fn error_prompt(&self) -> Option<&ErrorPrompt> {
        self.error_prompt.as_ref()
    }

    /// Dismisses the current error. Returns it so a shell can render it one
    /// last time.
    pub fn take_error_prompt(&mut self) -> Option<ErrorPrompt> {
        self.error_prompt.take()
    }
}
