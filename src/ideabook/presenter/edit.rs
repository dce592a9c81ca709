use crate::model::Idea;
use crate::notifier::ErrorPrompt;
use crate::service::IdeaService;
use crate::store::IdeaStore;
use uuid::Uuid;

/// What the shell should do after a submit: close the edit view or keep it
/// open with the drafts intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSignal {
    Dismiss,
    Stay,
}

/// Presents a single idea's editable fields.
///
/// Holds the idea by id only; the drafts are seeded from the idea exactly
/// once, at construction, and survive any number of re-renders after that.
pub struct EditPresenter {
    idea_id: Uuid,
    pub draft_title: String,
    pub draft_description: String,
    error_prompt: Option<ErrorPrompt>,
}

impl EditPresenter {
    pub fn new(idea: &Idea) -> Self {
        Self {
            idea_id: idea.id,
            draft_title: idea.title.clone(),
            draft_description: idea.description.clone(),
            error_prompt: None,
        }
    }

    pub fn idea_id(&self) -> Uuid {
        self.idea_id
    }

    /// Saves the drafts as a whole-record replace. `Dismiss` on success —
    /// the one completion signal the shell navigates back on. On failure the
    /// error goes to the notifier and the view stays open.
    pub fn submit_update<S: IdeaStore>(&mut self, service: &mut IdeaService<S>) -> EditSignal {
        match service.update(
            self.idea_id,
            self.draft_title.clone(),
            self.draft_description.clone(),
        ) {
            Ok(_) => EditSignal::Dismiss,
            Err(err) => {
                self.error_prompt = Some(ErrorPrompt::display_error(&err));
                EditSignal::Stay
            }
        }
    }

    pub fn error_prompt(&self) -> Option<&ErrorPrompt> {
        self.error_prompt.as_ref()
    }

    pub fn take_error_prompt(&mut self) -> Option<ErrorPrompt> {
        self.error_prompt.take()
    }
}
