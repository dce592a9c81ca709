use crate::error::ServiceError;
use uuid::Uuid;

/// A single user-facing error acknowledgement prompt.
///
/// Every prompt gets a fresh id so repeated failures are independently
/// addressable and a shell re-displays each one; presenters keep at most one
/// prompt visible, replacing any prior prompt on a new failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPrompt {
    pub id: Uuid,
    pub title: String,
    pub message: String,
}

impl ErrorPrompt {
    /// Maps a failure to its displayable prompt. Stateless: the prompt
    /// carries everything a shell needs to render and dismiss it.
    pub fn display_error(err: &ServiceError) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Error".to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn prompt_carries_title_and_failure_description() {
        let err = ServiceError::Persistence(StoreError::Store("disk full".to_string()));
        let prompt = ErrorPrompt::display_error(&err);

        assert_eq!(prompt.title, "Error");
        assert!(prompt.message.contains("disk full"));
    }

    #[test]
    fn each_invocation_is_a_fresh_instance() {
        let err = ServiceError::NotFound(Uuid::new_v4());
        let first = ErrorPrompt::display_error(&err);
        let second = ErrorPrompt::display_error(&err);

        assert_ne!(first.id, second.id);
        assert_eq!(first.message, second.message);
    }
}
