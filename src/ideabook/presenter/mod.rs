//! # Presenters
//!
//! Presenters sit between user input and the [`IdeaService`]: they hold the
//! transient draft state a UI binds to, issue operations against the
//! service, and route failures to an [`ErrorPrompt`]. They never print, and
//! they never mutate an [`Idea`] directly — all mutation goes through the
//! service so the store's atomicity guarantee holds.
//!
//! A shell (the CLI binary here, but any UI) drives a presenter and renders
//! its state after each call.
//!
//! [`IdeaService`]: crate::service::IdeaService
//! [`ErrorPrompt`]: crate::notifier::ErrorPrompt
//! [`Idea`]: crate::model::Idea

pub mod edit;
pub mod list;

pub use edit::{EditPresenter, EditSignal};
pub use list::ListPresenter;
