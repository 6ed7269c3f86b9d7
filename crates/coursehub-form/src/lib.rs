//! Course create/edit form.
//!
//! [`CourseForm`] owns the draft and the transient upload state, talks to the backend
//! through [`coursehub_core::CourseService`] and describes what to draw through
//! [`FormView`]. Each network operation is split into a `begin_*` step that decides what
//! to send and a `finish_*` step that applies the outcome, so event-driven hosts can run
//! the request themselves; the async helpers compose both.

pub mod form;
pub mod mode;
pub mod navigation;
pub mod view;

pub use form::{CourseForm, SubmitOutcome, SubmitRequest};
pub use mode::FormMode;
pub use navigation::{Navigator, RecordingNavigator};
pub use view::{FormView, MediaInput};
